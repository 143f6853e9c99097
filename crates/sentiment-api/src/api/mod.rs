//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_sentiment, health_check, metrics_summary, post_sentiment};
pub use routes::{create_router, run_server};
pub use state::AppState;
