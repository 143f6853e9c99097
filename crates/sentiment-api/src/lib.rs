//! sentiment-api crate
//!
//! Web server providing keyword sentiment classification as HTTP API.
//!
//! ## Endpoints
//! - `GET /api/sentiment?text=...` - Sentiment Classification
//! - `POST /api/sentiment` - Sentiment Classification (JSON body)
//! - `GET /api/health` - Health Check
//! - `GET /api/metrics-summary` - Classification Counters
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8080/api/sentiment \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "this is a great day"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{HealthResponse, MetricsSummaryResponse, SentimentRequest, SentimentResponse};
pub use service::SentimentApiServiceFull;
