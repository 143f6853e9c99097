//! モデルモジュール

mod request;
mod response;

pub use request::SentimentRequest;
pub use response::{HealthResponse, MetricsSummaryResponse, SentimentResponse};
