//! errors module
pub mod error_definition;

pub use error_definition::{ConfigError, SentimentError, SentimentResult};
