//! classifier module
pub mod keyword_classifier;
pub mod score_source;

pub use keyword_classifier::SentimentClassifier;
pub use score_source::{FixedScoreSource, ScoreSource, SeededScoreSource, ThreadRngScoreSource};
