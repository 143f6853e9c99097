//! Sentiment Classification Service

use std::sync::Arc;

use sentiment::SentimentError;
use sentiment::classifier::{
  ScoreSource, SeededScoreSource, SentimentClassifier, ThreadRngScoreSource,
};
use sentiment::config::KeywordConfig;
use sentiment::metrics::{AtomicMetricsRecorder, MetricsRecorder};

use crate::config::Config;
use crate::errors::Result;
use crate::models::{MetricsSummaryResponse, SentimentRequest, SentimentResponse};

/// Common interface for sentiment classification service
///
/// This trait allows swapping production implementation (`SentimentApiServiceFull`) with
/// test stubs/mocks.
pub trait SentimentApiService: Send + Sync {
  /// Classifies the request text
  ///
  /// # Errors
  /// - Input error (missing or blank text)
  fn analyze(&self, request: SentimentRequest) -> Result<SentimentResponse>;

  /// Returns the current classification counters
  fn metrics_summary(&self) -> MetricsSummaryResponse;
}

/// Sentiment Classification Service
///
/// Validates input before it reaches the classifier; the classifier itself
/// assumes non-blank text.
#[derive(Clone)]
pub struct SentimentApiServiceFull {
  /// keyword classifier (internal implementation)
  inner: SentimentClassifier,
}

impl SentimentApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (keyword file and score seed)
  ///
  /// # Errors
  /// Returns an error if the keyword file cannot be loaded or is invalid
  pub fn new(config: &Config) -> Result<Self> {
    let keywords = match &config.keywords_file {
      Some(path) => KeywordConfig::from_json_file(path).map_err(SentimentError::from)?,
      None => KeywordConfig::default(),
    };

    let scores: Arc<dyn ScoreSource> = match config.score_seed {
      Some(seed) => Arc::new(SeededScoreSource::new(seed)),
      None => Arc::new(ThreadRngScoreSource),
    };

    let metrics: Arc<dyn MetricsRecorder> = Arc::new(AtomicMetricsRecorder::new());

    let inner = SentimentClassifier::new(&keywords, scores, metrics)?;

    tracing::debug!(
      positive_keywords = keywords.positive.len(),
      negative_keywords = keywords.negative.len(),
      "キーワードを読み込みました"
    );

    Ok(Self { inner })
  }

  /// Wraps an already built classifier
  #[must_use]
  pub fn with_classifier(classifier: SentimentClassifier) -> Self {
    Self { inner: classifier }
  }

  /// Classifies the request text
  ///
  /// # Arguments
  /// * `request` - Classification request
  ///
  /// # Errors
  /// - If text is missing
  /// - If text is empty or whitespace-only
  pub fn analyze(&self, request: SentimentRequest) -> Result<SentimentResponse> {
    let text = request.into_text()?;
    Ok(self.inner.classify(&text).into())
  }

  /// Returns the current counters
  pub fn metrics_summary(&self) -> MetricsSummaryResponse {
    self.inner.metrics().snapshot().into()
  }
}

/// Production implementation of trait `SentimentApiService`
impl SentimentApiService for SentimentApiServiceFull {
  fn analyze(&self, request: SentimentRequest) -> Result<SentimentResponse> {
    // Note: Writing `self.analyze(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    SentimentApiServiceFull::analyze(self, request)
  }

  fn metrics_summary(&self) -> MetricsSummaryResponse {
    SentimentApiServiceFull::metrics_summary(self)
  }
}
