//! Response Model Definition

use serde::Serialize;

use sentiment::metrics::MetricsSnapshot;
use sentiment::models::{ClassificationResult, Sentiment};

use crate::config::{SERVICE_NAME, SERVICE_VERSION};

/// Sentiment Classification Response
#[derive(Debug, Clone, Serialize)]
pub struct SentimentResponse {
  /// Original input text
  pub text: String,
  /// Label: "positive" | "negative" | "neutral"
  pub sentiment: Sentiment,
  /// Score rounded to 2 decimals
  pub score: f64,
  /// ISO-8601 local date-time of classification
  pub timestamp: String,
}

impl From<ClassificationResult> for SentimentResponse {
  fn from(result: ClassificationResult) -> Self {
    Self {
      text: result.text,
      sentiment: result.sentiment,
      score: result.score,
      timestamp: result.timestamp,
    }
  }
}

/// Health Check Response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
  /// Always "UP" while the process answers
  pub status: &'static str,
  /// Service name
  pub service: &'static str,
  /// Service version
  pub version: &'static str,
}

impl HealthResponse {
  /// Response for a running service
  #[must_use]
  pub fn up() -> Self {
    Self {
      status: "UP",
      service: SERVICE_NAME,
      version: SERVICE_VERSION,
    }
  }
}

/// Counter snapshot returned by `GET /api/metrics-summary`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSummaryResponse {
  /// Total classified texts
  pub total_requests: u64,
  /// Positive count
  pub positive_count: u64,
  /// Negative count
  pub negative_count: u64,
  /// Neutral count
  pub neutral_count: u64,
}

impl From<MetricsSnapshot> for MetricsSummaryResponse {
  fn from(snapshot: MetricsSnapshot) -> Self {
    Self {
      total_requests: snapshot.total_requests,
      positive_count: snapshot.positive_count,
      negative_count: snapshot.negative_count,
      neutral_count: snapshot.neutral_count,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sentiment_response_serialization() {
    let response = SentimentResponse::from(ClassificationResult {
      text: "this is terrible".to_string(),
      sentiment: Sentiment::Negative,
      score: -0.87,
      timestamp: "2026-10-19T09:30:12.345".to_string(),
    });

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["text"], "this is terrible");
    assert_eq!(json["sentiment"], "negative");
    assert_eq!(json["score"], -0.87);
    assert_eq!(json["timestamp"], "2026-10-19T09:30:12.345");
  }

  #[test]
  fn health_response_shape() {
    let json = serde_json::to_value(HealthResponse::up()).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "status": "UP",
        "service": "Sentiment Analysis API",
        "version": "1.0.0"
      })
    );
  }

  #[test]
  fn metrics_summary_from_snapshot() {
    let summary = MetricsSummaryResponse::from(MetricsSnapshot {
      total_requests: 5,
      positive_count: 3,
      negative_count: 1,
      neutral_count: 1,
    });

    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"total_requests\":5"));
    assert!(json.contains("\"positive_count\":3"));
    assert!(json.contains("\"negative_count\":1"));
    assert!(json.contains("\"neutral_count\":1"));
  }
}
