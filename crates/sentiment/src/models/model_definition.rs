//! Data Model Definition
use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp format of [`ClassificationResult::timestamp`].
///
/// ISO-8601 local date-time without offset. chrono's `%.f` prints the
/// fraction in fixed groups of 3, 6 or 9 digits, so the system clock's
/// precision decides the length (`2026-10-19T09:43:38.519856853`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Sentiment label
///
/// The categorical output of classification. Serialized in lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
  /// At least one positive keyword matched
  Positive,
  /// No positive keyword, at least one negative keyword matched
  Negative,
  /// Nothing matched
  Neutral,
}

impl Sentiment {
  /// All labels, in classification precedence order.
  pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

  /// Returns the label as used on the wire.
  pub fn as_str(&self) -> &'static str {
    match self {
      Sentiment::Positive => "positive",
      Sentiment::Negative => "negative",
      Sentiment::Neutral => "neutral",
    }
  }

  /// Maps a unit value `u` in `[0, 1)` to the label's score range (not rounded).
  ///
  /// - positive: `0.8 + 0.2u` → `[0.8, 1.0)`
  /// - negative: `-0.8 - 0.2u` → `(-1.0, -0.8]`
  /// - neutral: `0.4u - 0.2` → `[-0.2, 0.2)`
  pub fn score_from_unit(&self, unit: f64) -> f64 {
    match self {
      Sentiment::Positive => 0.8 + unit * 0.2,
      Sentiment::Negative => -0.8 - unit * 0.2,
      Sentiment::Neutral => unit * 0.4 - 0.2,
    }
  }

  /// Closed bounds `(min, max)` a rounded score of this label falls in.
  ///
  /// Rounding can reach the open end of the raw range, so both ends are inclusive.
  pub fn score_bounds(&self) -> (f64, f64) {
    match self {
      Sentiment::Positive => (0.8, 1.0),
      Sentiment::Negative => (-1.0, -0.8),
      Sentiment::Neutral => (-0.2, 0.2),
    }
  }
}

impl fmt::Display for Sentiment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Rounds a score to 2 decimal places, half-up (towards positive infinity).
///
/// `-0.125` → `-0.12`, `0.125` → `0.13`.
pub fn round_score(score: f64) -> f64 {
  (score * 100.0 + 0.5).floor() / 100.0
}

/// Result of a single classification
///
/// Constructed fresh per call; carries no identity beyond the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
  /// Original input, unmodified
  pub text: String,

  /// Classified label
  pub sentiment: Sentiment,

  /// Score rounded to 2 decimals, within the label's range
  pub score: f64,

  /// Generation time (see [`TIMESTAMP_FORMAT`])
  pub timestamp: String,
}

impl ClassificationResult {
  /// Builds a result stamped with the current local time.
  ///
  /// `score` is rounded here, so callers pass the raw value.
  pub fn new(text: impl Into<String>, sentiment: Sentiment, score: f64) -> Self {
    Self {
      text: text.into(),
      sentiment,
      score: round_score(score),
      timestamp: Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string(),
    }
  }
}
