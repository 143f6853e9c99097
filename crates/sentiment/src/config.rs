// crates/sentiment/src/config.rs

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::models::Sentiment;

/// Default positive keywords (mixed English / Russian stems).
pub const DEFAULT_POSITIVE_KEYWORDS: &[&str] = &[
  "good",
  "great",
  "excellent",
  "awesome",
  "love",
  "happy",
  "positive",
  "best",
  "wonderful",
  "fantastic",
  "хорошо",
  "отлично",
  "прекрасно",
  "любви",
  "счастлив",
];

/// Default negative keywords (mixed English / Russian stems).
pub const DEFAULT_NEGATIVE_KEYWORDS: &[&str] = &[
  "bad",
  "terrible",
  "awful",
  "hate",
  "sad",
  "negative",
  "worst",
  "horrible",
  "disgusting",
  "плохо",
  "ужасно",
  "противно",
  "ненави",
  "грустно",
];

/// Keyword lists used by the classifier.
///
/// Loadable from a JSON file:
/// ```json
/// { "positive": ["good", "great"], "negative": ["bad"] }
/// ```
/// A key omitted from the file keeps its default list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeywordConfig {
  /// Substrings that make a text positive
  #[serde(default = "default_positive")]
  pub positive: Vec<String>,
  /// Substrings that make a text negative (checked after `positive`)
  #[serde(default = "default_negative")]
  pub negative: Vec<String>,
}

/// Default positive keyword list
fn default_positive() -> Vec<String> {
  DEFAULT_POSITIVE_KEYWORDS.iter().map(|s| (*s).to_string()).collect()
}

/// Default negative keyword list
fn default_negative() -> Vec<String> {
  DEFAULT_NEGATIVE_KEYWORDS.iter().map(|s| (*s).to_string()).collect()
}

impl Default for KeywordConfig {
  fn default() -> Self {
    Self {
      positive: default_positive(),
      negative: default_negative(),
    }
  }
}

impl KeywordConfig {
  /// Builds a config from explicit lists.
  pub fn new<P, N>(positive: P, negative: N) -> Self
  where
    P: IntoIterator,
    P::Item: Into<String>,
    N: IntoIterator,
    N::Item: Into<String>,
  {
    Self {
      positive: positive.into_iter().map(Into::into).collect(),
      negative: negative.into_iter().map(Into::into).collect(),
    }
  }

  /// Loads keyword lists from a JSON file.
  ///
  /// # Errors
  /// - `KeywordFileRead` if the file cannot be read
  /// - `KeywordFileParse` if it is not valid JSON of the expected shape
  /// - `BlankKeyword` if validation fails
  pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::KeywordFileRead {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    let config: Self = serde_json::from_str(&raw).map_err(|e| ConfigError::KeywordFileParse {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    config.validate()?;
    Ok(config)
  }

  /// Returns the keyword list for a label.
  ///
  /// `Neutral` has no keywords; it is what remains when nothing matches.
  pub fn keywords_for(&self, label: Sentiment) -> &[String] {
    match label {
      Sentiment::Positive => &self.positive,
      Sentiment::Negative => &self.negative,
      Sentiment::Neutral => &[],
    }
  }

  /// Validates the configuration.
  ///
  /// A blank keyword would match every text, so none may be empty after trimming.
  /// Empty lists are allowed.
  ///
  /// # Errors
  /// Returns `ConfigError::BlankKeyword` for the first blank entry.
  pub fn validate(&self) -> Result<(), ConfigError> {
    for label in [Sentiment::Positive, Sentiment::Negative] {
      if let Some(index) = self.keywords_for(label).iter().position(|k| k.trim().is_empty()) {
        return Err(ConfigError::BlankKeyword { label, index });
      }
    }
    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  fn write_file(temp_dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
  }

  // ─── Defaults ────────────────────────────────────────────────────────────

  #[test]
  fn default_lists_match_constants() {
    let config = KeywordConfig::default();
    assert_eq!(config.positive.len(), 15);
    assert_eq!(config.negative.len(), 14);
    assert!(config.positive.iter().any(|k| k == "счастлив"));
    assert!(config.negative.iter().any(|k| k == "ненави"));
    assert!(config.validate().is_ok());
  }

  #[test]
  fn keywords_for_neutral_is_empty() {
    let config = KeywordConfig::default();
    assert!(config.keywords_for(Sentiment::Neutral).is_empty());
    assert_eq!(config.keywords_for(Sentiment::Positive)[0], "good");
  }

  // ─── validate() ──────────────────────────────────────────────────────────

  #[test]
  fn validate_accepts_empty_lists() {
    let config = KeywordConfig::new(Vec::<String>::new(), Vec::<String>::new());
    assert!(config.validate().is_ok());
  }

  #[test]
  fn validate_rejects_blank_positive_keyword() {
    let config = KeywordConfig::new(["good", "  "], ["bad"]);
    let err = config.validate().unwrap_err();
    assert!(matches!(
      err,
      ConfigError::BlankKeyword {
        label: Sentiment::Positive,
        index: 1
      }
    ));
  }

  #[test]
  fn validate_rejects_empty_negative_keyword() {
    let config = KeywordConfig::new(["good"], [""]);
    let err = config.validate().unwrap_err();
    assert!(matches!(
      err,
      ConfigError::BlankKeyword {
        label: Sentiment::Negative,
        index: 0
      }
    ));
  }

  // ─── from_json_file() ────────────────────────────────────────────────────

  #[test]
  fn from_json_file_reads_both_lists() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "keywords.json", r#"{"positive":["yay"],"negative":["boo"]}"#);

    let config = KeywordConfig::from_json_file(&path).unwrap();
    assert_eq!(config.positive, vec!["yay".to_string()]);
    assert_eq!(config.negative, vec!["boo".to_string()]);
  }

  #[test]
  fn from_json_file_fills_missing_list_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "keywords.json", r#"{"negative":["boo"]}"#);

    let config = KeywordConfig::from_json_file(&path).unwrap();
    assert_eq!(config.positive, KeywordConfig::default().positive);
    assert_eq!(config.negative, vec!["boo".to_string()]);
  }

  #[test]
  fn from_json_file_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.json");

    let err = KeywordConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::KeywordFileRead { .. }));
  }

  #[test]
  fn from_json_file_malformed_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "keywords.json", "{ positive: ");

    let err = KeywordConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::KeywordFileParse { .. }));
  }

  #[test]
  fn from_json_file_validates_contents() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "keywords.json", r#"{"positive":["ok",""]}"#);

    let err = KeywordConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::BlankKeyword { index: 1, .. }));
  }
}
