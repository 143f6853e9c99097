//! Config loading from environment variables

use std::path::PathBuf;

use super::constants::{DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_KEYWORDS_FILE, ENV_SCORE_SEED};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:8080")
  pub bind_addr: String,
  /// JSON file overriding the built-in keyword lists
  pub keywords_file: Option<PathBuf>,
  /// Seed for reproducible scores; thread-local randomness when `None`
  pub score_seed: Option<u64>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      keywords_file: None,
      score_seed: None,
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// Empty values are treated as unset.
  ///
  /// # Errors
  /// Returns an error if `SENTIMENT_SCORE_SEED` is not a valid `u64`
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let bind_addr = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let keywords_file = get(ENV_KEYWORDS_FILE).map(PathBuf::from);

    let score_seed = get(ENV_SCORE_SEED)
      .map(|raw| {
        raw.trim().parse::<u64>().map_err(|e| {
          ApiError::config(format!("{ENV_SCORE_SEED} must be an unsigned integer: {raw} ({e})"))
        })
      })
      .transpose()?;

    Ok(Self {
      bind_addr,
      keywords_file,
      score_seed,
    })
  }
}
