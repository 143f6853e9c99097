//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_KEYWORDS_FILE, ENV_SCORE_SEED, SERVICE_NAME,
  SERVICE_VERSION,
};
pub use env::Config;
