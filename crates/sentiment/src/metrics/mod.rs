//! metrics module
pub mod recorder;

pub use recorder::{
  AtomicMetricsRecorder, COUNTER_NEGATIVE, COUNTER_NEUTRAL, COUNTER_POSITIVE, COUNTER_REQUESTS,
  MetricsRecorder, MetricsSnapshot,
};
