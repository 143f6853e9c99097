//! 分類件数のカウンター
//!
//! ラベルごとのカウンターと総リクエスト数カウンターを保持する。
//! 分類器にはハンドルとして注入し、プロセスグローバルな状態は持たない。

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::Sentiment;

/// 総リクエスト数カウンター名
pub const COUNTER_REQUESTS: &str = "sentiment.requests";
/// positive カウンター名
pub const COUNTER_POSITIVE: &str = "sentiment.positive";
/// negative カウンター名
pub const COUNTER_NEGATIVE: &str = "sentiment.negative";
/// neutral カウンター名
pub const COUNTER_NEUTRAL: &str = "sentiment.neutral";

/// カウンターのスナップショット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
  /// 分類した総件数
  pub total_requests: u64,
  /// positive 件数
  pub positive_count: u64,
  /// negative 件数
  pub negative_count: u64,
  /// neutral 件数
  pub neutral_count: u64,
}

/// 分類結果の記録先
///
/// 本番実装 (`AtomicMetricsRecorder`) とテスト用の実装を差し替えられるようにする。
pub trait MetricsRecorder: Send + Sync {
  /// 1 件の分類を記録する
  ///
  /// ラベルのカウンターを 1 つだけ、総数カウンターを 1 つ増やす。
  fn record(&self, label: Sentiment);

  /// 現在のカウンター値を返す
  fn snapshot(&self) -> MetricsSnapshot;
}

/// `AtomicU64` によるカウンター実装
#[derive(Debug, Default)]
pub struct AtomicMetricsRecorder {
  requests: AtomicU64,
  positive: AtomicU64,
  negative: AtomicU64,
  neutral: AtomicU64,
}

impl AtomicMetricsRecorder {
  /// すべて 0 のカウンターを作成する
  pub fn new() -> Self {
    Self::default()
  }

  fn counter_for(&self, label: Sentiment) -> (&AtomicU64, &'static str) {
    match label {
      Sentiment::Positive => (&self.positive, COUNTER_POSITIVE),
      Sentiment::Negative => (&self.negative, COUNTER_NEGATIVE),
      Sentiment::Neutral => (&self.neutral, COUNTER_NEUTRAL),
    }
  }
}

impl MetricsRecorder for AtomicMetricsRecorder {
  // 総数 → ラベルの順に加算し、スナップショットはラベル → 総数の順に読む。
  // ラベルの Release / Acquire により、読めたラベル分の総数は必ず見える。
  fn record(&self, label: Sentiment) {
    let total = self.requests.fetch_add(1, Ordering::Relaxed) + 1;
    trace!(counter = COUNTER_REQUESTS, value = total, "カウンターを更新");

    let (counter, name) = self.counter_for(label);
    let value = counter.fetch_add(1, Ordering::Release) + 1;
    trace!(counter = name, value, "カウンターを更新");
  }

  fn snapshot(&self) -> MetricsSnapshot {
    let positive_count = self.positive.load(Ordering::Acquire);
    let negative_count = self.negative.load(Ordering::Acquire);
    let neutral_count = self.neutral.load(Ordering::Acquire);

    MetricsSnapshot {
      total_requests: self.requests.load(Ordering::Relaxed),
      positive_count,
      negative_count,
      neutral_count,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;
  use std::thread;

  use super::*;

  #[test]
  fn new_recorder_starts_at_zero() {
    let recorder = AtomicMetricsRecorder::new();
    assert_eq!(recorder.snapshot(), MetricsSnapshot::default());
  }

  #[test]
  fn record_increments_one_label_and_total() {
    let recorder = AtomicMetricsRecorder::new();
    recorder.record(Sentiment::Positive);
    recorder.record(Sentiment::Neutral);
    recorder.record(Sentiment::Positive);

    let snapshot = recorder.snapshot();
    assert_eq!(snapshot.total_requests, 3);
    assert_eq!(snapshot.positive_count, 2);
    assert_eq!(snapshot.negative_count, 0);
    assert_eq!(snapshot.neutral_count, 1);
  }

  #[test]
  fn concurrent_records_keep_counts_consistent() {
    let recorder = Arc::new(AtomicMetricsRecorder::new());

    let handles: Vec<_> = Sentiment::ALL
      .into_iter()
      .map(|label| {
        let recorder = Arc::clone(&recorder);
        thread::spawn(move || {
          for _ in 0..1_000 {
            recorder.record(label);
          }
        })
      })
      .collect();

    for handle in handles {
      handle.join().unwrap();
    }

    let snapshot = recorder.snapshot();
    assert_eq!(snapshot.total_requests, 3_000);
    assert_eq!(
      snapshot.positive_count + snapshot.negative_count + snapshot.neutral_count,
      snapshot.total_requests
    );
  }

  #[test]
  fn snapshot_during_writes_never_exceeds_total() {
    let recorder = Arc::new(AtomicMetricsRecorder::new());

    let writers: Vec<_> = Sentiment::ALL
      .into_iter()
      .map(|label| {
        let recorder = Arc::clone(&recorder);
        thread::spawn(move || {
          for _ in 0..20_000 {
            recorder.record(label);
          }
        })
      })
      .collect();

    let reader = {
      let recorder = Arc::clone(&recorder);
      thread::spawn(move || {
        for _ in 0..20_000 {
          let s = recorder.snapshot();
          let labelled = s.positive_count + s.negative_count + s.neutral_count;
          assert!(
            labelled <= s.total_requests,
            "labels {labelled} > total {}",
            s.total_requests
          );
        }
      })
    };

    for handle in writers {
      handle.join().unwrap();
    }
    reader.join().unwrap();

    let snapshot = recorder.snapshot();
    assert_eq!(snapshot.total_requests, 60_000);
    assert_eq!(
      snapshot.positive_count + snapshot.negative_count + snapshot.neutral_count,
      snapshot.total_requests
    );
  }

  #[test]
  fn snapshot_serializes_with_summary_keys() {
    let snapshot = MetricsSnapshot {
      total_requests: 4,
      positive_count: 2,
      negative_count: 1,
      neutral_count: 1,
    };
    let json = serde_json::to_value(snapshot).unwrap();
    assert_eq!(json["total_requests"], 4);
    assert_eq!(json["positive_count"], 2);
    assert_eq!(json["negative_count"], 1);
    assert_eq!(json["neutral_count"], 1);
  }
}
