//! sentiment キーワード感情分類ライブラリー
//!
//! 小文字化したテキストに対してキーワードの部分一致を調べ、
//! positive / negative / neutral のいずれかに分類する

/// 分類モジュール - SentimentClassifier, ScoreSource 等の分類処理を提供
pub mod classifier;

/// 設定モジュール - KeywordConfig 等の設定構造体を定義
pub mod config;

/// エラーモジュール - SentimentError, SentimentResult等のエラー型を定義
pub mod errors;

/// メトリクスモジュール - MetricsRecorder とカウンター実装を提供
pub mod metrics;

/// データモデルモジュール - Sentiment, ClassificationResult等のデータ構造を定義
pub mod models;

/// 再エクスポート
pub use classifier::{ScoreSource, SentimentClassifier, ThreadRngScoreSource};
pub use config::KeywordConfig;
pub use errors::{SentimentError, SentimentResult};
pub use metrics::{AtomicMetricsRecorder, MetricsRecorder, MetricsSnapshot};
pub use models::{ClassificationResult, Sentiment};
