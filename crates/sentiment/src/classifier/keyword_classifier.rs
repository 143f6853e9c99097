// crates/sentiment/src/classifier/keyword_classifier.rs

//! SentimentClassifier: キーワード一致による感情分類。
//!
//! 1. 入力を小文字化する
//! 2. positive キーワードのいずれかを部分文字列として含めば positive
//! 3. そうでなく negative キーワードを含めば negative
//! 4. どちらも含まなければ neutral
//!
//! positive を先に判定するため、両方を含む場合は positive になる。
//! スコアはラベルごとの範囲から `ScoreSource` の値で決まる。

use std::sync::Arc;

use tracing::debug;

use crate::classifier::score_source::{ScoreSource, ThreadRngScoreSource};
use crate::config::KeywordConfig;
use crate::errors::SentimentResult;
use crate::metrics::MetricsRecorder;
use crate::models::{ClassificationResult, Sentiment};

/// キーワード感情分類器。
///
/// キーワードリストは不変、スコアソースとメトリクスは共有ハンドルなので
/// `&self` のまま複数スレッドから呼び出せる。
#[derive(Clone)]
pub struct SentimentClassifier {
  /// 小文字化済みの positive キーワード
  positive: Vec<String>,

  /// 小文字化済みの negative キーワード
  negative: Vec<String>,

  /// スコア用の乱数ソース
  scores: Arc<dyn ScoreSource>,

  /// 分類件数の記録先
  metrics: Arc<dyn MetricsRecorder>,
}

impl SentimentClassifier {
  /// 分類器を構築する。
  ///
  /// キーワードはここで一度だけ小文字化する。
  ///
  /// # エラー
  /// - 空のキーワードを含む場合 (`ConfigError::BlankKeyword`)
  pub fn new(
    config: &KeywordConfig,
    scores: Arc<dyn ScoreSource>,
    metrics: Arc<dyn MetricsRecorder>,
  ) -> SentimentResult<Self> {
    config.validate()?;
    Ok(Self::from_parts(config, scores, metrics))
  }

  /// デフォルトのキーワードとスレッドローカル乱数で分類器を構築する。
  pub fn with_defaults(metrics: Arc<dyn MetricsRecorder>) -> Self {
    Self::from_parts(&KeywordConfig::default(), Arc::new(ThreadRngScoreSource), metrics)
  }

  fn from_parts(
    config: &KeywordConfig,
    scores: Arc<dyn ScoreSource>,
    metrics: Arc<dyn MetricsRecorder>,
  ) -> Self {
    Self {
      positive: fold_keywords(&config.positive),
      negative: fold_keywords(&config.negative),
      scores,
      metrics,
    }
  }

  /// テキストのラベルだけを判定する（メトリクス・乱数には触れない）。
  ///
  /// 同じ入力に対しては常に同じラベルを返す。
  pub fn label_for(&self, text: &str) -> Sentiment {
    let lower = text.to_lowercase();

    if contains_any(&lower, &self.positive) {
      Sentiment::Positive
    } else if contains_any(&lower, &self.negative) {
      Sentiment::Negative
    } else {
      Sentiment::Neutral
    }
  }

  /// テキストを分類する。
  ///
  /// 呼び出し側が空白でないテキストを渡すこと（ここでは検証しない）。
  /// ラベルのカウンターと総数カウンターをそれぞれ 1 つ増やす。
  pub fn classify(&self, text: &str) -> ClassificationResult {
    let sentiment = self.label_for(text);
    let score = sentiment.score_from_unit(self.scores.next_unit());

    self.metrics.record(sentiment);

    let result = ClassificationResult::new(text, sentiment, score);
    debug!(
      sentiment = %result.sentiment,
      score = result.score,
      text_len = text.len(),
      "分類完了"
    );
    result
  }

  /// メトリクスの記録先を返す
  pub fn metrics(&self) -> &Arc<dyn MetricsRecorder> {
    &self.metrics
  }
}

fn fold_keywords(keywords: &[String]) -> Vec<String> {
  keywords.iter().map(|k| k.to_lowercase()).collect()
}

/// いずれかのキーワードを部分文字列として含むか
fn contains_any(text: &str, keywords: &[String]) -> bool {
  keywords.iter().any(|k| text.contains(k.as_str()))
}
