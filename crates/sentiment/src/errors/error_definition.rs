//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::models::Sentiment;

/// 設定（KeywordConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// キーワードが空文字列（空白のみを含む）
  ///
  /// 空のキーワードはあらゆるテキストに部分一致してしまうため許可しない。
  #[error("{label} のキーワードが空です: index={index}")]
  BlankKeyword {
    /// キーワードリストのラベル
    label: Sentiment,
    /// リスト内の位置
    index: usize,
  },

  /// キーワードファイルの読み込みに失敗
  #[error("キーワードファイルの読み込みに失敗しました: path={path:?}, error={source}")]
  KeywordFileRead {
    /// 読み込もうとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// キーワードファイルの JSON 解析に失敗
  #[error("キーワードファイルの解析に失敗しました: path={path:?}, error={source}")]
  KeywordFileParse {
    /// 解析しようとしたパス
    path: PathBuf,
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `SentimentResult<T>` = `Result<T, SentimentError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum SentimentError {
  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// sentiment クレートの標準 Result 型エイリアス
pub type SentimentResult<T> = Result<T, SentimentError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blank_keyword_message_names_label_and_index() {
    let err = ConfigError::BlankKeyword {
      label: Sentiment::Negative,
      index: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains("negative"));
    assert!(msg.contains("index=3"));
  }

  #[test]
  fn config_error_converts_transparently() {
    let err: SentimentError = ConfigError::BlankKeyword {
      label: Sentiment::Positive,
      index: 0,
    }
    .into();
    assert!(matches!(err, SentimentError::Config(ConfigError::BlankKeyword { .. })));
    assert!(err.to_string().contains("positive"));
  }
}
