//! リクエストモデル定義

use serde::Deserialize;

use crate::errors::{ApiError, Result};

/// 感情分類リクエスト
///
/// `GET /api/sentiment?text=...` のクエリと `POST /api/sentiment` の JSON ボディの両方に使う。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SentimentRequest {
  /// 分類対象のテキスト
  #[serde(default)]
  pub text: Option<String>,
}

impl SentimentRequest {
  /// テキストを指定してリクエストを作成
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text: Some(text.into()),
    }
  }

  /// クエリ文字列のペアからリクエストを作成
  ///
  /// `text` が複数指定された場合は出現順に `,` で連結する。
  /// `text` が 1 つもなければ未指定として扱う。
  pub fn from_query_pairs<I>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (String, String)>,
  {
    let values: Vec<String> =
      pairs.into_iter().filter(|(key, _)| key == "text").map(|(_, value)| value).collect();

    Self {
      text: (!values.is_empty()).then(|| values.join(",")),
    }
  }

  /// 空白でないテキストを取り出す
  ///
  /// # Errors
  /// text が未指定、または空白のみの場合は `InvalidInput`
  pub fn into_text(self) -> Result<String> {
    match self.text {
      Some(text) if !text.trim().is_empty() => Ok(text),
      Some(_) => Err(ApiError::invalid_input("text is blank")),
      None => Err(ApiError::invalid_input("text is missing")),
    }
  }
}
