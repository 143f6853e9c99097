//! HTTPハンドラー定義

use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
};
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::models::{HealthResponse, MetricsSummaryResponse, SentimentRequest, SentimentResponse};

use super::state::AppState;

/// GET /api/sentiment?text=... エンドポイント
///
/// クエリパラメーターのテキストを感情分類する。
/// `text` が複数ある場合は `,` で連結した文字列を分類する。
///
/// # Response
/// - 200 OK: 分類成功
/// - 400 Bad Request: text が未指定・空白のみ、またはクエリが不正（ボディなし）
pub async fn get_sentiment(
  State(state): State<AppState>,
  query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<SentimentResponse>, ApiError> {
  let Query(pairs) = query.map_err(|e| ApiError::invalid_input(e.body_text()))?;
  let request = SentimentRequest::from_query_pairs(pairs);

  debug!(
    text_len = request.text.as_ref().map(String::len),
    "感情分類リクエストを受信（GET）"
  );
  classify(&state, request)
}

/// POST /api/sentiment エンドポイント
///
/// # Request Body
/// ```json
/// { "text": "分類対象のテキスト" }
/// ```
///
/// # Response
/// - 200 OK: 分類成功
/// - 400 Bad Request: text が未指定または空白のみ（ボディなし）
pub async fn post_sentiment(
  State(state): State<AppState>,
  Json(request): Json<SentimentRequest>,
) -> Result<Json<SentimentResponse>, ApiError> {
  debug!(
    text_len = request.text.as_ref().map(String::len),
    "感情分類リクエストを受信（POST）"
  );
  classify(&state, request)
}

/// GET / POST 共通の分類処理
fn classify(
  state: &AppState,
  request: SentimentRequest,
) -> Result<Json<SentimentResponse>, ApiError> {
  let response = state.service.analyze(request).inspect_err(|e| {
    debug!(error = %e, "入力エラー");
  })?;

  info!(
    sentiment = %response.sentiment,
    score = response.score,
    "感情分類完了"
  );

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> Json<HealthResponse> {
  Json(HealthResponse::up())
}

/// GET /api/metrics-summary エンドポイント
///
/// 分類件数のカウンターを返す。
pub async fn metrics_summary(State(state): State<AppState>) -> Json<MetricsSummaryResponse> {
  Json(state.service.metrics_summary())
}
