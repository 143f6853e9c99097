//! sentiment-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sentiment_api::ApiError;
use sentiment_api::api::AppState;
use sentiment_api::api::run_server;
use sentiment_api::config::Config;
use sentiment_api::service::SentimentApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::registry()
    .with(env_filter)
    .with(tracing_subscriber::fmt::layer())
    .init();

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(
    bind_addr = %config.bind_addr,
    keywords_file = ?config.keywords_file,
    score_seed = ?config.score_seed,
    "設定を読み込みました"
  );

  // サービスの初期化
  let service = Arc::new(SentimentApiServiceFull::new(&config)?);
  tracing::info!("感情分類サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
