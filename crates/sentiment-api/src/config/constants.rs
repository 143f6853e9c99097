//! API設定の定数定義

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost の標準ポート。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// バインドアドレスを指定する環境変数
pub const ENV_BIND_ADDR: &str = "SENTIMENT_API_BIND_ADDR";

/// キーワード JSON ファイルのパスを指定する環境変数
///
/// 未設定の場合は組み込みのキーワードリストを使用する。
pub const ENV_KEYWORDS_FILE: &str = "SENTIMENT_KEYWORDS_FILE";

/// スコア生成の乱数シードを指定する環境変数（u64）
pub const ENV_SCORE_SEED: &str = "SENTIMENT_SCORE_SEED";

/// ヘルスチェックで返すサービス名
pub const SERVICE_NAME: &str = "Sentiment Analysis API";

/// ヘルスチェックで返すバージョン
pub const SERVICE_VERSION: &str = "1.0.0";
