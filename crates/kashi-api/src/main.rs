//! kashi-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use kashi_api::ApiError;
use kashi_api::api::AppState;
use kashi_api::api::run_server;
use kashi_api::config::Config;
use kashi_api::service::KashiApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み（ログレベルが設定ファイル側にあるため、ロギングより先に行う）
  let config = Config::from_env()?;
  let kashi_config = config.to_kashi_config()?;

  // ロギングの初期化: KASHI_LOG が優先、なければ設定ファイルのレベル
  let filter = EnvFilter::try_from_env("KASHI_LOG")
    .unwrap_or_else(|_| EnvFilter::new(kashi_config.log_level().as_str()));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(
    preset = ?kashi_config.dictionary_preset(),
    pipeline = %kashi_config.pipeline(),
    "設定を読み込みました"
  );

  // サービスの初期化
  let service = Arc::new(KashiApiServiceFull::new(&kashi_config)?);
  tracing::info!(pipeline = %service.default_pipeline(), "変換サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
