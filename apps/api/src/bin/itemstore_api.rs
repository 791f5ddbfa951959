//! # ItemStore API サーバー
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `DATABASE_URL` | No | PostgreSQL 接続 URL（デフォルト: `postgres://appuser:apppass@db:5432/appdb`） |
//! | `CORS_ORIGINS` | No | 許可オリジンのカンマ区切りリスト |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p itemstore-api
//!
//! # 本番環境
//! API_PORT=8000 DATABASE_URL=postgres://... cargo run -p itemstore-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use itemstore_api::{
   app_builder::build_router,
   config::AppConfig,
   handler::{HealthState, ItemState},
};
use itemstore_infra::{PgDatabaseProbe, db, repository::PostgresItemRepository};
use itemstore_shared::observability::{TracingConfig, init_tracing};
use tokio::{net::TcpListener, signal};

const SERVICE_NAME: &str = "itemstore-api";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   init_tracing(&TracingConfig::from_env(SERVICE_NAME));

   let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      "ItemStore API サーバーを起動します: {}:{}",
      config.server.host,
      config.server.port
   );

   let pool = db::create_pool(&config.database.url)
      .await
      .context("データベース接続に失敗しました")?;
   tracing::info!("データベースに接続しました");

   // ローカル開発用。スキーマ変更はマイグレーションで行う
   db::ensure_schema(&pool)
      .await
      .context("テーブルの作成に失敗しました")?;
   tracing::info!("テーブルを確認しました");

   let item_state = Arc::new(ItemState {
      repository: Arc::new(PostgresItemRepository::new(pool)),
   });
   let health_state = Arc::new(HealthState {
      probe: Arc::new(PgDatabaseProbe::new(config.database.url.clone())),
   });

   if config.cors_origins.is_empty() {
      tracing::info!("CORS は無効です");
   } else {
      tracing::info!(origins = ?config.cors_origins, "CORS を有効化しました");
   }
   let app = build_router(item_state, health_state, &config.cors_origins);

   let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
      .parse()
      .context("アドレスのパースに失敗しました")?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("ItemStore API サーバーが起動しました: {}", addr);

   axum::serve(listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await?;

   tracing::info!("ItemStore API サーバーを停止しました");
   Ok(())
}

/// Ctrl+C または SIGTERM を待つ
async fn shutdown_signal() {
   let ctrl_c = async {
      if let Err(e) = signal::ctrl_c().await {
         tracing::error!(error = %e, "Ctrl+C ハンドラの登録に失敗しました");
         std::future::pending::<()>().await;
      }
   };

   #[cfg(unix)]
   let terminate = async {
      match signal::unix::signal(signal::unix::SignalKind::terminate()) {
         Ok(mut sigterm) => {
            sigterm.recv().await;
         }
         Err(e) => {
            tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
         }
      }
   };

   #[cfg(not(unix))]
   let terminate = std::future::pending::<()>();

   tokio::select! {
      () = ctrl_c => {},
      () = terminate => {},
   }

   tracing::info!("シャットダウンシグナルを受信しました");
}
