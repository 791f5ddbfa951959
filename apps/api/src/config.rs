//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `8000` | ポート番号 |
//! | `DATABASE_URL` | No | `postgres://appuser:apppass@db:5432/appdb` | PostgreSQL 接続 URL |
//! | `CORS_ORIGINS` | No | （空） | 許可するオリジンのカンマ区切りリスト |
//!
//! `CORS_ORIGINS` が空の場合、CORS レイヤーは付与しない。
//! ログ関連（`LOG_FORMAT`, `RUST_LOG`）は `itemstore_shared::observability` が読む。

use std::env;

use itemstore_infra::db::normalize_database_url;
use thiserror::Error;

/// `DATABASE_URL` 未設定時の接続先（コンテナ環境でホスト名 `db` の PostgreSQL）
pub const DEFAULT_DATABASE_URL: &str = "postgres://appuser:apppass@db:5432/appdb";

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
   /// ポート番号として解釈できない
   #[error("API_PORT は有効なポート番号である必要があります: {0:?}")]
   InvalidPort(String),
}

/// HTTP サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
   /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
   pub host: String,
   /// ポート番号
   pub port: u16,
}

/// データベース接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
   /// 接続 URL（ドライバ指定は正規化済み）
   pub url: String,
}

/// アプリケーション全体の設定
///
/// 起動時に一度だけ構築する。`Debug` 出力には接続 URL（パスワード）が含まれる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
   pub server:       ServerConfig,
   pub database:     DatabaseConfig,
   /// CORS で許可するオリジン（空なら CORS 無効）
   pub cors_origins: Vec<String>,
}

impl AppConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|key| env::var(key).ok())
   }

   /// 任意の取得関数から設定を読み込む
   ///
   /// `lookup` が `None` を返したキーはデフォルト値を使用する。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let port: u16 = match lookup("API_PORT") {
         Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
         None => 8000,
      };
      let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

      Ok(Self {
         server:       ServerConfig {
            host: lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
         },
         database:     DatabaseConfig {
            url: normalize_database_url(&database_url).into_owned(),
         },
         cors_origins: parse_cors_origins(&lookup("CORS_ORIGINS").unwrap_or_default()),
      })
   }
}

/// カンマ区切りのオリジン一覧をパースする
///
/// 各要素の前後の空白を除去し、空要素は捨てる。
pub fn parse_cors_origins(raw: &str) -> Vec<String> {
   raw.split(',')
      .map(str::trim)
      .filter(|origin| !origin.is_empty())
      .map(str::to_string)
      .collect()
}
