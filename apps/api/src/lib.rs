//! # ItemStore API サーバー
//!
//! Item リソースの CRUD とヘルスチェックを提供する HTTP API。
//!
//! ## 処理の流れ
//!
//! ```text
//! HTTP リクエスト → Router → State（リポジトリ / プローブ）→ SQL 1 本 → JSON レスポンス
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーター構築（CORS・トレーシングレイヤー含む）
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//!
//! ## 依存関係
//!
//! - `itemstore_domain`: Item エンティティ
//! - `itemstore_infra`: データベース接続・リポジトリ
//! - `itemstore_shared`: エラーレスポンス・トレーシング初期化

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;

#[cfg(test)]
pub(crate) mod test_utils;
