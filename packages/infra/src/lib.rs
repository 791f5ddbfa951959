//! # ItemStore インフラ層
//!
//! PostgreSQL との接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: 接続プールの作成、起動時のテーブル作成
//! - **疎通確認**: ヘルスチェック用の直接接続プローブ
//! - **リポジトリ実装**: Item の読み書き
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プールとスキーマ初期化
//! - [`error`] - インフラ層エラー定義
//! - [`probe`] - データベース疎通確認
//! - [`repository`] - リポジトリ実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use itemstore_infra::{db, repository::PostgresItemRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/appdb").await?;
//!     db::ensure_schema(&pool).await?;
//!
//!     let repo = PostgresItemRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod probe;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
pub use probe::{DatabaseProbe, PgDatabaseProbe};
