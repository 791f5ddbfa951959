//! # リポジトリ実装
//!
//! ## 設計方針
//!
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でスタブに差し替え可能な設計

pub mod item_repository;

pub use item_repository::{ItemRepository, PostgresItemRepository};
