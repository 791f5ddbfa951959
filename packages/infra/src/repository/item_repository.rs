//! # ItemRepository
//!
//! Item の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **単一クエリ**: 各メソッドは 1 本の SQL で完結し、明示的なトランザクションは張らない
//! - **採番は DB 任せ**: `INSERT ... RETURNING` で採番済みの行を受け取る

use async_trait::async_trait;
use itemstore_domain::item::{Item, ItemId, NewItem};
use sqlx::PgPool;

use crate::error::InfraError;

/// Item リポジトリトレイト
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// 全件を `id` 昇順で取得する
    async fn find_all(&self) -> Result<Vec<Item>, InfraError>;

    /// Item を挿入し、採番済みの Item を返す
    async fn insert(&self, new_item: &NewItem) -> Result<Item, InfraError>;
}

/// `items` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id:   i32,
    name: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item::from_db(ItemId::from_i32(row.id), row.name)
    }
}

/// PostgreSQL 実装の ItemRepository
#[derive(Debug, Clone)]
pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Item>, InfraError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, new_item: &NewItem) -> Result<Item, InfraError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(new_item.name())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}
