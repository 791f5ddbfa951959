//! # データベース疎通確認
//!
//! `GET /health` で使用するプローブ。
//!
//! 接続プールを経由せず、毎回新しい接続を張って `SELECT 1` を実行する。
//! プールに健全な接続が残っていても、新規接続が張れなければ失敗として扱う。

use async_trait::async_trait;
use sqlx::{Connection, PgConnection};

use crate::error::InfraError;

/// データベース疎通確認トレイト
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// 往復クエリを 1 回実行し、成功すれば `Ok(())` を返す
    async fn ping(&self) -> Result<(), InfraError>;
}

/// PostgreSQL への直接接続によるプローブ
#[derive(Debug, Clone)]
pub struct PgDatabaseProbe {
    database_url: String,
}

impl PgDatabaseProbe {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }
}

#[async_trait]
impl DatabaseProbe for PgDatabaseProbe {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn ping(&self) -> Result<(), InfraError> {
        let mut conn = PgConnection::connect(&self.database_url).await?;
        let _: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&mut conn).await?;
        conn.close().await?;
        Ok(())
    }
}
