//! # PostgreSQL データベース接続管理
//!
//! 接続プールの作成と、起動時のテーブル作成を行う。
//!
//! ## セッションのスコープ
//!
//! プールはプロセスの生存期間中に 1 つだけ作成し、axum の State で共有する。
//! リポジトリの各メソッドはクエリ実行時にプールから接続を借り、
//! 完了時（エラー時を含む）に自動で返却する。
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use itemstore_infra::db;
//!
//! async fn example() -> Result<(), sqlx::Error> {
//!     let pool = db::create_pool("postgres://appuser:apppass@db:5432/appdb").await?;
//!     db::ensure_schema(&pool).await?;
//!     Ok(())
//! }
//! ```

use std::{borrow::Cow, time::Duration};

use sqlx::{PgPool, postgres::PgPoolOptions};

/// `items` テーブルの DDL
///
/// `IF NOT EXISTS` により何度実行しても結果は変わらない。
const CREATE_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id   SERIAL PRIMARY KEY,
    name VARCHAR NOT NULL
)
"#;

/// PostgreSQL 接続プールを作成する
///
/// アプリケーション起動時に一度だけ呼び出し、作成したプールを
/// アプリケーション全体で共有する。
///
/// # 設定値
///
/// - `max_connections(10)`: 最大接続数
/// - `acquire_timeout(5秒)`: 接続取得のタイムアウト。超過時はエラー
///
/// いずれも環境変数からは変更できない。
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// テーブルが存在しなければ作成する
///
/// ローカル開発の初回起動を簡単にするための処理であり、
/// スキーママイグレーションの代わりにはならない。
/// 既存テーブルの定義は変更しない。
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_ITEMS_TABLE).execute(pool).await?;
    Ok(())
}

/// 接続 URL のスキームからドライバ指定（`+psycopg` など）を取り除く
///
/// `postgresql+psycopg://...` のような SQLAlchemy 形式の URL を
/// sqlx が解釈できる `postgresql://...` に変換する。
/// ドライバ指定がなければ入力をそのまま返す。
///
/// ```
/// use itemstore_infra::db::normalize_database_url;
///
/// assert_eq!(
///     normalize_database_url("postgresql+psycopg://u:p@db:5432/appdb"),
///     "postgresql://u:p@db:5432/appdb"
/// );
/// assert_eq!(
///     normalize_database_url("postgres://u:p@db/appdb"),
///     "postgres://u:p@db/appdb"
/// );
/// ```
pub fn normalize_database_url(url: &str) -> Cow<'_, str> {
    let Some(scheme_end) = url.find("://") else {
        return Cow::Borrowed(url);
    };
    let scheme = &url[..scheme_end];
    match scheme.find('+') {
        Some(plus) => Cow::Owned(format!("{}{}", &scheme[..plus], &url[scheme_end..])),
        None => Cow::Borrowed(url),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        "postgresql+psycopg://appuser:apppass@db:5432/appdb",
        "postgresql://appuser:apppass@db:5432/appdb"
    )]
    #[case(
        "postgresql+asyncpg://localhost/appdb",
        "postgresql://localhost/appdb"
    )]
    #[case(
        "postgres://appuser:apppass@db:5432/appdb",
        "postgres://appuser:apppass@db:5432/appdb"
    )]
    // パスワード中の '+' はスキーム外なので変更しない
    #[case("postgres://u:a+b@db/appdb", "postgres://u:a+b@db/appdb")]
    #[case("not a url", "not a url")]
    fn test_normalize_database_urlがドライバ指定を取り除く(
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(normalize_database_url(input), expected);
    }

    #[test]
    fn test_ドライバ指定がない場合は借用のまま返す() {
        let url = "postgres://localhost/appdb";

        assert!(matches!(normalize_database_url(url), Cow::Borrowed(_)));
    }
}
