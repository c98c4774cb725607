//! SQLite connection pool bootstrap.
//!
//! The schema lives in `migrations/` and is embedded at compile time. It is
//! applied on every open; already-applied migrations are skipped, so opening
//! an existing database is idempotent.

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens (creating if needed) the database file at `path` and applies the schema.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the database
/// cannot be opened, or a migration fails.
pub async fn open(path: &Path, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;
    tracing::info!(path = %path.display(), "Opened database");

    Ok(pool)
}

/// Opens a private in-memory database with the schema applied.
///
/// The pool holds exactly one connection that is never recycled, since every
/// SQLite in-memory connection is its own database.
pub async fn in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;

    Ok(pool)
}

/// Applies pending schema migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| sqlx::Error::Migrate(Box::new(e)))
}

/// Checks that the database answers a trivial query.
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_creates_file_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("golink.db");

        let pool = open(&path, 2).await.unwrap();

        assert!(path.exists());
        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'links'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(tables, 1);
    }

    #[tokio::test]
    async fn test_open_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("golink.db");

        let pool = open(&path, 1).await.unwrap();
        sqlx::query("INSERT INTO links (name, url) VALUES ('foo', 'https://example.com')")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        let pool = open(&path, 1).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_name_is_unique() {
        let pool = in_memory().await.unwrap();

        sqlx::query("INSERT INTO links (name, url) VALUES ('foo', 'https://a.example.com')")
            .execute(&pool)
            .await
            .unwrap();
        let err = sqlx::query("INSERT INTO links (name, url) VALUES ('foo', 'https://b.example.com')")
            .execute(&pool)
            .await
            .unwrap_err();

        assert!(crate::utils::db_error::is_unique_violation(&err));
    }

    #[tokio::test]
    async fn test_ping() {
        let pool = in_memory().await.unwrap();
        assert!(ping(&pool).await.is_ok());
    }
}
