//! SQLite implementation of the link repository.

use async_trait::async_trait;
use futures_util::stream::{BoxStream, StreamExt, TryStreamExt};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::LinkError;
use crate::utils::db_error::map_write_error;

/// Row shape of the `links` table.
#[derive(sqlx::FromRow)]
struct LinkRow {
    name: String,
    url: String,
}

impl From<LinkRow> for LinkRecord {
    fn from(row: LinkRow) -> Self {
        LinkRecord::new(row.name, row.url)
    }
}

/// SQLite repository for link records.
///
/// All statements are parameterized; the `UNIQUE` constraint on `links.name`
/// backs the uniqueness guarantee.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Streams every record ordered by name.
    ///
    /// Rows are fetched lazily as the stream is polled. The stream is finite
    /// and cannot be restarted; call again for a fresh pass.
    pub fn stream(&self) -> BoxStream<'_, Result<LinkRecord, LinkError>> {
        sqlx::query_as::<_, LinkRow>("SELECT name, url FROM links ORDER BY name")
            .fetch(self.pool.as_ref())
            .map_ok(LinkRecord::from)
            .map_err(LinkError::from)
            .boxed()
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert(&self, record: &LinkRecord) -> Result<(), LinkError> {
        sqlx::query("INSERT INTO links (name, url) VALUES (?, ?)")
            .bind(&record.name)
            .bind(&record.address)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| map_write_error(e, &record.name))?;

        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<LinkRecord>, LinkError> {
        let row = sqlx::query_as::<_, LinkRow>("SELECT name, url FROM links WHERE name = ?")
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(LinkRecord::from))
    }

    async fn update(&self, old_name: &str, record: &LinkRecord) -> Result<u64, LinkError> {
        let result = sqlx::query("UPDATE links SET name = ?, url = ? WHERE name = ?")
            .bind(&record.name)
            .bind(&record.address)
            .bind(old_name)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| map_write_error(e, &record.name))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, name: &str) -> Result<u64, LinkError> {
        let result = sqlx::query("DELETE FROM links WHERE name = ?")
            .bind(name)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn list(&self) -> Result<Vec<LinkRecord>, LinkError> {
        self.stream().try_collect().await
    }

    async fn count(&self) -> Result<i64, LinkError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
