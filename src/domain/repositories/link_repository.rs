//! Repository trait for link record storage.

use crate::domain::entities::LinkRecord;
use crate::error::LinkError;
use async_trait::async_trait;

/// Storage handle for link records.
///
/// Uniqueness of `name` is enforced by the store itself. Implementations must
/// report a unique-constraint violation on [`insert`](Self::insert) or
/// [`update`](Self::update) as [`LinkError::AlreadyExists`], and any other
/// failure as [`LinkError::Storage`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new record.
    async fn insert(&self, record: &LinkRecord) -> Result<(), LinkError>;

    /// Looks up a record by name.
    ///
    /// Returns `Ok(None)` when no record exists; that is not an error.
    async fn find_by_name(&self, name: &str) -> Result<Option<LinkRecord>, LinkError>;

    /// Renames and re-targets the record stored under `old_name` in a single
    /// statement.
    ///
    /// Returns the number of rows affected (0 if `old_name` did not exist).
    async fn update(&self, old_name: &str, record: &LinkRecord) -> Result<u64, LinkError>;

    /// Deletes the record stored under `name`.
    ///
    /// Returns the number of rows affected.
    async fn delete(&self, name: &str) -> Result<u64, LinkError>;

    /// Returns all records ordered by name.
    async fn list(&self) -> Result<Vec<LinkRecord>, LinkError>;

    /// Counts stored records.
    async fn count(&self) -> Result<i64, LinkError>;
}
