//! Link record manager: validation and CRUD over a [`LinkRepository`].

use std::sync::Arc;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::LinkError;
use crate::utils::address::parse_address;
use crate::utils::link_name::validate_link_name;

/// Service enforcing the rules for link records.
///
/// Every caller (HTTP handlers, the admin CLI, tests) goes through this type,
/// so the rules are applied uniformly. The service holds no records in memory;
/// the repository is the sole owner of persisted state.
///
/// # Uniqueness
///
/// Existence checks before a write only produce nicer errors. A concurrent
/// request can still slip in between the check and the write; the store's
/// unique constraint is what actually keeps names unique, and a violation of
/// it is reported as [`LinkError::AlreadyExists`] as well.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Stores a new record for `name` pointing at `address`.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidName`] if `name` is not a valid link name
    /// - [`LinkError::UnparseableAddress`] if `address` is not a URL
    /// - [`LinkError::AlreadyExists`] if `name` is taken
    /// - [`LinkError::Storage`] on database errors
    pub async fn create(&self, name: &str, address: &str) -> Result<(), LinkError> {
        validate_link_name(name)?;
        parse_address(address)?;

        if self.link_repository.find_by_name(name).await?.is_some() {
            return Err(LinkError::AlreadyExists(name.to_string()));
        }

        self.link_repository
            .insert(&LinkRecord::new(name, address))
            .await?;

        tracing::info!(name, address, "Saved new link");
        Ok(())
    }

    /// Returns the record stored under `name`.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidName`] if `name` is not a valid link name
    /// - [`LinkError::NotFound`] if no record exists
    /// - [`LinkError::Storage`] on database errors
    pub async fn read(&self, name: &str) -> Result<LinkRecord, LinkError> {
        validate_link_name(name)?;

        self.link_repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| LinkError::NotFound(name.to_string()))
    }

    /// Renames the record stored under `old_name` to `new_name` and points it
    /// at `address`.
    ///
    /// `new_name` may equal `old_name` to only change the address.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidName`] if `new_name` is not a valid link name
    /// - [`LinkError::UnparseableAddress`] if `address` is not a URL
    /// - [`LinkError::NotFound`] if no record exists for `old_name`
    /// - [`LinkError::AlreadyExists`] if a different record already uses `new_name`
    /// - [`LinkError::Storage`] on database errors
    pub async fn update(
        &self,
        old_name: &str,
        new_name: &str,
        address: &str,
    ) -> Result<(), LinkError> {
        validate_link_name(new_name)?;
        parse_address(address)?;

        if self.link_repository.find_by_name(old_name).await?.is_none() {
            return Err(LinkError::NotFound(old_name.to_string()));
        }

        // Racy by nature; the unique constraint on the update is authoritative.
        if new_name != old_name
            && self
                .link_repository
                .find_by_name(new_name)
                .await?
                .is_some()
        {
            return Err(LinkError::AlreadyExists(new_name.to_string()));
        }

        let affected = self
            .link_repository
            .update(old_name, &LinkRecord::new(new_name, address))
            .await?;

        // Deleted between the existence check and the update.
        if affected == 0 {
            return Err(LinkError::NotFound(old_name.to_string()));
        }

        tracing::info!(old_name, new_name, address, "Updated link");
        Ok(())
    }

    /// Removes the record stored under `name`.
    ///
    /// # Errors
    ///
    /// - [`LinkError::NotFound`] if no record exists
    /// - [`LinkError::Storage`] on database errors
    pub async fn delete(&self, name: &str) -> Result<(), LinkError> {
        let affected = self.link_repository.delete(name).await?;

        if affected == 0 {
            return Err(LinkError::NotFound(name.to_string()));
        }

        tracing::info!(name, "Deleted link");
        Ok(())
    }

    /// Returns every record ordered by name.
    pub async fn list(&self) -> Result<Vec<LinkRecord>, LinkError> {
        self.link_repository.list().await
    }

    /// Counts stored records.
    pub async fn count(&self) -> Result<i64, LinkError> {
        self.link_repository.count().await
    }

    /// Looks up the record for a redirect.
    ///
    /// Names are not validated: an invalid name can never be stored, so it
    /// simply resolves to `None`.
    pub async fn lookup(&self, name: &str) -> Result<Option<LinkRecord>, LinkError> {
        self.link_repository.find_by_name(name).await
    }
}
