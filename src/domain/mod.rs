//! Domain layer: the link record entity and the storage contract.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the web layer. Storage
//! implementations live in [`crate::infrastructure::persistence`] and business
//! rules in [`crate::application::services`].

pub mod entities;
pub mod repositories;
