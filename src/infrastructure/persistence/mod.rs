//! SQLite persistence.
//!
//! - [`database`] - Pool bootstrap and embedded schema migrations
//! - [`SqliteLinkRepository`] - Link record storage

pub mod database;
pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
