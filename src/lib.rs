//! # golink
//!
//! A go-link redirector: short names map to destination URLs, `GET /go/<name>`
//! redirects, and a small HTML UI creates, edits and deletes the mappings.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The link record entity and repository trait
//! - **Application Layer** ([`application`]) - The link manager enforcing all rules
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite storage
//! - **Web Layer** ([`web`]) - HTML pages, form endpoints and redirects
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_PATH=/var/lib/golink/golink.db
//! export HOST_NAME=golink.example.com   # Optional
//!
//! cargo run -- --port 10123
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables and flags via [`config::Config`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::{AppError, LinkError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the admin CLI and
/// integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::LinkRecord;
    pub use crate::error::{AppError, LinkError};
    pub use crate::infrastructure::persistence::SqliteLinkRepository;
    pub use crate::state::{AppState, SqliteLinkService};
}
