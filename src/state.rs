//! Shared state injected into every HTTP handler.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Link service backed by SQLite, as used by the server and the admin CLI.
pub type SqliteLinkService = LinkService<SqliteLinkRepository>;

/// Application state shared across handlers.
///
/// Built once at startup and cloned per request; nothing in it is mutable.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<SqliteLinkService>,
    /// Canonical host used to build absolute `https://` redirects. `None`
    /// disables host canonicalization.
    pub host_name: Option<Arc<str>>,
}

impl AppState {
    /// Wires the SQLite repository and link service over `pool`.
    pub fn new(pool: Arc<SqlitePool>, host_name: Option<String>) -> Self {
        let link_repository = Arc::new(SqliteLinkRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            host_name: host_name.map(Arc::from),
        }
    }
}
