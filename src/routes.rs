//! Top-level router.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Host redirect** - Canonical `https://<host_name>` redirects

use crate::state::AppState;
use crate::web;
use crate::web::middleware::{host_redirect, tracing};
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    web::routes::routes()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            host_redirect::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}
