//! Web layer: HTML management pages and redirect endpoints.
//!
//! Pages are rendered server-side with Askama templates compiled into the
//! binary.
//!
//! # Modules
//!
//! - [`handlers`] - Page, form and redirect handlers
//! - [`forms`] - Form bodies
//! - [`middleware`] - Host canonicalization and request tracing
//! - [`routes`] - Route table

pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
