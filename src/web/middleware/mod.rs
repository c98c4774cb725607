//! HTTP middleware.

pub mod host_redirect;
pub mod tracing;
