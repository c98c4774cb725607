//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give handlers and the admin CLI a
//! single place where link rules are enforced.
//!
//! - [`services::link_service::LinkService`] - Link record manager

pub mod services;
