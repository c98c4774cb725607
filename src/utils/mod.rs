//! Validation helpers shared by the link manager and its storage layer.
//!
//! - [`link_name`] - Link name validity rules
//! - [`address`] - Destination URL parseability
//! - [`db_error`] - Classification of SQLx errors

pub mod address;
pub mod db_error;
pub mod link_name;
