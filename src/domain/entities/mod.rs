//! Core domain entities.
//!
//! - [`LinkRecord`] - A name-to-URL mapping

pub mod link;

pub use link::LinkRecord;
