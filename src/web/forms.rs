//! Form bodies posted by the management pages.
//!
//! Every field defaults to the empty string so that a missing field reaches
//! the handler and produces a readable `400` instead of an extractor rejection.

use serde::Deserialize;

/// Body of `POST /create_golink`.
#[derive(Debug, Deserialize)]
pub struct CreateLinkForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: String,
}

/// Body of `POST /update_golink`.
#[derive(Debug, Deserialize)]
pub struct UpdateLinkForm {
    /// Name of the record being edited.
    #[serde(default)]
    pub old_name: String,
    /// New name; equal to `old_name` when only the address changes.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: String,
}

/// Body of `POST /delete_golink`.
#[derive(Debug, Deserialize)]
pub struct DeleteLinkForm {
    #[serde(default)]
    pub name: String,
}
