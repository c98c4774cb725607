//! HTTP handlers for the management pages and redirects.

mod assets;
mod golink;
mod index;
mod redirect;

pub use assets::{favicon_handler, stylesheet_handler};
pub use golink::{
    create_handler, delete_handler, docs_handler, golink_handler, golink_usage_handler,
    update_handler,
};
pub use index::index_handler;
pub use redirect::{go_handler, go_root_handler};

/// Path of the management page for `name`, safe to use as a `Location` header.
pub fn golink_path(name: &str) -> String {
    format!("/golink/{}", urlencoding::encode(name))
}

/// Path that redirects to the address stored under `name`.
pub fn go_path(name: &str) -> String {
    format!("/go/{}", urlencoding::encode(name))
}
