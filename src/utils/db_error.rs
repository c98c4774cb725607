//! SQLx error classification.

use crate::error::LinkError;

/// Returns `true` if `e` is a violation of a `UNIQUE` constraint.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}

/// Maps a failed write of `name` to the link error taxonomy.
///
/// The store's unique constraint is the authority on name uniqueness, so a
/// violation becomes [`LinkError::AlreadyExists`]; everything else is a
/// storage failure.
pub fn map_write_error(e: sqlx::Error, name: &str) -> LinkError {
    if is_unique_violation(&e) {
        LinkError::AlreadyExists(name.to_string())
    } else {
        LinkError::Storage(e)
    }
}
