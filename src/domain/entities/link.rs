//! Link record entity: a name mapped to the address it redirects to.

/// A persisted go link.
///
/// `address` holds the URL exactly as it was submitted; it was checked to be
/// parseable before it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub name: String,
    pub address: String,
}

impl LinkRecord {
    /// Creates a new record.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}
