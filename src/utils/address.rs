//! Destination address checks.
//!
//! An address is any URL reference: an absolute URL (`https://google.com`)
//! or a relative one (`google.com`, `/wiki/page`). Relative references are
//! resolved by the browser against the redirect URL.

use std::sync::LazyLock;

use url::{ParseError, Url};

use crate::error::LinkError;

/// Base used only to check that a relative reference resolves.
static RELATIVE_BASE: LazyLock<Option<Url>> =
    LazyLock::new(|| Url::parse("http://base.invalid/").ok());

/// Checks that `address` parses as a URL reference.
///
/// The caller stores the original string, not a parsed form, so a record
/// reads back exactly as it was written.
///
/// # Rules
///
/// - No ASCII control characters
/// - Every `%` outside the query starts a two-digit hex escape
/// - Absolute URLs must parse; an empty host (`http://`) is allowed
/// - A relative reference must not have a `:` in its first path segment
///   (`:foo`, `1http://x`), since that would read as a malformed scheme
///
/// # Errors
///
/// Returns [`LinkError::UnparseableAddress`] if `address` is not a URL reference.
pub fn parse_address(address: &str) -> Result<(), LinkError> {
    let unparseable = || LinkError::UnparseableAddress(address.to_string());

    if address.chars().any(|c| c.is_ascii_control()) || !has_valid_escapes(address) {
        return Err(unparseable());
    }

    match Url::parse(address) {
        Ok(_) | Err(ParseError::EmptyHost) => Ok(()),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let first_segment = address
                .split(['/', '?', '#'])
                .next()
                .unwrap_or_default();
            if first_segment.contains(':') {
                return Err(unparseable());
            }

            let base = RELATIVE_BASE.as_ref().ok_or_else(unparseable)?;
            base.join(address).map(|_| ()).map_err(|_| unparseable())
        }
        Err(_) => Err(unparseable()),
    }
}

/// Returns `false` if a `%` outside the query is not followed by two hex digits.
fn has_valid_escapes(address: &str) -> bool {
    let (before_fragment, fragment) = match address.split_once('#') {
        Some((head, fragment)) => (head, fragment),
        None => (address, ""),
    };
    let before_query = before_fragment
        .split_once('?')
        .map_or(before_fragment, |(head, _)| head);

    escapes_ok(before_query) && escapes_ok(fragment)
}

fn escapes_ok(part: &str) -> bool {
    let bytes = part.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
