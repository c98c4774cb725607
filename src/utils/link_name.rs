//! Link name validation.
//!
//! Names are used verbatim as URL path segments (`/go/<name>`) and rendered
//! into HTML attributes, so a small set of characters is refused outright.

use crate::error::LinkError;

/// Characters that may never appear in a link name.
pub const BLOCK_CHARS: &str = "/<>";

/// Returns `true` if `name` is a valid link name.
///
/// # Rules
///
/// - Must not be empty
/// - Must not contain any Unicode whitespace
/// - Must not contain any of [`BLOCK_CHARS`]
///
/// # Examples
///
/// ```
/// use golink::utils::link_name::is_valid_link_name;
///
/// assert!(is_valid_link_name("docs"));
/// assert!(!is_valid_link_name("foo bar"));
/// assert!(!is_valid_link_name("<script>"));
/// assert!(!is_valid_link_name(""));
/// ```
pub fn is_valid_link_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || BLOCK_CHARS.contains(c))
}

/// Validates a link name.
///
/// # Errors
///
/// Returns [`LinkError::InvalidName`] if any rule of [`is_valid_link_name`] is violated.
pub fn validate_link_name(name: &str) -> Result<(), LinkError> {
    if is_valid_link_name(name) {
        Ok(())
    } else {
        Err(LinkError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_simple_name() {
        assert!(is_valid_link_name("foo"));
    }

    #[test]
    fn test_valid_punctuation_and_unicode() {
        assert!(is_valid_link_name("team-wiki_2024"));
        assert!(is_valid_link_name("caf\u{e9}"));
        assert!(is_valid_link_name("q?x=1"));
    }

    #[test]
    fn test_empty_name_is_invalid() {
        assert!(!is_valid_link_name(""));
    }

    #[test]
    fn test_html_is_invalid() {
        assert!(!is_valid_link_name("<alert>console.log('here')</alert>"));
    }

    #[test]
    fn test_each_block_char_is_invalid() {
        for c in BLOCK_CHARS.chars() {
            let name = format!("foo{c}bar");
            assert!(!is_valid_link_name(&name), "{name:?} should be invalid");
        }
    }

    #[test]
    fn test_whitespace_is_invalid() {
        for name in ["foo foo", "foo\nbar", "\tfoo", "foo\u{a0}", "foo\u{3000}bar"] {
            assert!(!is_valid_link_name(name), "{name:?} should be invalid");
        }
    }

    #[test]
    fn test_validate_link_name_error() {
        let err = validate_link_name("a/b").unwrap_err();
        assert!(matches!(err, LinkError::InvalidName(ref n) if n == "a/b"));
        assert!(validate_link_name("ab").is_ok());
    }
}
