//! Handlers that resolve a name and redirect to its address.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a name to its stored address.
///
/// # Endpoint
///
/// `GET /go/{name}`, and the legacy `GET /{name}`
///
/// # Errors
///
/// Returns 404 Not Found if no link exists for `name`.
pub async fn go_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state
        .link_service
        .lookup(&name)
        .await?
        .ok_or_else(|| AppError::not_found(format!("The golink {name:?} was not found.")))?;

    let location = location_header(&record.address)?;
    debug!(name = %name, address = %record.address, "Redirecting");

    Ok((
        StatusCode::TEMPORARY_REDIRECT,
        [(header::LOCATION, location)],
    )
        .into_response())
}

/// `GET /go` without a name.
pub async fn go_root_handler() -> AppError {
    AppError::not_found("Requests for the /go endpoint should look like /go/<name>.")
}

/// Builds a `Location` value for a stored address.
///
/// ASCII addresses are sent exactly as stored; relative ones are resolved by
/// the client. Absolute non-ASCII addresses are sent in their serialized URL
/// form, and relative ones with non-ASCII characters percent-encoded.
fn location_header(address: &str) -> Result<HeaderValue, AppError> {
    if address.is_ascii()
        && let Ok(value) = HeaderValue::from_str(address)
    {
        return Ok(value);
    }

    let serialized = match Url::parse(address) {
        Ok(url) => url.to_string(),
        Err(_) => encode_non_ascii(address),
    };

    HeaderValue::from_str(&serialized).map_err(|_| {
        tracing::error!(address, "Stored address cannot be used as a redirect target");
        AppError::internal("Stored address cannot be used as a redirect target.")
    })
}

fn encode_non_ascii(address: &str) -> String {
    let mut encoded = String::with_capacity(address.len());
    let mut buf = [0u8; 4];
    for c in address.chars() {
        if c.is_ascii() {
            encoded.push(c);
        } else {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_kept_verbatim() {
        let value = location_header("https://google.com").unwrap();
        assert_eq!(value, "https://google.com");
    }

    #[test]
    fn test_location_header_relative_kept_verbatim() {
        assert_eq!(location_header("/wiki/page").unwrap(), "/wiki/page");
        assert_eq!(location_header("google.com").unwrap(), "google.com");
    }

    #[test]
    fn test_location_header_relative_non_ascii_is_encoded() {
        let value = location_header("/caf\u{e9}?q=\u{fc}").unwrap();
        assert_eq!(value, "/caf%C3%A9?q=%C3%BC");
    }

    #[test]
    fn test_location_header_non_ascii_is_serialized() {
        let value = location_header("https://example.com/caf\u{e9}").unwrap();
        assert_eq!(value, "https://example.com/caf%C3%A9");
    }
}
