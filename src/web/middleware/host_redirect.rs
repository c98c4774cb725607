//! Canonical host redirects.
//!
//! Users type `go/<name>` in the address bar, which reaches the service with
//! `Host: go` over plain HTTP. Those requests, and any request a TLS-terminating
//! proxy marks with `X-Forwarded-Proto: http`, are sent to
//! `https://<host_name>` with `301 Moved Permanently`.
//!
//! Disabled when no host name is configured.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Host sent by browsers for `http://go/...`.
const SHORT_HOST: &str = "go";

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Redirects requests to the canonical `https://<host_name>` origin.
///
/// # Rules
///
/// 1. `Host: go`, path `/` → `https://<host_name>/`
/// 2. `Host: go`, any other path → `https://<host_name>/go<path>`
/// 3. `X-Forwarded-Proto: http` → `https://<host_name><path>`
///
/// The query string is preserved in every case.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/", get(index_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), host_redirect::layer));
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let Some(host_name) = state.host_name.as_deref() else {
        return next.run(req).await;
    };

    let Some(location) = canonical_location(host_name, req.headers(), req.uri()) else {
        return next.run(req).await;
    };

    match HeaderValue::from_str(&location) {
        Ok(value) => (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, value)]).into_response(),
        Err(_) => {
            tracing::warn!(location, "Canonical redirect target is not a valid header value");
            next.run(req).await
        }
    }
}

/// Computes the canonical redirect target, or `None` if the request is
/// already canonical.
pub fn canonical_location(host_name: &str, headers: &HeaderMap, uri: &Uri) -> Option<String> {
    let request_uri = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
    if host == Some(SHORT_HOST) {
        if uri.path() == "/" {
            return Some(format!("https://{host_name}{request_uri}"));
        }
        return Some(format!("https://{host_name}/go{request_uri}"));
    }

    let proto = headers.get(X_FORWARDED_PROTO).and_then(|v| v.to_str().ok());
    if proto == Some("http") {
        return Some(format!("https://{host_name}{request_uri}"));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for &(k, v) in pairs {
            map.insert(k, HeaderValue::from_static(v));
        }
        map
    }

    #[test]
    fn test_short_host_root() {
        let uri: Uri = "/".parse().unwrap();
        let location = canonical_location("golink.example.com", &headers(&[("host", "go")]), &uri);
        assert_eq!(location.as_deref(), Some("https://golink.example.com/"));
    }

    #[test]
    fn test_short_host_name_goes_through_go_endpoint() {
        let uri: Uri = "/docs?lang=en".parse().unwrap();
        let location = canonical_location("golink.example.com", &headers(&[("host", "go")]), &uri);
        assert_eq!(
            location.as_deref(),
            Some("https://golink.example.com/go/docs?lang=en")
        );
    }

    #[test]
    fn test_forwarded_plain_http() {
        let uri: Uri = "/golink/foo".parse().unwrap();
        let location = canonical_location(
            "golink.example.com",
            &headers(&[("host", "golink.example.com"), ("x-forwarded-proto", "http")]),
            &uri,
        );
        assert_eq!(
            location.as_deref(),
            Some("https://golink.example.com/golink/foo")
        );
    }

    #[test]
    fn test_canonical_request_passes() {
        let uri: Uri = "/go/foo".parse().unwrap();
        let canonical = headers(&[("host", "golink.example.com"), ("x-forwarded-proto", "https")]);
        assert!(canonical_location("golink.example.com", &canonical, &uri).is_none());
        assert!(canonical_location("golink.example.com", &HeaderMap::new(), &uri).is_none());
    }
}
