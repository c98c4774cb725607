//! Static assets compiled into the binary.

use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};

const SITE_CSS: &str = include_str!("../../../static/site.css");

/// Serves the site stylesheet.
///
/// # Endpoint
///
/// `GET /static/site.css`
pub async fn stylesheet_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}

/// There is no favicon; answer 404 so the request never hits the name lookup.
pub async fn favicon_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}
