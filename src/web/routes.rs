//! Route table for the web layer.

use crate::state::AppState;
use crate::web::handlers::{
    create_handler, delete_handler, docs_handler, favicon_handler, go_handler, go_root_handler,
    golink_handler, golink_usage_handler, index_handler, stylesheet_handler, update_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// All web routes.
///
/// # Endpoints
///
/// - `GET  /`                - Link list and creation form
/// - `GET  /{name}`          - Legacy redirect (same as `/go/{name}`)
/// - `POST /create_golink`   - Create a link
/// - `GET  /golink/{name}`   - Management page for a link
/// - `POST /update_golink`   - Rename and/or re-target a link
/// - `POST /delete_golink`   - Delete a link
/// - `GET  /go/{name}`       - Redirect to the link's address
/// - `GET  /docs`            - Usage documentation
/// - `GET  /static/site.css` - Stylesheet
///
/// Static segments take priority over `/{name}`, so links named like one of
/// the endpoints are only reachable through `/go/{name}`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/{name}", get(go_handler))
        .route("/create_golink", post(create_handler))
        .route("/golink", get(golink_usage_handler))
        .route("/golink/{name}", get(golink_handler))
        .route("/update_golink", post(update_handler))
        .route("/delete_golink", post(delete_handler))
        .route("/go", get(go_root_handler))
        .route("/go/{name}", get(go_handler))
        .route("/docs", get(docs_handler))
        .route("/static/site.css", get(stylesheet_handler))
        .route("/favicon.ico", get(favicon_handler))
}
