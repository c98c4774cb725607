//! Home page: every link plus the creation form.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use super::golink_path;
use crate::domain::entities::LinkRecord;
use crate::error::AppError;
use crate::state::AppState;

/// One row of the link list.
pub struct LinkRow {
    pub name: String,
    pub address: String,
    pub href: String,
}

impl From<LinkRecord> for LinkRow {
    fn from(record: LinkRecord) -> Self {
        Self {
            href: golink_path(&record.name),
            name: record.name,
            address: record.address,
        }
    }
}

/// Template for the home page (`templates/index.html`).
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub links: Vec<LinkRow>,
}

/// Lists all links.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> Result<IndexTemplate, AppError> {
    let links = state.link_service.list().await?;

    Ok(IndexTemplate {
        links: links.into_iter().map(LinkRow::from).collect(),
    })
}
