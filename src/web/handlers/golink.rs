//! Management page for a single link and the form endpoints behind it.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};

use super::{go_path, golink_path};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{CreateLinkForm, DeleteLinkForm, UpdateLinkForm};

/// Template for the management page (`templates/golink.html`).
#[derive(Template, WebTemplate)]
#[template(path = "golink.html")]
pub struct GolinkTemplate {
    pub name: String,
    pub address: String,
    pub go_href: String,
}

/// Template for the usage documentation (`templates/docs.html`).
#[derive(Template, WebTemplate)]
#[template(path = "docs.html")]
pub struct DocsTemplate {}

/// Renders the management page for one link.
///
/// # Endpoint
///
/// `GET /golink/{name}`
///
/// # Errors
///
/// Returns 400 for an invalid name and 404 if the link does not exist.
pub async fn golink_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<GolinkTemplate, AppError> {
    let record = state.link_service.read(&name).await?;

    Ok(GolinkTemplate {
        go_href: go_path(&record.name),
        name: record.name,
        address: record.address,
    })
}

/// `GET /golink` without a name.
pub async fn golink_usage_handler() -> AppError {
    AppError::bad_request("Requests for the /golink endpoint should look like /golink/<name>.")
}

/// Creates a link from the home page form.
///
/// # Endpoint
///
/// `POST /create_golink` with form fields `name` and `link`.
///
/// Responds `303 See Other` to the new link's management page.
pub async fn create_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateLinkForm>,
) -> Result<Redirect, AppError> {
    if form.link.is_empty() {
        return Err(AppError::bad_request("Invalid form: missing the link."));
    }

    state.link_service.create(&form.name, &form.link).await?;

    Ok(Redirect::to(&golink_path(&form.name)))
}

/// Renames and/or re-targets a link.
///
/// # Endpoint
///
/// `POST /update_golink` with form fields `old_name`, `name` and `link`.
///
/// Responds `303 See Other` to the management page under the new name.
pub async fn update_handler(
    State(state): State<AppState>,
    Form(form): Form<UpdateLinkForm>,
) -> Result<Redirect, AppError> {
    if form.old_name.is_empty() {
        return Err(AppError::bad_request(
            "Invalid form: missing the old name of the link.",
        ));
    }
    if form.name.is_empty() {
        return Err(AppError::bad_request(
            "Invalid form: missing the new name of the link.",
        ));
    }
    if form.link.is_empty() {
        return Err(AppError::bad_request("Invalid form: missing the link."));
    }

    state
        .link_service
        .update(&form.old_name, &form.name, &form.link)
        .await?;

    Ok(Redirect::to(&golink_path(&form.name)))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `POST /delete_golink` with form field `name`. Responds `303 See Other` to `/`.
pub async fn delete_handler(
    State(state): State<AppState>,
    Form(form): Form<DeleteLinkForm>,
) -> Result<Redirect, AppError> {
    state.link_service.delete(&form.name).await?;

    Ok(Redirect::to("/"))
}

/// Renders the usage documentation.
///
/// # Endpoint
///
/// `GET /docs`
pub async fn docs_handler() -> DocsTemplate {
    DocsTemplate {}
}
