//! Error types for the link manager and the HTTP front end.
//!
//! [`LinkError`] is the domain taxonomy returned by the repository and the
//! [`crate::application::services::LinkService`]. [`AppError`] is what web
//! handlers return; it renders as a plain-text response with the matching
//! status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::utils::link_name::BLOCK_CHARS;

/// Failures of link record operations.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// The name is empty, contains whitespace, or contains one of [`BLOCK_CHARS`].
    #[error("invalid link name {0:?}")]
    InvalidName(String),

    /// The address is not a parseable URL.
    #[error("invalid address {0:?}: not a parseable URL")]
    UnparseableAddress(String),

    #[error("the golink {0:?} already exists")]
    AlreadyExists(String),

    #[error("the golink {0:?} was not found")]
    NotFound(String),

    /// Any unexpected storage failure. Never retried.
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Error returned from HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LinkError> for AppError {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::InvalidName(name) => AppError::bad_request(format!(
                "Invalid link name {name:?}. Must not be \"\", contain whitespace, or contain {BLOCK_CHARS:?}."
            )),
            LinkError::UnparseableAddress(address) => {
                AppError::bad_request(format!("Invalid URL {address:?}: not parseable."))
            }
            LinkError::AlreadyExists(name) => {
                AppError::conflict(format!("The golink {name:?} already exists."))
            }
            LinkError::NotFound(name) => {
                AppError::not_found(format!("The golink {name:?} was not found."))
            }
            LinkError::Storage(e) => {
                tracing::error!(error = %e, "Storage failure");
                AppError::internal("Internal server error.")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Internal { message } => message,
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_error_status_mapping() {
        let cases = [
            (LinkError::InvalidName("a b".into()), StatusCode::BAD_REQUEST),
            (
                LinkError::UnparseableAddress("nope".into()),
                StatusCode::BAD_REQUEST,
            ),
            (LinkError::AlreadyExists("foo".into()), StatusCode::CONFLICT),
            (LinkError::NotFound("foo".into()), StatusCode::NOT_FOUND),
            (
                LinkError::Storage(sqlx::Error::PoolClosed),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_storage_error_does_not_leak_details() {
        let err = AppError::from(LinkError::Storage(sqlx::Error::PoolTimedOut));
        match err {
            AppError::Internal { message } => assert_eq!(message, "Internal server error."),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_name_message_mentions_block_chars() {
        let err = AppError::from(LinkError::InvalidName("<x>".into()));
        match err {
            AppError::Validation { message } => assert!(message.contains("/<>")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
