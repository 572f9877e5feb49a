//! Unified error handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bookshelf_engine::Error as StoreError;

use crate::response::Envelope;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Translate a store error into a response for the given action
    /// ("add", "update", "delete"), preserving the wire messages.
    pub fn from_store(action: &str, err: StoreError) -> Self {
        match err {
            StoreError::MissingName => Self::BadRequest(format!(
                "Failed to {action} book. Please provide the book name"
            )),
            StoreError::ReadPageExceedsPageCount => Self::BadRequest(format!(
                "Failed to {action} book. readPage must not exceed pageCount"
            )),
            StoreError::BookNotFound(_) => {
                Self::NotFound(format!("Failed to {action} book. Id not found"))
            }
            internal => {
                tracing::error!("store invariant violation: {internal}");
                Self::Internal(format!("Failed to {action} book"))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(Envelope::fail(message))).into_response()
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, AppError>;
