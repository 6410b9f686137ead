use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;
use tracing::error;

use crate::library::LibraryError;

/// Canonical JSON payload for error responses.
#[derive(Debug, Serialize, Clone)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<ApiMessage>);

/// Helper for controllers that need to return `(StatusCode, Json<ApiMessage>)`.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ApiMessage::new(message)))
}

pub fn bad_request(message: impl Into<String>) -> ApiError {
    json_error(StatusCode::BAD_REQUEST, message)
}

pub fn internal_error(message: impl Into<String>) -> ApiError {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// Maps folder bookkeeping failures onto HTTP statuses.
pub fn library_error(err: LibraryError) -> ApiError {
    if err.is_missing_directory() {
        return json_error(StatusCode::NOT_FOUND, "Folder not found.");
    }

    match &err {
        LibraryError::NotFound { name } => bad_request(format!("File `{name}` not found.")),
        LibraryError::NoInput { folder } => {
            bad_request(format!("Folder `{folder}` contains no PDF files."))
        }
        LibraryError::Merge { .. } => {
            error!(err = %err, "PDF merge failed");
            internal_error(format!("Failed to merge PDFs: {err}"))
        }
        LibraryError::DirectoryRead { .. } => {
            error!(err = %err, "failed to read folder");
            internal_error("Failed to read folder.")
        }
        LibraryError::Storage { .. } => {
            error!(err = %err, "storage operation failed");
            internal_error("Failed to update stored files.")
        }
    }
}
