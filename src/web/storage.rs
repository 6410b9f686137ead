use std::{io::ErrorKind, path::Path};

use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::web::{ApiError, bad_request, internal_error, json_error};

/// Accepts a client-supplied folder or file name only when it is a single
/// plain path segment.
pub fn validate_segment<'a>(value: Option<&'a str>, what: &str) -> Result<&'a str, ApiError> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(bad_request(format!("Missing {what} name.")));
    }

    let plain = value != "."
        && value != ".."
        && !value.contains(['/', '\\'])
        && sanitize_filename::sanitize(value) == value;
    if !plain {
        return Err(bad_request(format!("Invalid {what} name `{value}`.")));
    }

    Ok(value)
}

/// Stream a file with a standard attachment disposition.
pub async fn stream_file(
    path: &Path,
    filename: &str,
    content_type: &str,
) -> Result<Response, ApiError> {
    let bytes = tokio::fs::read(path).await.map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            return json_error(
                StatusCode::NOT_FOUND,
                "Merged file not found. Generate it first.",
            );
        }
        error!(?err, file = %path.display(), "failed to read download file");
        internal_error("Failed to read file.")
    })?;

    let mut headers = HeaderMap::new();
    let content_type = HeaderValue::from_str(content_type)
        .map_err(|_| internal_error("Invalid content type."))?;
    headers.insert(header::CONTENT_TYPE, content_type);
    let disposition = format!("attachment; filename=\"{}\"", filename);
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|_| internal_error("Invalid download header."))?;
    headers.insert(header::CONTENT_DISPOSITION, disposition);

    Ok((headers, bytes).into_response())
}
