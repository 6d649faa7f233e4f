//! HTTP error responses for tally-api.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use tally_core::Error as CoreError;

/// Handler-level error, mapped to a status code and a `{"error": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed required field.
    Validation(String),
    /// Unparseable UUID, timestamp, or base64.
    Format(String),
    /// Referenced record does not exist.
    NotFound(String),
    /// Unexpected store failure.
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) | ApiError::Format(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(msg) => ApiError::NotFound(format!("Not found: {msg}")),
            CoreError::Validation(msg) => ApiError::Validation(msg),
            CoreError::Format(msg) => ApiError::Format(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
