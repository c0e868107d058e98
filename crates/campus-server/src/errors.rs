//! API error type and its HTTP status mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// A failed request. Every variant serializes as `{"error": "<description>"}`
/// with the corresponding status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request validation failed before any core call (400).
    #[error("{0}")]
    BadRequest(String),

    /// The referenced session does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// A session already exists under the requested key (409).
    #[error("{0}")]
    Conflict(String),

    /// Anything else — agent failures included (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
