//! Translation of domain failures into HTTP responses.
//!
//! Every failure body is JSON with a human-readable `message` field.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::domain::DomainError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Business or persistence failure.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The request body could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// Defined not-found outcome with a fixed message.
    #[error("{0}")]
    NotFound(&'static str),

    /// The path exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            Self::Domain(DomainError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg),
            Self::Domain(DomainError::Conflict(msg)) => (StatusCode::CONFLICT, msg),
            Self::Domain(err @ DomainError::Database(_)) => {
                // Don't expose store details to clients
                tracing::error!(error = %err, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
