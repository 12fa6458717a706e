//! Handler-level error taxonomy and its HTTP mapping.
//!
//! Every failure a handler can produce maps locally onto a status and a
//! `{"message": …}` body; nothing propagates far enough to crash the process.
//! Absent and foreign resources share one 404 so existence never leaks.

use api::error::StoreError;
use api::MessageResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required field was missing or empty. 400.
    #[error("{0}")]
    Validation(String),

    /// Login-path failure: unknown email or wrong password. 400.
    #[error("{0}")]
    Auth(String),

    /// Missing, malformed, or expired bearer token. 401.
    #[error("{0}")]
    Unauthorized(String),

    /// The note doesn't exist — or isn't the caller's, which looks the same
    /// from outside. 404.
    #[error("Note not found")]
    NotFound,

    /// Store or serialization trouble. 500 with a generic message; the
    /// detail goes to the log, never the wire.
    #[error("Something went wrong")]
    Internal(String),
}

impl ApiError {
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("{field} is required"))
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Auth(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(%detail, "internal error");
        }
        let message = match &self {
            ApiError::Internal(_) => "Something went wrong".to_string(),
            other => other.to_string(),
        };
        (self.status(), Json(MessageResponse { message })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail | StoreError::BadCredentials => {
                ApiError::Auth(err.to_string())
            }
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Database(e) => ApiError::Internal(e.to_string()),
            StoreError::PasswordHash(e) => ApiError::Internal(e),
        }
    }
}
