//! Application error type and its HTTP representation.
//!
//! Every fallible operation in the crate returns [`AppError`]. Handlers return it
//! directly and axum renders it through [`IntoResponse`] as:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short link not found", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload nested under `"error"` in every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors surfaced by the shortening core and the HTTP layer.
///
/// Short code collisions are not represented here: the store reports them as
/// `Ok(false)` and the service retries internally.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request input rejected before reaching storage (400).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// No mapping exists for the requested short code (404).
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Every candidate drawn within the retry cap collided (503).
    #[error("{message}")]
    ExhaustedRetries { message: String, details: Value },

    /// The backing store could not complete the operation (503).
    #[error("{message}")]
    StorageUnavailable { message: String, details: Value },

    /// Anything else (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn exhausted_retries(message: impl Into<String>, details: Value) -> Self {
        Self::ExhaustedRetries {
            message: message.into(),
            details,
        }
    }

    pub fn storage_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status and stable error code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::ExhaustedRetries { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "exhausted_retries")
            }
            AppError::StorageUnavailable { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "storage_unavailable")
            }
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    /// Converts the error into the serializable payload used in response bodies.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::ExhaustedRetries { message, details }
            | AppError::StorageUnavailable { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

/// Any database failure means the store could not answer; it is never a "not found".
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database operation failed");
        AppError::storage_unavailable("Storage backend unavailable", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request("Request validation failed", json!(e))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::bad_request("x", json!({})), 400, "validation_error"),
            (AppError::not_found("x", json!({})), 404, "not_found"),
            (
                AppError::exhausted_retries("x", json!({})),
                503,
                "exhausted_retries",
            ),
            (
                AppError::storage_unavailable("x", json!({})),
                503,
                "storage_unavailable",
            ),
            (AppError::internal("x", json!({})), 500, "internal_error"),
        ];

        for (err, status, code) in cases {
            let (actual_status, actual_code) = err.status_and_code();
            assert_eq!(actual_status.as_u16(), status);
            assert_eq!(actual_code, code);
        }
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Short link not found", json!({ "code": "abc123" }));
        assert_eq!(err.to_string(), "Short link not found");
    }

    #[test]
    fn test_error_info_carries_details() {
        let err = AppError::bad_request("bad", json!({ "field": "url" }));
        let info = err.to_error_info();

        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, "bad");
        assert_eq!(info.details["field"], "url");
    }

    #[test]
    fn test_sqlx_error_is_storage_unavailable() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::StorageUnavailable { .. }));
    }

    #[test]
    fn test_sqlx_row_not_found_is_not_conflated_with_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(!matches!(err, AppError::NotFound { .. }));
    }
}
