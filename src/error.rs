//! Application error type and its HTTP representation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to HTTP clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors surfaced by the short link store and its adapters.
///
/// Collisions between generated codes are resolved inside
/// [`crate::application::services::ShortLinkStore::create`] and never appear here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input rejected before any storage interaction.
    #[error("{message}")]
    Validation { message: String },

    /// No stored record has the requested short code.
    #[error("short link '{short}' not found")]
    NotFound { short: String },

    /// Every generated candidate collided with an existing code.
    #[error("failed to generate a unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// The persistence backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(short: impl Into<String>) -> Self {
        Self::NotFound {
            short: short.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::GenerationExhausted { .. } | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Builds the client-facing payload.
    ///
    /// Storage failures are reported generically; the underlying driver
    /// message is only logged.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: json!({}),
            },
            AppError::NotFound { short } => ErrorInfo {
                code: "not_found",
                message: "URL not found".to_string(),
                details: json!({ "short": short }),
            },
            AppError::GenerationExhausted { attempts } => ErrorInfo {
                code: "internal_error",
                message: "Failed to generate unique code".to_string(),
                details: json!({ "attempts": attempts }),
            },
            AppError::Storage(_) => ErrorInfo {
                code: "internal_error",
                message: "Database error".to_string(),
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::validation("empty").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("abc123").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::GenerationExhausted { attempts: 10 }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Storage(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_error_hides_driver_message() {
        let info = AppError::Storage(sqlx::Error::PoolClosed).to_error_info();

        assert_eq!(info.code, "internal_error");
        assert_eq!(info.message, "Database error");
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_not_found_details_carry_code() {
        let info = AppError::not_found("xyz789").to_error_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.details["short"], "xyz789");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AppError::validation("original URL cannot be empty").to_string(),
            "original URL cannot be empty"
        );
        assert_eq!(
            AppError::GenerationExhausted { attempts: 3 }.to_string(),
            "failed to generate a unique short code after 3 attempts"
        );
    }
}
