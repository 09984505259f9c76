//! Error types for lapor-rs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // === Client Errors ===
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Citizen not found: {0}")]
    CitizenNotFound(String),

    #[error("Complaint not found: {0}")]
    ComplaintNotFound(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Absent token or bad credentials.
    #[error("Access denied")]
    Unauthorized,

    /// A token was supplied but failed verification. The original intake
    /// system answers 400 here rather than 401, and clients rely on it.
    #[error("Invalid token")]
    InvalidToken,

    // === Server Errors ===
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            // 4xx Client Errors
            Self::NotFound(_) | Self::CitizenNotFound(_) | Self::ComplaintNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::MissingField(_)
            | Self::Validation(_)
            | Self::BadRequest(_)
            | Self::InvalidToken => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,

            // 5xx Server Errors
            Self::Database(_) | Self::Config(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::CitizenNotFound(_) => "CITIZEN_NOT_FOUND",
            Self::ComplaintNotFound(_) => "COMPLAINT_NOT_FOUND",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized => "ACCESS_DENIED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns whether this error should be logged at error level.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        // Log server errors
        if self.is_server_error() {
            tracing::error!(error = %self, code = code, "Server error occurred");
        } else {
            tracing::debug!(error = %self, code = code, "Client error occurred");
        }

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

// === From implementations ===

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_status_codes() {
        assert_eq!(
            AppError::MissingField("name".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Validation("bad nik".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        // Invalid tokens answer 400, not 401
        assert_eq!(
            AppError::InvalidToken.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ComplaintNotFound("7".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_server_errors_are_500() {
        assert!(AppError::Database("down".into()).is_server_error());
        assert!(AppError::Internal("boom".into()).is_server_error());
        assert!(!AppError::Unauthorized.is_server_error());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::MissingField("lokasi".into()).error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(AppError::InvalidToken.error_code(), "INVALID_TOKEN");
        assert_eq!(AppError::Unauthorized.error_code(), "ACCESS_DENIED");
    }
}
