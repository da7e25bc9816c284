//! Unified JSON error responses
//!
//! Handlers return [`crate::Error`]; this module decides the status code and
//! the body so every endpoint reports failures the same way.

use crate::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Standard error response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Unique error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Extension trait for consistent error formatting
pub trait ErrorResponseExt {
    /// Convert to standardized error response
    fn to_error_response(&self) -> ErrorResponse;

    /// Get the appropriate HTTP status code
    fn status_code(&self) -> StatusCode;
}

impl ErrorResponseExt for Error {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            Error::InvalidReservationName { .. } => {
                ErrorResponse::new("INVALID_RESERVATION_NAME", self.to_string())
            }
            Error::InvalidRequest { .. } => ErrorResponse::new("INVALID_REQUEST", self.to_string()),
            // Storage and configuration details stay in the logs
            Error::Database(_) | Error::Migration(_) => {
                ErrorResponse::new("STORAGE_ERROR", "Storage unavailable")
            }
            Error::Config(_) | Error::Io(_) | Error::Application { .. } => {
                ErrorResponse::new("INTERNAL_ERROR", "Internal server error")
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidReservationName { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Error::Database(_) | Error::Migration(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Config(_) | Error::Io(_) | Error::Application { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "Request handling failed");
        }
        let status = self.status_code();
        self.to_error_response().into_response_with_status(status)
    }
}
