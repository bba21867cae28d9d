//! Error types for the math service
//!
//! Provides unified error handling using thiserror. Input errors are
//! reported to the caller verbatim; everything else is logged and hidden
//! behind an opaque server error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Message returned to callers for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// == Storage Error Enum ==
/// Operation log failures.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Could not open or create the database
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    /// Schema migration failed
    #[error("Migration {version} failed: {message}")]
    MigrationFailed { version: String, message: String },

    /// A statement failed to execute
    #[error("Query '{query}' failed: {message}")]
    QueryFailed { query: String, message: String },
}

// == Math Error Enum ==
/// Unified error type for the math service.
#[derive(Error, Debug)]
pub enum MathError {
    /// Caller-supplied value violates a documented precondition
    #[error("{0}")]
    InvalidInput(String),

    /// Computation did not finish within the wait timeout
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },

    /// Exact result does not fit a finite f64
    #[error("Result of {0} exceeds the floating-point range")]
    Overflow(String),

    /// Operation log failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Any other unexpected failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MathError {
    /// True for errors attributable to the caller's input.
    pub fn is_input_error(&self) -> bool {
        matches!(self, MathError::InvalidInput(_))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for MathError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            MathError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => {
                error!(error = %other, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the math service.
pub type Result<T> = std::result::Result<T, MathError>;
