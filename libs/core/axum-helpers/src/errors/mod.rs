pub mod handlers;
pub mod responses;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every non-2xx response carries this envelope:
/// - `error`: sanitized, user-facing message
/// - `code`: stable machine-readable identifier (e.g. "PRODUCT_NOT_FOUND")
/// - `timestamp`: RFC 3339 time the error response was produced
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "The requested product was not found",
///   "code": "PRODUCT_NOT_FOUND",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Sanitized human-readable error message
    pub error: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    /// Time the error response was produced (RFC 3339)
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Build an error response with the standard envelope.
///
/// This is the single place an error message becomes an HTTP response body,
/// so the envelope shape stays consistent across handlers and fallbacks.
pub fn error_response(status: StatusCode, message: String, code: &str) -> Response {
    let body = Json(ErrorResponse::new(message, code));
    (status, body).into_response()
}
