//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "An internal error occurred. Please try again later.",
        "code": "INTERNAL_ERROR",
        "timestamp": "2024-01-01T00:00:00Z"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request",
    content_type = "application/json",
    example = json!({
        "error": "The provided product ID is invalid",
        "code": "INVALID_PRODUCT_ID",
        "timestamp": "2024-01-01T00:00:00Z"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "The requested product was not found",
        "code": "PRODUCT_NOT_FOUND",
        "timestamp": "2024-01-01T00:00:00Z"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
