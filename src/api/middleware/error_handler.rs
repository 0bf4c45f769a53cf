//! Error handler for converting AppError to HTTP responses.
//!
//! Internal and configuration failures are sanitized: the response names the
//! error class, the logs carry the source chain.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - Validation / ValidationErrors / BadRequest → 400 BAD_REQUEST
    /// - Provider → 502 BAD_GATEWAY
    /// - Configuration / Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NOT_FOUND", &self.to_string()).with_details(json!({
                    "entity": entity,
                    "field": field,
                    "value": value,
                })),
            ),
            AppError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("VALIDATION_ERROR", &self.to_string()).with_details(json!({
                    "field": field,
                    "reason": reason,
                })),
            ),
            AppError::ValidationErrors { errors } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("VALIDATION_ERROR", "Validation failed").with_details(
                    json!(
                        errors
                            .iter()
                            .map(|e| json!({ "field": e.field, "message": e.message }))
                            .collect::<Vec<_>>()
                    ),
                ),
            ),
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", message),
            ),
            AppError::Provider { provider, .. } => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::new("PROVIDER_ERROR", &format!("Delivery provider {provider} failed")),
            ),
            AppError::Configuration { key, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("CONFIGURATION_ERROR", &format!("Configuration error: {key}")),
            ),
            AppError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
            ),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Validation { .. }
        | AppError::ValidationErrors { .. }
        | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Provider { .. } => StatusCode::BAD_GATEWAY,
        AppError::Configuration { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
