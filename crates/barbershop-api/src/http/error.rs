//! Application error type mapping to HTTP status codes and a JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use barbershop_types::error::BarberError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Barber-related errors.
    Barber(BarberError),
    /// Malformed request (bad JSON body, non-integer id).
    Validation(String),
}

impl From<BarberError> for AppError {
    fn from(e: BarberError) -> Self {
        AppError::Barber(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Barber(BarberError::NotFound) => {
                (StatusCode::NOT_FOUND, "BARBER_NOT_FOUND", "Barber not found".to_string())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Barber(BarberError::StorageError(msg)) => {
                tracing::error!(error = %msg, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Storage error".to_string(),
                )
            }
        };

        let body = json!({
            "error": {
                "code": code,
                "message": message,
            }
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
