//! JSON request body extractor.
//!
//! Decodes the body as JSON whatever the `Content-Type` header says, and turns
//! every failure into a 400 `VALIDATION_ERROR`.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::http::error::AppError;

/// Deserialized JSON body.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(format!("Unreadable request body: {e}")))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))
    }
}
