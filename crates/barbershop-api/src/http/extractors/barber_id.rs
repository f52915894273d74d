//! `{id}` path parameter extractor.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use barbershop_types::barber::BarberId;

use crate::http::error::AppError;

/// Barber id parsed from the `{id}` path segment as a base-10 integer.
pub struct BarberIdPath(pub BarberId);

impl<S> FromRequestParts<S> for BarberIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        raw.parse::<BarberId>()
            .map(BarberIdPath)
            .map_err(|_| AppError::Validation(format!("Invalid barber id '{raw}'")))
    }
}
