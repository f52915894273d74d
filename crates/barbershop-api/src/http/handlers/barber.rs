//! Barber CRUD handlers for the REST API.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use barbershop_types::barber::{Barber, BarberRequest};

use crate::http::error::AppError;
use crate::http::extractors::barber_id::BarberIdPath;
use crate::http::extractors::json::JsonBody;
use crate::state::AppState;

/// GET /barber - List every barber.
pub async fn list_barbers(State(state): State<AppState>) -> Result<Json<Vec<Barber>>, AppError> {
    let barbers = state.barber_service.list_barbers().await?;
    Ok(Json(barbers))
}

/// GET /barber/{id} - Get one barber.
pub async fn get_barber(
    State(state): State<AppState>,
    BarberIdPath(id): BarberIdPath,
) -> Result<Json<Barber>, AppError> {
    let barber = state.barber_service.get_barber(id).await?;
    Ok(Json(barber))
}

/// POST /barber - Create a barber; the store assigns the id.
pub async fn create_barber(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<BarberRequest>,
) -> Result<(StatusCode, Json<Barber>), AppError> {
    let barber = state.barber_service.create_barber(body).await?;
    Ok((StatusCode::CREATED, Json(barber)))
}

/// PUT /barber/{id} - Replace a barber's fields; echoes the record as written.
pub async fn update_barber(
    State(state): State<AppState>,
    BarberIdPath(id): BarberIdPath,
    JsonBody(body): JsonBody<BarberRequest>,
) -> Result<Json<Barber>, AppError> {
    let barber = state.barber_service.update_barber(id, body).await?;
    Ok(Json(barber))
}

/// DELETE /barber/{id} - Delete a barber.
pub async fn delete_barber(
    State(state): State<AppState>,
    BarberIdPath(id): BarberIdPath,
) -> Result<StatusCode, AppError> {
    state.barber_service.delete_barber(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
