//! Handlers for the `/bookings` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use boxoffice_core::booking::CreateBooking;
use boxoffice_core::error::CoreError;
use boxoffice_core::types::DbId;
use boxoffice_db::models::booking::Booking;
use boxoffice_db::repositories::BookingRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/bookings
///
/// Replays (same client reference, same event) also return 201 with the
/// originally created booking.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = BookingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/bookings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Booking>> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Booking not found".into())))?;
    Ok(Json(booking))
}
