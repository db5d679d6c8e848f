//! Handlers for the `/events` resource.

use axum::extract::{Path, State};
use axum::Json;
use boxoffice_core::error::CoreError;
use boxoffice_core::types::DbId;
use boxoffice_db::models::event::Event;
use boxoffice_db::models::ticket_tier::TicketTier;
use boxoffice_db::repositories::{EventRepo, TicketTierRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/events
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(Json(events))
}

/// GET /api/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Event not found".into())))?;
    Ok(Json(event))
}

/// GET /api/events/{id}/ticket-tiers
pub async fn list_ticket_tiers(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<TicketTier>>> {
    EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Event not found".into())))?;

    let tiers = TicketTierRepo::list_by_event(&state.pool, id).await?;
    Ok(Json(tiers))
}
