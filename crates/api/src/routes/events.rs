//! Route definitions for the `/events` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET /                      -> list
/// GET /{id}                  -> get_by_id
/// GET /{id}/ticket-tiers     -> list_ticket_tiers
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list))
        .route("/{id}", get(events::get_by_id))
        .route("/{id}/ticket-tiers", get(events::list_ticket_tiers))
}
