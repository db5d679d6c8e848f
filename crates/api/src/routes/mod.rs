pub mod bookings;
pub mod events;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                            service and database health
///
/// /events                            list events
/// /events/{id}                       get one event
/// /events/{id}/ticket-tiers          list an event's tiers
///
/// /bookings                          create booking (POST)
/// /bookings/{id}                     get one booking
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/events", events::router())
        .nest("/bookings", bookings::router())
}
