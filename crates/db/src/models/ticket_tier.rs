use boxoffice_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A priced inventory bucket within an event, e.g. "VIP" or "GA".
///
/// `remaining_quantity` is the single source of truth for availability; it
/// only ever moves inside the booking transaction, under a row lock.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTier {
    pub id: DbId,
    pub event_id: DbId,
    pub tier: String,
    pub price_cents: i32,
    pub total_quantity: i32,
    pub remaining_quantity: i32,
    pub created_at: Timestamp,
}
