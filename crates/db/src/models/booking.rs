use boxoffice_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Lifecycle status of a booking.
///
/// The engine only ever writes `Confirmed`: a booking row is inserted in its
/// settled state inside the reservation transaction and failed attempts leave
/// no row at all. The other variants exist for parity with the stored enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "booking_status", rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Failed,
    Canceled,
}

/// A booking row together with its line items.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub event_id: DbId,
    pub client_reference: Option<String>,
    pub status: BookingStatus,
    pub total_amount_cents: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Filled in by the repository after the row itself is fetched.
    #[sqlx(skip)]
    pub items: Vec<BookingItem>,
}

/// One line of a booking, joined with the tier's label.
///
/// `price_cents` is the unit price captured at booking time; later tier
/// price changes do not affect it.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingItem {
    pub id: DbId,
    pub ticket_tier_id: DbId,
    pub tier: String,
    pub quantity: i32,
    pub price_cents: i32,
}
