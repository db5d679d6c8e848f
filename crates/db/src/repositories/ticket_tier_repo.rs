//! Repository for the `ticket_tiers` table.
//!
//! Plain reads only. Anything that moves `remaining_quantity` goes through
//! the booking engine, which takes its own locked snapshot of the rows.

use boxoffice_core::types::DbId;
use sqlx::PgPool;

use crate::models::ticket_tier::TicketTier;

/// Column list shared by all tier queries.
const COLUMNS: &str =
    "id, event_id, tier, price_cents, total_quantity, remaining_quantity, created_at";

pub struct TicketTierRepo;

impl TicketTierRepo {
    /// List an event's tiers, most expensive first.
    pub async fn list_by_event(pool: &PgPool, event_id: DbId) -> Result<Vec<TicketTier>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM ticket_tiers WHERE event_id = $1 ORDER BY price_cents DESC");
        sqlx::query_as::<_, TicketTier>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Find a tier by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TicketTier>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ticket_tiers WHERE id = $1");
        sqlx::query_as::<_, TicketTier>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
