//! Repository for the `events` table.

use boxoffice_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::Event;

/// Column list shared by all event queries.
const COLUMNS: &str = "id, name, venue, starts_at_utc, created_at";

/// Read access to the event catalog.
pub struct EventRepo;

impl EventRepo {
    /// List all events, soonest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY starts_at_utc ASC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Find an event by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
