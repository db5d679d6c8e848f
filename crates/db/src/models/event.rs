use boxoffice_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An event that tickets can be booked for.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub venue: Option<String>,
    pub starts_at_utc: Timestamp,
    pub created_at: Timestamp,
}
