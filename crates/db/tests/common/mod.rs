//! Shared fixtures for storage tests.

use boxoffice_core::types::DbId;
use sqlx::PgPool;

/// Insert an event and return its ID.
pub async fn seed_event(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO events (name, venue, starts_at_utc) \
         VALUES ($1, 'Test Hall', NOW() + INTERVAL '30 days') \
         RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a tier with full availability and return its ID.
pub async fn seed_tier(
    pool: &PgPool,
    event_id: DbId,
    tier: &str,
    price_cents: i32,
    total_quantity: i32,
) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO ticket_tiers (event_id, tier, price_cents, total_quantity, remaining_quantity) \
         VALUES ($1, $2, $3, $4, $4) \
         RETURNING id",
    )
    .bind(event_id)
    .bind(tier)
    .bind(price_cents)
    .bind(total_quantity)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Read a tier's remaining quantity directly from the table.
pub async fn remaining(pool: &PgPool, tier_id: DbId) -> i32 {
    sqlx::query_scalar("SELECT remaining_quantity FROM ticket_tiers WHERE id = $1")
        .bind(tier_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
