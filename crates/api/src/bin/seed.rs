//! Seed the database with a demo event and its ticket tiers.
//!
//! Idempotent: re-running resets the demo tiers to full availability, so it
//! doubles as a quick way to restock the demo inventory.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use boxoffice_core::types::DbId;

const EVENT_NAME: &str = "Thoughtly Live";
const EVENT_VENUE: &str = "Global Livestream";
const EVENT_STARTS_AT: &str = "2025-01-01T20:00:00Z";

/// (tier, price_cents, total_quantity)
const TIERS: [(&str, i32, i32); 3] = [
    ("VIP", 10_000, 100),
    ("FRONT_ROW", 5_000, 200),
    ("GA", 1_000, 5_000),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = boxoffice_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    boxoffice_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let mut tx = pool.begin().await.expect("Failed to begin transaction");

    let existing: Option<DbId> = sqlx::query_scalar("SELECT id FROM events WHERE name = $1")
        .bind(EVENT_NAME)
        .fetch_optional(&mut *tx)
        .await
        .expect("Failed to look up demo event");

    let event_id: DbId = match existing {
        Some(id) => id,
        None => sqlx::query_scalar(
            "INSERT INTO events (name, venue, starts_at_utc) VALUES ($1, $2, $3::timestamptz) \
             RETURNING id",
        )
        .bind(EVENT_NAME)
        .bind(EVENT_VENUE)
        .bind(EVENT_STARTS_AT)
        .fetch_one(&mut *tx)
        .await
        .expect("Failed to insert demo event"),
    };

    for (tier, price_cents, total_quantity) in TIERS {
        sqlx::query(
            "INSERT INTO ticket_tiers (event_id, tier, price_cents, total_quantity, remaining_quantity) \
             VALUES ($1, $2, $3, $4, $4) \
             ON CONFLICT (event_id, tier) DO UPDATE SET \
                 price_cents = EXCLUDED.price_cents, \
                 total_quantity = EXCLUDED.total_quantity, \
                 remaining_quantity = EXCLUDED.total_quantity",
        )
        .bind(event_id)
        .bind(tier)
        .bind(price_cents)
        .bind(total_quantity)
        .execute(&mut *tx)
        .await
        .expect("Failed to upsert ticket tier");

        tracing::info!(tier, price_cents, total_quantity, "Seeded ticket tier");
    }

    tx.commit().await.expect("Failed to commit seed transaction");

    tracing::info!(%event_id, name = EVENT_NAME, "Seed complete");
}
