//! Repository for bookings: the booking engine.
//!
//! `create` runs the whole reservation as a single transaction: event check,
//! idempotent replay by client reference, a `FOR UPDATE` read of the target
//! tiers, availability checks, then the booking and item inserts plus the
//! inventory decrements. Concurrent requests touching the same tiers
//! serialize on the row locks, so a tier can never be oversold.

use std::collections::HashMap;

use boxoffice_core::booking::{self, CreateBooking, CreateBookingItem};
use boxoffice_core::error::CoreError;
use boxoffice_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::error::DbError;
use crate::models::booking::{Booking, BookingItem, BookingStatus};

/// Column list shared by all booking queries.
const COLUMNS: &str =
    "id, event_id, client_reference, status, total_amount_cents, created_at, updated_at";

/// Column list for item queries, joined with the tier label.
const ITEM_COLUMNS: &str = "bi.id, bi.ticket_tier_id, tt.tier, bi.quantity, bi.price_cents";

/// A tier row as read under the `FOR UPDATE` lock.
#[derive(sqlx::FromRow)]
struct LockedTier {
    id: DbId,
    event_id: DbId,
    tier: String,
    price_cents: i32,
    remaining_quantity: i32,
}

/// The booking engine, plus read access to settled bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Atomically reserve the requested quantities, or fail leaving no trace.
    ///
    /// On success the returned booking is `Confirmed`, its items carry the
    /// unit prices in effect at booking time, and each tier's
    /// `remaining_quantity` has been decremented. On any error the
    /// transaction rolls back and inventory is untouched.
    ///
    /// A request whose `clientReference` matches an earlier booking for the
    /// same event is a replay: the existing booking is returned as-is and
    /// inventory does not move again.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, DbError> {
        booking::validate(input)?;

        let mut tx = pool.begin().await?;

        Self::ensure_event_exists(&mut tx, input.event_id).await?;

        let reference = booking::normalize_reference(input.client_reference.as_deref());
        if let Some(reference) = reference {
            if let Some((existing_id, existing_event_id)) =
                Self::find_by_reference(&mut tx, reference).await?
            {
                if existing_event_id != input.event_id {
                    return Err(CoreError::Validation(
                        "clientReference already used for another event".into(),
                    )
                    .into());
                }
                let existing = Self::load(&mut tx, existing_id).await?;
                tx.commit().await?;
                return Ok(existing);
            }
        }

        let tier_ids: Vec<DbId> = input.items.iter().map(|item| item.ticket_tier_id).collect();
        let locked = Self::lock_tiers(&mut tx, &tier_ids, input.event_id).await?;
        if locked.len() != tier_ids.len() {
            return Err(
                CoreError::NotFound("One or more ticket tiers were not found".into()).into(),
            );
        }
        let tiers_by_id: HashMap<DbId, LockedTier> =
            locked.into_iter().map(|tier| (tier.id, tier)).collect();

        // First pass: check every item against the locked rows and price the
        // booking. Nothing is written until the whole request is known good.
        let mut resolved: Vec<(&CreateBookingItem, &LockedTier)> =
            Vec::with_capacity(input.items.len());
        let mut total_amount_cents: i64 = 0;
        for item in &input.items {
            let tier = tiers_by_id
                .get(&item.ticket_tier_id)
                .ok_or_else(|| CoreError::NotFound("Ticket tier not found".into()))?;
            if tier.event_id != input.event_id {
                return Err(CoreError::Validation(
                    "Ticket tier does not belong to the event".into(),
                )
                .into());
            }
            if tier.remaining_quantity < item.quantity {
                return Err(CoreError::Conflict(format!(
                    "Not enough tickets remaining for tier {}",
                    tier.tier
                ))
                .into());
            }
            total_amount_cents += i64::from(tier.price_cents) * i64::from(item.quantity);
            resolved.push((item, tier));
        }

        let booking_id: DbId = sqlx::query_scalar(
            "INSERT INTO bookings (event_id, client_reference, status, total_amount_cents) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(input.event_id)
        .bind(reference)
        .bind(BookingStatus::Confirmed)
        .bind(total_amount_cents)
        .fetch_one(&mut *tx)
        .await?;

        for (item, tier) in resolved {
            sqlx::query(
                "INSERT INTO booking_items (booking_id, ticket_tier_id, quantity, price_cents) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(booking_id)
            .bind(tier.id)
            .bind(item.quantity)
            .bind(tier.price_cents)
            .execute(&mut *tx)
            .await?;

            sqlx::query(
                "UPDATE ticket_tiers SET remaining_quantity = remaining_quantity - $1 \
                 WHERE id = $2",
            )
            .bind(item.quantity)
            .bind(tier.id)
            .execute(&mut *tx)
            .await?;
        }

        let created = Self::load(&mut tx, booking_id).await?;
        tx.commit().await?;
        Ok(created)
    }

    /// Load a booking and its items by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::load_optional(&mut conn, id).await
    }

    // -----------------------------------------------------------------------
    // Transaction internals
    // -----------------------------------------------------------------------

    async fn ensure_event_exists(conn: &mut PgConnection, event_id: DbId) -> Result<(), DbError> {
        let found: Option<i32> = sqlx::query_scalar("SELECT 1 FROM events WHERE id = $1")
            .bind(event_id)
            .fetch_optional(&mut *conn)
            .await?;
        if found.is_none() {
            return Err(CoreError::NotFound("Event not found".into()).into());
        }
        Ok(())
    }

    async fn find_by_reference(
        conn: &mut PgConnection,
        reference: &str,
    ) -> Result<Option<(DbId, DbId)>, sqlx::Error> {
        sqlx::query_as("SELECT id, event_id FROM bookings WHERE client_reference = $1")
            .bind(reference)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Lock the requested tier rows for the rest of the transaction.
    ///
    /// The event filter means tiers from other events simply come back
    /// missing, which the caller reports as not found.
    async fn lock_tiers(
        conn: &mut PgConnection,
        tier_ids: &[DbId],
        event_id: DbId,
    ) -> Result<Vec<LockedTier>, sqlx::Error> {
        sqlx::query_as::<_, LockedTier>(
            "SELECT id, event_id, tier, price_cents, remaining_quantity \
             FROM ticket_tiers \
             WHERE id = ANY($1) AND event_id = $2 \
             FOR UPDATE",
        )
        .bind(tier_ids)
        .bind(event_id)
        .fetch_all(&mut *conn)
        .await
    }

    async fn load_optional(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        let Some(mut found) = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM booking_items bi \
             JOIN ticket_tiers tt ON tt.id = bi.ticket_tier_id \
             WHERE bi.booking_id = $1 \
             ORDER BY bi.id"
        );
        found.items = sqlx::query_as::<_, BookingItem>(&query)
            .bind(id)
            .fetch_all(&mut *conn)
            .await?;

        Ok(Some(found))
    }

    async fn load(conn: &mut PgConnection, id: DbId) -> Result<Booking, sqlx::Error> {
        Self::load_optional(conn, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }
}
