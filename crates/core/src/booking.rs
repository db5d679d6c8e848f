//! Booking request types and local validation.
//!
//! Everything here is pure: the booking engine calls [`validate`] before it
//! opens a transaction, so a request rejected by these rules never touches
//! storage.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

/// A single requested line item: a ticket tier and how many units of it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingItem {
    pub ticket_tier_id: DbId,
    pub quantity: i32,
}

/// Input for the booking engine.
///
/// `client_reference` is the caller-supplied idempotency token; blank or
/// whitespace-only values are treated as absent (see [`normalize_reference`]).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub event_id: DbId,
    pub client_reference: Option<String>,
    pub items: Vec<CreateBookingItem>,
}

/// Validate a booking request without any I/O.
///
/// Rejects a nil event id, an empty item list, nil tier ids, duplicate tier
/// ids within one request, and non-positive quantities. Quantities are
/// integers by construction; fractional values never reach this point
/// because they fail typed deserialization at the HTTP boundary.
pub fn validate(input: &CreateBooking) -> Result<(), CoreError> {
    if input.event_id.is_nil() {
        return Err(CoreError::Validation("eventId is required".into()));
    }
    if input.items.is_empty() {
        return Err(CoreError::Validation(
            "At least one booking item is required".into(),
        ));
    }

    let mut seen_tier_ids = HashSet::new();
    for item in &input.items {
        if item.ticket_tier_id.is_nil() {
            return Err(CoreError::Validation("ticketTierId is required".into()));
        }
        if !seen_tier_ids.insert(item.ticket_tier_id) {
            return Err(CoreError::Validation(
                "Duplicate ticketTierId in items".into(),
            ));
        }
        if item.quantity <= 0 {
            return Err(CoreError::Validation(
                "Quantity must be a positive integer".into(),
            ));
        }
    }

    Ok(())
}

/// Trim a client reference; empty and whitespace-only values count as absent.
///
/// A reference normalized to `None` skips the idempotency lookup entirely
/// and is stored as SQL NULL (which the unique constraint ignores).
pub fn normalize_reference(reference: Option<&str>) -> Option<&str> {
    reference.map(str::trim).filter(|r| !r.is_empty())
}
