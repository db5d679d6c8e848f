//! Entity models mapped from database rows.
//!
//! Each struct derives `FromRow` so rows are converted to typed entities at
//! the storage boundary and untyped rows never leave this crate. Structs
//! that reach the HTTP API serialize with camelCase field names.

pub mod booking;
pub mod event;
pub mod ticket_tier;
