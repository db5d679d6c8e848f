//! HTTP handlers, grouped by resource.

pub mod bookings;
pub mod events;
