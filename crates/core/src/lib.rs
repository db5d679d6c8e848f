//! Boxoffice domain layer.
//!
//! Pure types and rules shared by the storage and API crates: ID and
//! timestamp scalars, the domain error taxonomy, and the I/O-free booking
//! request validation. This crate has no database dependency, so anything
//! rejected here is guaranteed never to have touched storage.

pub mod booking;
pub mod error;
pub mod types;
