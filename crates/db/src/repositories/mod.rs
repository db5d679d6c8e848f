//! Repository layer.
//!
//! Each repository is a zero-sized struct with async methods taking
//! `&PgPool` as their first argument. Catalog reads return `sqlx::Error`;
//! the booking engine returns `DbError` so domain outcomes and database
//! failures stay distinguishable.

pub mod booking_repo;
pub mod event_repo;
pub mod ticket_tier_repo;

pub use booking_repo::BookingRepo;
pub use event_repo::EventRepo;
pub use ticket_tier_repo::TicketTierRepo;
