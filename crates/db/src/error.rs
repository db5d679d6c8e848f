//! Error type for the storage layer.

use boxoffice_core::error::CoreError;

/// Error returned by repository operations that enforce domain rules, such
/// as the booking engine. Plain read paths return `sqlx::Error` directly.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain rule was violated (not found, validation, conflict).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The database itself failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
