/// Domain error taxonomy.
///
/// `NotFound` means a referenced entity is absent, `Validation` means the
/// caller sent structurally or semantically invalid input, and `Conflict`
/// means the request was valid but current state cannot satisfy it (for
/// bookings: insufficient remaining inventory). Unexpected storage failures
/// are not part of this taxonomy; they travel as `sqlx::Error` and are
/// sanitized at the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),
}
