//! Store-level error taxonomy.

use thiserror::Error;

/// Failures surfaced by the credential and note stores. The HTTP layer maps
/// these onto statuses; nothing here knows about the wire.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Registration hit an email that already exists (exact match on the
    /// stored string).
    #[error("User already exists")]
    DuplicateEmail,

    /// Login found the user but the password did not match the stored hash.
    #[error("Invalid credentials")]
    BadCredentials,

    /// The row does not exist — or belongs to someone else, which callers
    /// must not be able to tell apart.
    #[error("Not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("password hash error: {0}")]
    PasswordHash(String),
}
