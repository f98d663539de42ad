//! Error types for the store.

use crate::validation::ValidationError;

/// Errors returned by [`Database`](super::Database) operations.
///
/// Any of these aborts the enclosing transaction, so the store is left as it
/// was before the call.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A referenced row does not exist.
    #[error("{0}")]
    NotFound(&'static str),

    /// A field failed its invariant.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// SQLite reported an error.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Another thread panicked while holding the connection.
    #[error("database lock poisoned")]
    LockPoisoned,
}
