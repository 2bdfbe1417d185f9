/// Errors from string store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// An entry with the same value (or id) is already stored.
    #[error("string already exists: {0:?}")]
    Conflict(String),

    /// The store's internal state is unusable (e.g. a poisoned lock).
    #[error("store unavailable: {0}")]
    Internal(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
