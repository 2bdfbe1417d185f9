use thiserror::Error;

use strindex_query::QueryError;
use strindex_store::StoreError;

/// Failure kinds surfaced by the engine.
///
/// The first five are caller-correctable; `Internal` is reserved for faults
/// that are never expected in normal operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed or missing caller-supplied data.
    #[error("{0}")]
    InvalidInput(String),

    /// The value is already catalogued.
    #[error("String already exists in the system")]
    Conflict(String),

    /// No entry with that value.
    #[error("String does not exist in the system")]
    NotFound(String),

    /// Natural-language text matched no rule.
    #[error("{0}")]
    Unparseable(String),

    /// Natural-language text matched rules that contradict each other.
    #[error("{0}")]
    Conflicting(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(value) => Self::Conflict(value),
            StoreError::Internal(reason) => Self::Internal(reason),
        }
    }
}

impl From<QueryError> for EngineError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::InvalidInput(msg) => Self::InvalidInput(msg),
            QueryError::Unparseable(msg) => Self::Unparseable(msg),
            QueryError::Conflicting(msg) => Self::Conflicting(msg),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
