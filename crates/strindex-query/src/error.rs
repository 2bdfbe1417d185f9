//! Error types for the query crate.

/// Errors raised while decoding or translating a query.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    /// A filter value could not be decoded into its typed form.
    #[error("{0}")]
    InvalidInput(String),

    /// No natural-language rule matched the query text.
    #[error("{0}")]
    Unparseable(String),

    /// Rules matched, but the resulting filters contradict each other.
    #[error("{0}")]
    Conflicting(String),
}

/// Convenience alias for query results.
pub type QueryResult<T> = Result<T, QueryError>;
