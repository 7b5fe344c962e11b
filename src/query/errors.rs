//! # Query Errors
//!
//! Error types for filter and sort compilation.

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Filter and sort compilation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Expression kind the filter dialect cannot translate. Schema
    /// independent; reported identically from any nesting depth.
    #[error("not implemented")]
    NotImplemented,

    /// Empty token in a sort spec
    #[error("empty sort field")]
    EmptySortField,

    /// Sort field absent from the schema
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),

    /// Sort field present but not marked sortable
    #[error("field is not sortable: {0}")]
    UnsortableField(String),
}
