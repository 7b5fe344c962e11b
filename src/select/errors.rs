//! # Selector Errors
//!
//! Error types for selector validation and projection. Every variant
//! carries a dotted field path; `prefixed` rebuilds the path as errors
//! unwind out of nested levels.

use thiserror::Error;

use crate::schema::ValidatorError;

/// Result type for selector operations
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Selector validation and projection errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectorError {
    /// Selector names a field absent from the schema level
    #[error("{path}: unknown field")]
    UnknownField { path: String },

    /// Selector nests under a field with no sub-schema
    #[error("{path}: field as no children")]
    NotNestable { path: String },

    /// Selector supplies params to a field declaring none
    #[error("{path}: params not allowed")]
    ParamsNotAllowed { path: String },

    /// Supplied param key absent from the field's descriptors
    #[error("{path}: unsupported param name: {name}")]
    UnsupportedParam { path: String, name: String },

    /// Supplied param value rejected by its descriptor's validator
    #[error("{path}: invalid param `{name}' value: {source}")]
    InvalidParamValue {
        path: String,
        name: String,
        source: ValidatorError,
    },

    /// Raw value is not a nested document where nesting was selected
    #[error("{path}: invalid value: not a dict")]
    InvalidValueShape { path: String },

    /// Computed-field handler (or its context) failed
    #[error("{path}: {message}")]
    HandlerFailed { path: String, message: String },
}

impl SelectorError {
    /// Rebuilds the dotted path by prefixing the parent level's name
    pub fn prefixed(self, parent: &str) -> Self {
        let join = |path: String| format!("{parent}.{path}");
        match self {
            SelectorError::UnknownField { path } => SelectorError::UnknownField { path: join(path) },
            SelectorError::NotNestable { path } => SelectorError::NotNestable { path: join(path) },
            SelectorError::ParamsNotAllowed { path } => {
                SelectorError::ParamsNotAllowed { path: join(path) }
            }
            SelectorError::UnsupportedParam { path, name } => SelectorError::UnsupportedParam {
                path: join(path),
                name,
            },
            SelectorError::InvalidParamValue { path, name, source } => {
                SelectorError::InvalidParamValue {
                    path: join(path),
                    name,
                    source,
                }
            }
            SelectorError::InvalidValueShape { path } => {
                SelectorError::InvalidValueShape { path: join(path) }
            }
            SelectorError::HandlerFailed { path, message } => SelectorError::HandlerFailed {
                path: join(path),
                message,
            },
        }
    }
}
