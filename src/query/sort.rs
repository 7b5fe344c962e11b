//! Sort compiler
//!
//! Parses a textual sort spec (comma-separated fields, `-` prefix for
//! descending) into resolved, validated sort entries.

use std::fmt;

use super::errors::{QueryError, QueryResult};
use crate::schema::{Schema, PRIMARY_KEY};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One resolved sort entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Storage field name to sort by
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

impl fmt::Display for SortSpec {
    /// Renders the signed token form (`f` / `-f`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Asc => write!(f, "{}", self.field),
            SortDirection::Desc => write!(f, "-{}", self.field),
        }
    }
}

/// Compiles textual sort specs against a schema
pub struct SortCompiler;

impl SortCompiler {
    /// Compiles a sort spec string.
    ///
    /// Empty or blank input yields a single ascending entry on the
    /// primary key. Tokens are trimmed and resolved left to right through
    /// the `id -> _id` alias; output order matches input order exactly
    /// and duplicates are kept.
    ///
    /// # Errors
    ///
    /// Fails on an empty token, an unknown field, or a field not marked
    /// sortable.
    pub fn compile(spec: &str, schema: &Schema) -> QueryResult<Vec<SortSpec>> {
        if spec.trim().is_empty() {
            return Ok(vec![SortSpec::asc(PRIMARY_KEY)]);
        }

        let mut entries = Vec::new();
        for token in spec.split(',') {
            let token = token.trim();
            let (name, descending) = match token.strip_prefix('-') {
                Some(rest) => (rest, true),
                None => (token, false),
            };
            if name.is_empty() {
                return Err(QueryError::EmptySortField);
            }
            let field = schema
                .field(name)
                .ok_or_else(|| QueryError::UnknownSortField(name.to_string()))?;
            if !field.sortable {
                return Err(QueryError::UnsortableField(name.to_string()));
            }
            let resolved = schema.storage_field(name);
            entries.push(if descending {
                SortSpec::desc(resolved)
            } else {
                SortSpec::asc(resolved)
            });
        }
        Ok(entries)
    }
}
