//! Query subsystem for doclens
//!
//! Translates abstract query-expression trees and textual sort specs into
//! the storage backend's native filter language.
//!
//! # Design Principles
//!
//! - Closed expression set with exhaustive dispatch; anything outside it
//!   is the `not implemented` sentinel, never a silent no-op
//! - Pure translation: no document data, no context, no hidden state
//! - The `id` alias resolves to the primary key at every nesting depth
//! - An unsupported expression fails the whole compile with no partial
//!   output

mod ast;
mod compiler;
mod errors;
mod lookup;
mod sort;

pub use ast::{Expression, Query};
pub use compiler::FilterCompiler;
pub use errors::{QueryError, QueryResult};
pub use lookup::Lookup;
pub use sort::{SortCompiler, SortDirection, SortSpec};
