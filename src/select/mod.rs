//! Field-selection subsystem for doclens
//!
//! Validates caller-supplied selection trees against a schema, then
//! applies them to result documents: projection, output renaming, and
//! opt-in computed fields.
//!
//! # Design Principles
//!
//! - Validate once per selector, apply per document
//! - First error wins, depth-first left-to-right, with a dotted field
//!   path built from selector names (never output aliases)
//! - Fail fast: an error along any path aborts the whole projection
//! - Handlers run only when the node supplies at least one parameter

mod errors;
mod project;
mod types;
mod validate;

pub use errors::{SelectorError, SelectorResult};
pub use project::SelectorProjector;
pub use types::{Selector, SelectorField};
pub use validate::SelectorValidator;
