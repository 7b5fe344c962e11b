//! doclens - schema-driven query compilation and field selection for document stores
//!
//! Two independent, schema-coupled engines built on one schema model:
//! - `query`: boolean/comparison expression trees compiled into `$`-operator
//!   filter documents, plus sort-spec compilation
//! - `select`: field-selection trees validated against the schema and applied
//!   to result documents (projection, aliasing, computed fields)

pub mod context;
pub mod query;
pub mod schema;
pub mod select;
