//! Schema subsystem for doclens
//!
//! Declarative resource description consumed by both engines: named fields,
//! optional nested sub-schemas, sortability, selection-time parameter
//! descriptors, computed-field handlers, and pluggable value validators.
//!
//! # Design Principles
//!
//! - Schemas are immutable value trees; the engines only read them
//! - Sub-schemas are owned by their parent field, so cycles are
//!   unrepresentable
//! - Validators are a capability trait so new kinds can be added without
//!   touching the compilers or the projection engine

mod errors;
mod types;
mod validators;

pub use errors::ValidatorError;
pub use types::{Field, Handler, HandlerError, Param, Params, Schema, PRIMARY_KEY};
pub use validators::{Boolean, Boundaries, FieldValidator, Float, Integer, Text, Time};
