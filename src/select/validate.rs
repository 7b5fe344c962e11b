//! Selector validator
//!
//! Static check of a selection tree against a schema, run once before the
//! per-document projection. Depth-first, left to right; the first failure
//! aborts with a dotted field path.

use super::errors::{SelectorError, SelectorResult};
use super::types::SelectorField;
use crate::schema::Schema;

/// Validates selection trees against a schema
pub struct SelectorValidator;

impl SelectorValidator {
    /// Validates a selector.
    ///
    /// Per node, in priority order: the name must resolve at this schema
    /// level; children require the field to carry a sub-schema (then
    /// recurse); params require the field to declare descriptors, every
    /// supplied key must exist, and every supplied value must pass its
    /// descriptor's validator.
    pub fn validate(selector: &[SelectorField], schema: &Schema) -> SelectorResult<()> {
        for node in selector {
            let field = schema.field(&node.name).ok_or_else(|| SelectorError::UnknownField {
                path: node.name.clone(),
            })?;

            if !node.fields.is_empty() {
                let sub = field.schema.as_ref().ok_or_else(|| SelectorError::NotNestable {
                    path: node.name.clone(),
                })?;
                Self::validate(&node.fields, sub).map_err(|e| e.prefixed(&node.name))?;
            }

            if !node.params.is_empty() {
                if field.params.is_empty() {
                    return Err(SelectorError::ParamsNotAllowed {
                        path: node.name.clone(),
                    });
                }
                for (key, value) in &node.params {
                    let param =
                        field
                            .params
                            .get(key)
                            .ok_or_else(|| SelectorError::UnsupportedParam {
                                path: node.name.clone(),
                                name: key.clone(),
                            })?;
                    param.validator.validate(value).map_err(|source| {
                        SelectorError::InvalidParamValue {
                            path: node.name.clone(),
                            name: key.clone(),
                            source,
                        }
                    })?;
                }
            }
        }
        Ok(())
    }
}
