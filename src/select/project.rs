//! Selector projection engine
//!
//! Applies a validated selection tree to one raw result document,
//! producing the projected, aliased, optionally recomputed output
//! document. The only suspension point is handler invocation, which
//! receives the caller's cancellation-bearing context.

use serde_json::{Map, Value};

use super::errors::{SelectorError, SelectorResult};
use super::types::SelectorField;
use crate::context::RequestContext;
use crate::schema::Schema;

/// Applies validated selectors to result documents
pub struct SelectorProjector;

impl SelectorProjector {
    /// Projects one document through a selector.
    ///
    /// Per node: an absent raw value omits the field silently; child
    /// selectors recurse into a nested document (the field must carry a
    /// sub-schema, checked before the value's shape); a declared handler
    /// runs only when the node supplies at least one param, with the
    /// context checked first; the result lands under the node's alias,
    /// or its name. Sibling nodes evaluate sequentially and the first
    /// error aborts the whole projection.
    pub fn apply(
        ctx: &RequestContext,
        selector: &[SelectorField],
        schema: &Schema,
        document: &Map<String, Value>,
    ) -> SelectorResult<Map<String, Value>> {
        let mut out = Map::new();
        for node in selector {
            let field = schema.field(&node.name).ok_or_else(|| SelectorError::UnknownField {
                path: node.name.clone(),
            })?;

            let raw = match document.get(&node.name) {
                Some(value) => value.clone(),
                None => continue,
            };

            let value = if !node.fields.is_empty() {
                // Schema check precedes the value-shape check so a leaf
                // field with children reports the nesting error.
                let sub = field.schema.as_ref().ok_or_else(|| SelectorError::NotNestable {
                    path: node.name.clone(),
                })?;
                let nested = raw.as_object().ok_or_else(|| SelectorError::InvalidValueShape {
                    path: node.name.clone(),
                })?;
                let projected = Self::apply(ctx, &node.fields, sub, nested)
                    .map_err(|e| e.prefixed(&node.name))?;
                Value::Object(projected)
            } else if field.handler.is_some() && !node.params.is_empty() {
                Self::invoke_handler(ctx, field, node, raw)?
            } else {
                raw
            };

            out.insert(node.output_name().to_string(), value);
        }
        Ok(out)
    }

    /// Runs a computed-field handler, surfacing context expiry and
    /// handler failures at this node's path
    fn invoke_handler(
        ctx: &RequestContext,
        field: &crate::schema::Field,
        node: &SelectorField,
        raw: Value,
    ) -> SelectorResult<Value> {
        if let Some(err) = ctx.err() {
            return Err(SelectorError::HandlerFailed {
                path: node.name.clone(),
                message: err.to_string(),
            });
        }
        let handler = match &field.handler {
            Some(handler) => handler,
            None => return Ok(raw),
        };
        handler(ctx, raw, &node.params).map_err(|e| SelectorError::HandlerFailed {
            path: node.name.clone(),
            message: e.to_string(),
        })
    }
}
