//! Filter compiler
//!
//! Translates a query-expression tree into a `$`-operator filter document.
//! Pure translation over immutable inputs; never consults document data.

use serde_json::{json, Map, Value};

use super::ast::{Expression, Query};
use super::errors::{QueryError, QueryResult};
use crate::schema::Schema;

/// Compiles expression trees into filter documents
pub struct FilterCompiler;

impl FilterCompiler {
    /// Compiles a query into a filter document.
    ///
    /// The top-level predicate sequence is an implicit conjunction: an
    /// empty query compiles to `{}` (matches everything), a single
    /// predicate compiles to its bare translation, and two or more wrap
    /// as `$and`. Field names resolve through the schema's `id -> _id`
    /// alias at every depth.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::NotImplemented` if any expression, at any
    /// nesting depth, has no translation in this dialect. No partial
    /// document is produced.
    pub fn compile(query: &Query, schema: &Schema) -> QueryResult<Value> {
        match query.predicates.as_slice() {
            [] => Ok(Value::Object(Map::new())),
            [single] => Self::translate(single, schema),
            many => {
                let parts = many
                    .iter()
                    .map(|e| Self::translate(e, schema))
                    .collect::<QueryResult<Vec<_>>>()?;
                Ok(json!({ "$and": parts }))
            }
        }
    }

    /// Translates one expression into its canonical shape
    fn translate(expression: &Expression, schema: &Schema) -> QueryResult<Value> {
        match expression {
            Expression::Equal { field, value } => {
                let mut doc = Map::new();
                doc.insert(schema.storage_field(field).to_string(), value.clone());
                Ok(Value::Object(doc))
            }
            Expression::NotEqual { field, value } => {
                Ok(Self::operator(schema.storage_field(field), "$ne", value.clone()))
            }
            Expression::GreaterThan { field, value } => {
                Ok(Self::operator(schema.storage_field(field), "$gt", value.clone()))
            }
            Expression::GreaterOrEqual { field, value } => {
                Ok(Self::operator(schema.storage_field(field), "$gte", value.clone()))
            }
            Expression::LowerThan { field, value } => {
                Ok(Self::operator(schema.storage_field(field), "$lt", value.clone()))
            }
            Expression::LowerOrEqual { field, value } => {
                Ok(Self::operator(schema.storage_field(field), "$lte", value.clone()))
            }
            Expression::In { field, values } => {
                Ok(Self::operator(schema.storage_field(field), "$in", json!(values)))
            }
            Expression::NotIn { field, values } => {
                Ok(Self::operator(schema.storage_field(field), "$nin", json!(values)))
            }
            Expression::Regex { field, pattern } => Ok(Self::operator(
                schema.storage_field(field),
                "$regex",
                Value::String(pattern.as_str().to_string()),
            )),
            Expression::And(expressions) => {
                Ok(json!({ "$and": Self::translate_all(expressions, schema)? }))
            }
            Expression::Or(expressions) => {
                Ok(json!({ "$or": Self::translate_all(expressions, schema)? }))
            }
            Expression::ElemMatch { .. } => Err(QueryError::NotImplemented),
        }
    }

    /// Translates a sub-expression list, failing on the first error
    fn translate_all(expressions: &[Expression], schema: &Schema) -> QueryResult<Vec<Value>> {
        expressions
            .iter()
            .map(|e| Self::translate(e, schema))
            .collect()
    }

    /// Builds the `{field: {op: value}}` shape
    fn operator(field: &str, op: &str, value: Value) -> Value {
        let mut inner = Map::new();
        inner.insert(op.to_string(), value);
        let mut outer = Map::new();
        outer.insert(field.to_string(), Value::Object(inner));
        Value::Object(outer)
    }
}
