//! Schema type definitions
//!
//! A `Schema` maps field names to `Field` definitions. A field may nest a
//! sub-schema, declare selection-time parameters, carry a computed-field
//! handler, and carry a value validator. All of it is caller-built,
//! immutable configuration read by the compilers and the projection engine.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde_json::Value;

use super::errors::ValidatorError;
use super::validators::FieldValidator;
use crate::context::RequestContext;

/// Storage name of the primary-key field. The schema-level field named
/// `id` is a synthetic alias for it in filter, sort, and output contexts.
pub const PRIMARY_KEY: &str = "_id";

/// Error type produced by computed-field handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Computed-field handler: (context, raw value, supplied params) -> value.
///
/// Stored as schema configuration data; invoked by the projection engine
/// only when the selector node supplies at least one parameter.
pub type Handler =
    std::sync::Arc<dyn Fn(&RequestContext, Value, &BTreeMap<String, Value>) -> Result<Value, HandlerError> + Send + Sync>;

/// Descriptor for one selection-time parameter
#[derive(Debug)]
pub struct Param {
    /// Validator applied to the supplied argument
    pub validator: Box<dyn FieldValidator>,
}

impl Param {
    /// Create a descriptor from a validator
    pub fn new(validator: impl FieldValidator + 'static) -> Self {
        Self {
            validator: Box::new(validator),
        }
    }
}

/// Parameter descriptor table; empty means the field takes no params
pub type Params = HashMap<String, Param>;

/// One field definition
#[derive(Default)]
pub struct Field {
    /// Nested sub-schema, owned by this field
    pub schema: Option<Schema>,
    /// Whether the field may appear in a sort spec
    pub sortable: bool,
    /// Selection-time parameter descriptors
    pub params: Params,
    /// Computed-field handler
    pub handler: Option<Handler>,
    /// Validator applied to field values at write time
    pub validator: Option<Box<dyn FieldValidator>>,
}

impl Field {
    /// Create a plain leaf field
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the ready-made primary-key field
    pub fn id() -> Self {
        Self::new().sortable()
    }

    /// Attach a nested sub-schema
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Mark the field sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Declare a selection-time parameter
    pub fn with_param(mut self, name: impl Into<String>, validator: impl FieldValidator + 'static) -> Self {
        self.params.insert(name.into(), Param::new(validator));
        self
    }

    /// Attach a computed-field handler
    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&RequestContext, Value, &BTreeMap<String, Value>) -> Result<Value, HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.handler = Some(std::sync::Arc::new(handler));
        self
    }

    /// Attach a value validator
    pub fn with_validator(mut self, validator: impl FieldValidator + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Validates a value against the field's validator. Fields without a
    /// validator accept any value unchanged.
    pub fn validate_value(&self, value: &Value) -> Result<Value, ValidatorError> {
        match &self.validator {
            Some(validator) => validator.validate(value),
            None => Ok(value.clone()),
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("schema", &self.schema)
            .field("sortable", &self.sortable)
            .field("params", &self.params)
            .field("handler", &self.handler.as_ref().map(|_| "<handler>"))
            .field("validator", &self.validator)
            .finish()
    }
}

/// One level of a resource description
#[derive(Debug, Default)]
pub struct Schema {
    /// Field definitions, keyed by name (names unique per level)
    pub fields: HashMap<String, Field>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field definition
    pub fn with_field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Resolve a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Resolve a field name to its storage name. The synthetic `id` alias
    /// maps to the primary key; every other name passes through.
    pub fn storage_field<'a>(&self, name: &'a str) -> &'a str {
        if name == "id" {
            PRIMARY_KEY
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validators::Integer;
    use serde_json::json;

    fn sample_schema() -> Schema {
        Schema::new()
            .with_field("id", Field::id())
            .with_field("name", Field::new().sortable())
            .with_field(
                "address",
                Field::new().with_schema(
                    Schema::new()
                        .with_field("city", Field::new())
                        .with_field("zip", Field::new()),
                ),
            )
    }

    #[test]
    fn test_field_resolution() {
        let schema = sample_schema();
        assert!(schema.field("name").is_some());
        assert!(schema.field("unknown").is_none());
    }

    #[test]
    fn test_nested_schema_resolution() {
        let schema = sample_schema();
        let address = schema.field("address").unwrap();
        let sub = address.schema.as_ref().unwrap();
        assert!(sub.field("city").is_some());
        assert!(sub.field("street").is_none());
    }

    #[test]
    fn test_storage_field_alias() {
        let schema = sample_schema();
        assert_eq!(schema.storage_field("id"), "_id");
        assert_eq!(schema.storage_field("name"), "name");
        assert_eq!(schema.storage_field("_id"), "_id");
    }

    #[test]
    fn test_validate_value_pass_through_without_validator() {
        let field = Field::new();
        assert_eq!(field.validate_value(&json!("anything")).unwrap(), json!("anything"));
    }

    #[test]
    fn test_validate_value_uses_configured_validator() {
        let field = Field::new().with_validator(Integer::default());
        assert_eq!(field.validate_value(&json!(3.0)).unwrap(), json!(3));
        assert!(field.validate_value(&json!("x")).is_err());
    }

    #[test]
    fn test_param_descriptor_lookup() {
        let field = Field::new().with_param("limit", Integer::default());
        assert!(field.params.contains_key("limit"));
        assert!(!field.params.contains_key("offset"));
    }
}
