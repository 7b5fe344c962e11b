//! Selector types
//!
//! Caller-facing selection tree. The parser producing it (query-string
//! mini-language or structured body) is an external collaborator; this
//! crate only validates and applies it, so the type derives serde with
//! every optional member defaulting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One node of a field-selection tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorField {
    /// Schema field name to select
    pub name: String,

    /// Output rename; the schema name is still used in error paths
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Child selectors for a nested field
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<SelectorField>,

    /// Supplied computed-field parameters. Ordered map so the first
    /// reported error within one node is deterministic.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, Value>,
}

impl SelectorField {
    /// Create a plain selection of one field
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            fields: Vec::new(),
            params: BTreeMap::new(),
        }
    }

    /// Rename the field on output
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Add a child selector
    pub fn with_field(mut self, field: SelectorField) -> Self {
        self.fields.push(field);
        self
    }

    /// Supply a computed-field parameter
    pub fn with_param(mut self, name: impl Into<String>, value: Value) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// The output key: alias if set, else the schema name
    pub fn output_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// A whole selection tree: the top-level sibling nodes
pub type Selector = Vec<SelectorField>;
