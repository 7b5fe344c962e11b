//! Selector Validation Invariant Tests
//!
//! Static selector checks against the schema:
//! - Unknown fields, at any depth, fail with a dotted path
//! - Children are allowed only under fields carrying a sub-schema
//! - Params are allowed only under fields declaring descriptors, with
//!   every key known and every value passing its validator
//! - The first error wins, depth-first left-to-right

use doclens::schema::{Field, Integer, Schema};
use doclens::select::{SelectorField, SelectorValidator};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn test_schema() -> Schema {
    Schema::new()
        .with_field(
            "parent",
            Field::new().with_schema(Schema::new().with_field("child", Field::new())),
        )
        .with_field("simple", Field::new())
        .with_field("with_params", Field::new().with_param("foo", Integer::default()))
}

fn error_of(selector: Vec<SelectorField>) -> String {
    SelectorValidator::validate(&selector, &test_schema())
        .unwrap_err()
        .to_string()
}

// =============================================================================
// Accepting Tests
// =============================================================================

/// A nested field with a matching sub-schema validates.
#[test]
fn test_nested_selection_validates() {
    let selector = vec![SelectorField::new("parent").with_field(SelectorField::new("child"))];
    assert!(SelectorValidator::validate(&selector, &test_schema()).is_ok());
}

/// A valid param value passes its descriptor's validator.
#[test]
fn test_valid_param_validates() {
    let selector = vec![SelectorField::new("with_params").with_param("foo", json!(1))];
    assert!(SelectorValidator::validate(&selector, &test_schema()).is_ok());
}

/// Aliases play no part in validation.
#[test]
fn test_alias_is_ignored_by_validation() {
    let selector = vec![SelectorField::new("parent")
        .with_alias("p")
        .with_field(SelectorField::new("child").with_alias("c"))];
    assert!(SelectorValidator::validate(&selector, &test_schema()).is_ok());
}

// =============================================================================
// Rejecting Tests
// =============================================================================

/// An unknown top-level field reports its bare name.
#[test]
fn test_unknown_top_field() {
    let selector = vec![SelectorField::new("foo")];
    assert_eq!(error_of(selector), "foo: unknown field");
}

/// Children under a schema-leaf field are rejected.
#[test]
fn test_children_under_leaf_field() {
    let selector = vec![SelectorField::new("simple").with_field(SelectorField::new("child"))];
    assert_eq!(error_of(selector), "simple: field as no children");
}

/// An unknown nested field reports the dotted path.
#[test]
fn test_unknown_nested_field() {
    let selector = vec![SelectorField::new("parent").with_field(SelectorField::new("foo"))];
    assert_eq!(error_of(selector), "parent.foo: unknown field");
}

/// Params on a field declaring no descriptors are rejected.
#[test]
fn test_params_on_paramless_field() {
    let selector = vec![SelectorField::new("simple").with_param("foo", json!(1))];
    assert_eq!(error_of(selector), "simple: params not allowed");
}

/// A param key absent from the descriptors is rejected by name.
#[test]
fn test_unsupported_param_key() {
    let selector = vec![SelectorField::new("with_params").with_param("bar", json!(1))];
    assert_eq!(error_of(selector), "with_params: unsupported param name: bar");
}

/// A param value failing its validator embeds the validator's message.
#[test]
fn test_invalid_param_value() {
    let selector = vec![SelectorField::new("with_params").with_param("foo", json!("a string"))];
    assert_eq!(
        error_of(selector),
        "with_params: invalid param `foo' value: not an integer"
    );
}

/// The first failing node wins, left to right.
#[test]
fn test_first_error_wins() {
    let selector = vec![
        SelectorField::new("parent").with_field(SelectorField::new("missing")),
        SelectorField::new("also_missing"),
    ];
    assert_eq!(error_of(selector), "parent.missing: unknown field");
}

// =============================================================================
// Serde Round-Trip Tests
// =============================================================================

/// Selector trees deserialize from the external node shape with all
/// optional members defaulting, and validate as usual.
#[test]
fn test_selector_from_json() {
    let selector: Vec<SelectorField> = serde_json::from_value(json!([
        {"name": "parent", "alias": "p", "fields": [{"name": "child"}]},
        {"name": "with_params", "params": {"foo": 3}}
    ]))
    .unwrap();
    assert!(SelectorValidator::validate(&selector, &test_schema()).is_ok());
}
