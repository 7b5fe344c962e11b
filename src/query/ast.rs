//! Query expression AST
//!
//! Closed sum type of comparison and boolean expressions. A `Query` is an
//! implicit top-level conjunction of expressions.

use regex::Regex;
use serde_json::Value;

/// One node of a boolean/comparison query tree.
///
/// `ElemMatch` belongs to the expression model (array-element matching)
/// but has no translation in this filter dialect; compiling it yields
/// `QueryError::NotImplemented`.
#[derive(Debug, Clone)]
pub enum Expression {
    /// field = value
    Equal { field: String, value: Value },
    /// field != value
    NotEqual { field: String, value: Value },
    /// field > value
    GreaterThan { field: String, value: Value },
    /// field >= value
    GreaterOrEqual { field: String, value: Value },
    /// field < value
    LowerThan { field: String, value: Value },
    /// field <= value
    LowerOrEqual { field: String, value: Value },
    /// field in values
    In { field: String, values: Vec<Value> },
    /// field not in values
    NotIn { field: String, values: Vec<Value> },
    /// field matches pattern. Stores the compiled pattern; only its
    /// source string is serialized into the filter document.
    Regex { field: String, pattern: Regex },
    /// Conjunction of sub-expressions
    And(Vec<Expression>),
    /// Disjunction of sub-expressions
    Or(Vec<Expression>),
    /// Array-element matching (untranslatable here)
    ElemMatch { field: String, expressions: Vec<Expression> },
}

impl Expression {
    /// Create an equality expression
    pub fn equal(field: impl Into<String>, value: Value) -> Self {
        Expression::Equal {
            field: field.into(),
            value,
        }
    }

    /// Create an inequality expression
    pub fn not_equal(field: impl Into<String>, value: Value) -> Self {
        Expression::NotEqual {
            field: field.into(),
            value,
        }
    }

    /// Create a strict greater-than expression
    pub fn greater_than(field: impl Into<String>, value: Value) -> Self {
        Expression::GreaterThan {
            field: field.into(),
            value,
        }
    }

    /// Create a greater-or-equal expression
    pub fn greater_or_equal(field: impl Into<String>, value: Value) -> Self {
        Expression::GreaterOrEqual {
            field: field.into(),
            value,
        }
    }

    /// Create a strict lower-than expression
    pub fn lower_than(field: impl Into<String>, value: Value) -> Self {
        Expression::LowerThan {
            field: field.into(),
            value,
        }
    }

    /// Create a lower-or-equal expression
    pub fn lower_or_equal(field: impl Into<String>, value: Value) -> Self {
        Expression::LowerOrEqual {
            field: field.into(),
            value,
        }
    }

    /// Create a set-membership expression
    pub fn in_list(field: impl Into<String>, values: Vec<Value>) -> Self {
        Expression::In {
            field: field.into(),
            values,
        }
    }

    /// Create a negated set-membership expression
    pub fn not_in(field: impl Into<String>, values: Vec<Value>) -> Self {
        Expression::NotIn {
            field: field.into(),
            values,
        }
    }

    /// Create a pattern-match expression from a compiled pattern
    pub fn regex(field: impl Into<String>, pattern: Regex) -> Self {
        Expression::Regex {
            field: field.into(),
            pattern,
        }
    }

    /// Create a conjunction
    pub fn and(expressions: Vec<Expression>) -> Self {
        Expression::And(expressions)
    }

    /// Create a disjunction
    pub fn or(expressions: Vec<Expression>) -> Self {
        Expression::Or(expressions)
    }

    /// Create an array-element match
    pub fn elem_match(field: impl Into<String>, expressions: Vec<Expression>) -> Self {
        Expression::ElemMatch {
            field: field.into(),
            expressions,
        }
    }
}

/// Implicit top-level conjunction of expressions
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Predicates, all combined with AND
    pub predicates: Vec<Expression>,
}

impl Query {
    /// Creates an empty query (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a predicate
    pub fn with_predicate(mut self, predicate: Expression) -> Self {
        self.predicates.push(predicate);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_builder() {
        let query = Query::new()
            .with_predicate(Expression::equal("name", json!("alice")))
            .with_predicate(Expression::greater_than("age", json!(18)));
        assert_eq!(query.predicates.len(), 2);
    }

    #[test]
    fn test_constructor_shapes() {
        match Expression::in_list("tags", vec![json!("a"), json!("b")]) {
            Expression::In { field, values } => {
                assert_eq!(field, "tags");
                assert_eq!(values.len(), 2);
            }
            other => panic!("unexpected expression: {other:?}"),
        }
    }

    #[test]
    fn test_regex_keeps_pattern_source() {
        let pattern = Regex::new("^a+$").unwrap();
        match Expression::regex("f", pattern) {
            Expression::Regex { pattern, .. } => assert_eq!(pattern.as_str(), "^a+$"),
            other => panic!("unexpected expression: {other:?}"),
        }
    }
}
