//! Field value validators
//!
//! Capability trait plus the provided validator kinds. Each validator
//! checks a dynamically-typed value and returns its normalized form
//! (e.g. a zero-fraction float becomes an integer, a timestamp is
//! re-rendered canonically).

use std::fmt;

use chrono::DateTime;
use regex::Regex;
use serde_json::{json, Value};

use super::errors::ValidatorError;

/// Capability trait for value validation.
///
/// Implementations must not mutate their input; normalization produces a
/// new value. Validation is deterministic.
pub trait FieldValidator: fmt::Debug + Send + Sync {
    /// Validates and normalizes a value
    fn validate(&self, value: &Value) -> Result<Value, ValidatorError>;
}

/// Inclusive numeric bounds for `Integer` and `Float`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl Boundaries {
    /// Create bounds. Requires `min <= max`.
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(min <= max, "boundaries require min <= max");
        Self { min, max }
    }

    fn check(&self, value: f64) -> Result<(), ValidatorError> {
        if value < self.min {
            return Err(ValidatorError::LowerThan(self.min));
        }
        if value > self.max {
            return Err(ValidatorError::GreaterThan(self.max));
        }
        Ok(())
    }
}

/// Validates integer based values.
///
/// JSON deserialization may surface integral numbers as floats; a float
/// with zero fraction is coerced to an integer before the checks run.
#[derive(Debug, Clone, Default)]
pub struct Integer {
    /// Allow-list; empty means any integer
    pub allowed: Vec<i64>,
    /// Optional inclusive bounds
    pub boundaries: Option<Boundaries>,
}

impl FieldValidator for Integer {
    fn validate(&self, value: &Value) -> Result<Value, ValidatorError> {
        let i = if let Some(i) = value.as_i64() {
            i
        } else if let Some(f) = value.as_f64() {
            if f.fract() != 0.0 {
                return Err(ValidatorError::NotAnInteger);
            }
            f as i64
        } else {
            return Err(ValidatorError::NotAnInteger);
        };
        if let Some(boundaries) = &self.boundaries {
            boundaries.check(i as f64)?;
        }
        if !self.allowed.is_empty() && !self.allowed.contains(&i) {
            return Err(ValidatorError::NotAllowed);
        }
        Ok(json!(i))
    }
}

/// Validates float based values
#[derive(Debug, Clone, Default)]
pub struct Float {
    /// Allow-list; empty means any number
    pub allowed: Vec<f64>,
    /// Optional inclusive bounds
    pub boundaries: Option<Boundaries>,
}

impl FieldValidator for Float {
    fn validate(&self, value: &Value) -> Result<Value, ValidatorError> {
        let f = value.as_f64().ok_or(ValidatorError::NotAFloat)?;
        if let Some(boundaries) = &self.boundaries {
            boundaries.check(f)?;
        }
        if !self.allowed.is_empty() && !self.allowed.contains(&f) {
            return Err(ValidatorError::NotAllowed);
        }
        Ok(json!(f))
    }
}

/// Validates string based values
#[derive(Debug, Clone, Default)]
pub struct Text {
    /// Allow-list; empty means any string
    pub allowed: Vec<String>,
    /// Minimum length in characters
    pub min_len: Option<usize>,
    /// Maximum length in characters
    pub max_len: Option<usize>,
    /// Optional pattern the whole value must match
    pub pattern: Option<Regex>,
}

impl FieldValidator for Text {
    fn validate(&self, value: &Value) -> Result<Value, ValidatorError> {
        let s = value.as_str().ok_or(ValidatorError::NotAString)?;
        let len = s.chars().count();
        if let Some(min) = self.min_len {
            if len < min {
                return Err(ValidatorError::ShorterThan(min));
            }
        }
        if let Some(max) = self.max_len {
            if len > max {
                return Err(ValidatorError::LongerThan(max));
            }
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(s) {
                return Err(ValidatorError::NoMatch(pattern.as_str().to_string()));
            }
        }
        if !self.allowed.is_empty() && !self.allowed.iter().any(|a| a == s) {
            return Err(ValidatorError::NotAllowed);
        }
        Ok(Value::String(s.to_string()))
    }
}

/// Validates boolean values
#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

impl FieldValidator for Boolean {
    fn validate(&self, value: &Value) -> Result<Value, ValidatorError> {
        let b = value.as_bool().ok_or(ValidatorError::NotABoolean)?;
        Ok(Value::Bool(b))
    }
}

/// Validates RFC 3339 timestamps, normalizing to the canonical rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct Time;

impl FieldValidator for Time {
    fn validate(&self, value: &Value) -> Result<Value, ValidatorError> {
        let s = value.as_str().ok_or(ValidatorError::NotATime)?;
        let t = DateTime::parse_from_rfc3339(s).map_err(|_| ValidatorError::NotATime)?;
        Ok(Value::String(t.to_rfc3339()))
    }
}
