//! # Validator Errors
//!
//! Error type shared by all field validators. Display strings are the
//! user-facing messages embedded verbatim into selector validation errors.

use thiserror::Error;

/// Value validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidatorError {
    /// Value is not an integral number
    #[error("not an integer")]
    NotAnInteger,

    /// Value is not a number
    #[error("not a float")]
    NotAFloat,

    /// Value is not a string
    #[error("not a string")]
    NotAString,

    /// Value is not a boolean
    #[error("not a Boolean")]
    NotABoolean,

    /// Value is not an RFC 3339 timestamp
    #[error("not a time")]
    NotATime,

    /// Value is below the configured minimum
    #[error("is lower than {0:.0}")]
    LowerThan(f64),

    /// Value is above the configured maximum
    #[error("is greater than {0:.0}")]
    GreaterThan(f64),

    /// Value is absent from the configured allow-list
    #[error("not one of the allowed values")]
    NotAllowed,

    /// String is below the configured minimum length
    #[error("is shorter than {0}")]
    ShorterThan(usize),

    /// String is above the configured maximum length
    #[error("is longer than {0}")]
    LongerThan(usize),

    /// String does not match the configured pattern
    #[error("does not match {0}")]
    NoMatch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_messages_have_no_decimals() {
        assert_eq!(ValidatorError::LowerThan(10.0).to_string(), "is lower than 10");
        assert_eq!(ValidatorError::GreaterThan(100.0).to_string(), "is greater than 100");
    }

    #[test]
    fn test_type_messages() {
        assert_eq!(ValidatorError::NotAnInteger.to_string(), "not an integer");
        assert_eq!(ValidatorError::NotABoolean.to_string(), "not a Boolean");
        assert_eq!(ValidatorError::NotATime.to_string(), "not a time");
    }
}
