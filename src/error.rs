//! Errors returned by calculator operations.

use thiserror::Error;

/// Errors that can occur when registering or performing operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalculatorError {
    #[error("Given params are invalid: {}", describe_violations(.violations))]
    InvalidParams { violations: Vec<ParamViolation> },

    #[error("Given operation is invalid: {0}")]
    InvalidOperation(#[from] InvalidOperation),

    #[error("Operation '{operation}' failed: {message}")]
    OperationFailed { operation: String, message: String },
}

/// Why an operation name or registration was rejected.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidOperation {
    #[error("no operation named '{0}' is registered")]
    Unknown(String),

    #[error("expected a mapping of operation names to operations, found `{0}`")]
    NotAMapping(String),
}

/// A single param that is not a numeric value.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("param {index} is not numeric (found {found})")]
pub struct ParamViolation {
    /// Position of the param in the call
    pub index: usize,
    /// Kind of value that was supplied instead
    pub found: String,
}

impl CalculatorError {
    pub fn is_invalid_params(&self) -> bool {
        matches!(self, Self::InvalidParams { .. })
    }

    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }
}

fn describe_violations(violations: &[ParamViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
