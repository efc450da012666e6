//! Builder API for configuring calculators.
//!
//! This module provides a fluent builder and the `operations!` macro for
//! assembling operation sets with minimal boilerplate.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::{Calculator, Number, Operation, OperationSet};
use crate::ops;

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```
/// use calcstate::builder::CalculatorBuilder;
/// use calcstate::core::Number;
///
/// let calc = CalculatorBuilder::new()
///     .standard_operations()
///     .function("double", |p: &[Number]| p[0] * Number::Int(2))
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.operation_names().len(), 6);
/// ```
#[derive(Default)]
pub struct CalculatorBuilder {
    operations: Vec<(String, Operation)>,
}

impl CalculatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation.
    pub fn operation(mut self, name: impl Into<String>, operation: Operation) -> Self {
        self.operations.push((name.into(), operation));
        self
    }

    /// Add an infallible function as an operation.
    pub fn function<F>(self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Number]) -> Number + Send + Sync + 'static,
    {
        self.operation(name, Operation::new(func))
    }

    /// Add a fallible function as an operation.
    pub fn fallible<F>(self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Number]) -> Result<Number, String> + Send + Sync + 'static,
    {
        self.operation(name, Operation::fallible(func))
    }

    /// Add every operation from an existing set.
    pub fn operations(mut self, operations: OperationSet) -> Self {
        self.operations.extend(
            operations
                .iter()
                .map(|(name, op)| (name.to_string(), op.clone())),
        );
        self
    }

    /// Add the standard arithmetic operations.
    pub fn standard_operations(self) -> Self {
        self.operations(ops::standard())
    }

    /// Build the calculator.
    /// Returns an error if a name is empty or used more than once.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let mut set = OperationSet::new();
        for (name, operation) in self.operations {
            if name.is_empty() {
                return Err(BuildError::EmptyName);
            }
            if set.contains(&name) {
                return Err(BuildError::DuplicateOperation { name });
            }
            set.insert(name, operation);
        }

        tracing::debug!("[calculator] built with operations {:?}", set.names());
        Ok(Calculator::with_operations(set))
    }
}
