//! The calculator state manager.

use super::history::{History, HistoryEntry};
use super::number::Number;
use super::operation::{Operation, OperationSet};
use super::params::validate_params;
use crate::error::{CalculatorError, InvalidOperation};
use serde_json::Value;
use stillwater::validation::Validation;

/// A set of named operations plus the history of their executions.
///
/// The calculator is an ordinary owned value. Execution and registration take
/// `&mut self`; queries take `&self`.
///
/// # Example
///
/// ```rust
/// use calcstate::core::{Calculator, Number, Operation, OperationSet};
/// use serde_json::json;
///
/// let mut calc = Calculator::new();
/// calc.replace_operations(OperationSet::new().with(
///     "add",
///     Operation::new(|p: &[Number]| p[0] + p[1]),
/// ));
///
/// let result = calc.perform("add", &[json!(2), json!(3)]).unwrap();
/// assert_eq!(result, Number::Int(5));
/// assert_eq!(calc.history().len(), 1);
/// assert_eq!(calc.repeat_last_operation(), Some(Number::Int(5)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    operations: OperationSet,
    history: History,
}

impl Calculator {
    /// Create a calculator with no operations and an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator pre-seeded with `operations`.
    pub fn with_operations(operations: OperationSet) -> Self {
        Self {
            operations,
            history: History::new(),
        }
    }

    pub fn operations(&self) -> &OperationSet {
        &self.operations
    }

    /// Names of the registered operations, in registration order.
    pub fn operation_names(&self) -> Vec<String> {
        self.operations.names()
    }

    /// Replace the whole operations mapping with `operations`.
    ///
    /// Previously registered operations are dropped, not merged. History is
    /// kept, including entries for operations that are no longer registered.
    pub fn replace_operations(&mut self, operations: OperationSet) {
        tracing::info!(
            "[calculator] operations replaced: {} -> {:?}",
            self.operations.len(),
            operations.names()
        );
        self.operations = operations;
    }

    /// Add a single operation alongside the existing ones.
    ///
    /// Returns the operation previously registered under `name`, if any.
    pub fn register(&mut self, name: impl Into<String>, operation: Operation) -> Option<Operation> {
        let name = name.into();
        tracing::debug!("[calculator] registered '{name}'");
        self.operations.insert(name, operation)
    }

    /// Validate dynamic params, then execute the named operation.
    ///
    /// Params are checked before the name is looked up. Every non-numeric
    /// param is reported in the returned [`CalculatorError::InvalidParams`].
    pub fn perform(&mut self, operation: &str, params: &[Value]) -> Result<Number, CalculatorError> {
        let numbers = match validate_params(params) {
            Validation::Success(numbers) => numbers,
            Validation::Failure(violations) => {
                tracing::debug!(
                    "[calculator] rejected params for '{operation}': {} invalid",
                    violations.len()
                );
                return Err(CalculatorError::InvalidParams {
                    violations: violations.iter().cloned().collect(),
                });
            }
        };

        self.execute(operation, numbers)
    }

    /// Execute the named operation with already-typed params.
    ///
    /// The function runs exactly once. Its result is both appended to the
    /// history and returned. Nothing is recorded on failure.
    pub fn execute(&mut self, operation: &str, params: Vec<Number>) -> Result<Number, CalculatorError> {
        let func = self
            .operations
            .get(operation)
            .ok_or_else(|| InvalidOperation::Unknown(operation.to_string()))?;

        let result = func
            .call(&params)
            .map_err(|message| CalculatorError::OperationFailed {
                operation: operation.to_string(),
                message,
            })?;

        tracing::debug!("[calculator] performed '{operation}' with {params:?} -> {result}");
        self.history
            .record(HistoryEntry::now(operation, params, result));

        Ok(result)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Clear the history. Operations are untouched.
    pub fn reset_history(&mut self) {
        tracing::debug!(
            "[calculator] history reset ({} entries dropped)",
            self.history.len()
        );
        self.history.clear();
    }

    /// Stored result of the most recent execution, without re-running it.
    pub fn repeat_last_operation(&self) -> Option<Number> {
        self.history.last_result()
    }
}
