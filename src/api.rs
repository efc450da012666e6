//! Free-function interface over [`Calculator`].
//!
//! Each function takes the calculator explicitly. `add_new_operation` is the
//! dynamic registration boundary: it accepts any value and rejects anything
//! that is not a mapping of names to operations.

use crate::core::{Calculator, HistoryEntry, Number, Operation, OperationSet};
use crate::error::{CalculatorError, InvalidOperation};
use indexmap::IndexMap;
use serde_json::Value;
use std::any::{type_name, Any};
use std::collections::{BTreeMap, HashMap};

/// Create a calculator, optionally pre-loaded with `operations`.
pub fn create_new_calculator(operations: Option<OperationSet>) -> Calculator {
    operations
        .map(Calculator::with_operations)
        .unwrap_or_default()
}

/// Execute `operation` with `params`, recording it in the history.
///
/// # Example
///
/// ```rust
/// use calcstate::api::{add_new_operation, create_new_calculator, perform_operation};
/// use calcstate::core::{Number, Operation, OperationSet};
/// use serde_json::json;
///
/// let mut calc = create_new_calculator(None);
/// add_new_operation(
///     &mut calc,
///     OperationSet::new().with("add", Operation::new(|p: &[Number]| p[0] + p[1])),
/// )
/// .unwrap();
///
/// assert_eq!(perform_operation(&mut calc, "add", &[json!(2), json!(3)]), Ok(Number::Int(5)));
/// assert!(perform_operation(&mut calc, "add", &[json!(2), json!("x")]).is_err());
/// ```
pub fn perform_operation(
    calc: &mut Calculator,
    operation: &str,
    params: &[Value],
) -> Result<Number, CalculatorError> {
    calc.perform(operation, params)
}

/// Replace the calculator's operations with the supplied mapping.
///
/// Accepts an [`OperationSet`] or an `IndexMap`, `HashMap` or `BTreeMap`
/// keyed by `String` or `&'static str` with [`Operation`] values. Any other
/// value fails with [`InvalidOperation::NotAMapping`] and leaves `calc`
/// unchanged.
///
/// The existing operations are replaced, not merged. Use
/// [`Calculator::register`] to add a single operation.
pub fn add_new_operation<T: Any>(calc: &mut Calculator, operation: T) -> Result<(), CalculatorError> {
    let operations = into_operation_set(operation).inspect_err(|err| {
        tracing::warn!("[calculator] registration rejected: {err}");
    })?;
    calc.replace_operations(operations);
    Ok(())
}

/// Names of the registered operations.
pub fn get_operations(calc: &Calculator) -> Vec<String> {
    calc.operation_names()
}

/// History since creation or the last reset, oldest first.
pub fn get_history(calc: &Calculator) -> &[HistoryEntry] {
    calc.history().entries()
}

pub fn reset_history(calc: &mut Calculator) {
    calc.reset_history();
}

/// Result of the last executed operation, or `None` if the history is empty.
pub fn repeat_last_operation(calc: &Calculator) -> Option<Number> {
    calc.repeat_last_operation()
}

fn into_operation_set<T: Any>(operation: T) -> Result<OperationSet, InvalidOperation> {
    let boxed: Box<dyn Any> = Box::new(operation);

    downcast_map::<OperationSet>(boxed)
        .or_else(downcast_map::<IndexMap<String, Operation>>)
        .or_else(downcast_map::<IndexMap<&'static str, Operation>>)
        .or_else(downcast_map::<HashMap<String, Operation>>)
        .or_else(downcast_map::<HashMap<&'static str, Operation>>)
        .or_else(downcast_map::<BTreeMap<String, Operation>>)
        .or_else(downcast_map::<BTreeMap<&'static str, Operation>>)
        .map_err(|_| InvalidOperation::NotAMapping(type_name::<T>().to_string()))
}

fn downcast_map<M>(boxed: Box<dyn Any>) -> Result<OperationSet, Box<dyn Any>>
where
    M: Any + Into<OperationSet>,
{
    boxed.downcast::<M>().map(|map| (*map).into())
}
