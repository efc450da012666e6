//! Boundary validation of dynamic params.
//!
//! Params arrive as `serde_json::Value`s. They are checked all at once,
//! accumulating every non-numeric entry, before any operation runs.

use super::number::Number;
use crate::error::ParamViolation;
use serde_json::Value;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Validate that every param is numeric, converting them to [`Number`]s.
///
/// Booleans are not numbers. JSON integers outside the `i64` range
/// are accepted as floats and lose precision beyond 2^53.
///
/// # Example
///
/// ```rust
/// use calcstate::core::validate_params;
/// use serde_json::json;
///
/// let ok = validate_params(&[json!(1), json!(2.5)]);
/// assert!(ok.is_success());
///
/// let bad = validate_params(&[json!(1), json!("x"), json!(true)]);
/// assert!(bad.is_failure());
/// ```
pub fn validate_params(params: &[Value]) -> Validation<Vec<Number>, NonEmptyVec<ParamViolation>> {
    let checks: Vec<_> = params
        .iter()
        .enumerate()
        .map(|(index, value)| validate_param(index, value))
        .collect();

    Validation::all_vec(checks)
}

fn validate_param(index: usize, value: &Value) -> Validation<Number, NonEmptyVec<ParamViolation>> {
    match as_number(value) {
        Some(number) => Validation::success(number),
        None => Validation::fail(ParamViolation {
            index,
            found: value_kind(value).to_string(),
        }),
    }
}

fn as_number(value: &Value) -> Option<Number> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_i64()
        .map(Number::Int)
        .or_else(|| n.as_f64().map(Number::Float))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
