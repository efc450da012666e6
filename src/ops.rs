//! Standard arithmetic operations.
//!
//! `standard()` bundles them under the names `add`, `subtract`, `multiply`,
//! `divide` and `square_root`.

use crate::core::{Number, Operation, OperationSet};

/// The standard operation set, in registration order.
///
/// # Example
///
/// ```rust
/// use calcstate::core::{Calculator, Number};
/// use calcstate::ops;
/// use serde_json::json;
///
/// let mut calc = Calculator::with_operations(ops::standard());
/// assert_eq!(calc.perform("divide", &[json!(7), json!(2)]), Ok(Number::Float(3.5)));
/// assert!(calc.perform("divide", &[json!(1), json!(0)]).is_err());
/// ```
pub fn standard() -> OperationSet {
    OperationSet::new()
        .with("add", add())
        .with("subtract", subtract())
        .with("multiply", multiply())
        .with("divide", divide())
        .with("square_root", square_root())
}

/// Sum of all params; `0` for none.
pub fn add() -> Operation {
    Operation::new(|params: &[Number]| params.iter().fold(Number::Int(0), |acc, &n| acc + n))
}

/// First param minus each of the rest.
pub fn subtract() -> Operation {
    Operation::fallible(|params: &[Number]| {
        let (&first, rest) = split_first(params, "subtract")?;
        Ok(rest.iter().fold(first, |acc, &n| acc - n))
    })
}

/// Product of all params; `1` for none.
pub fn multiply() -> Operation {
    Operation::new(|params: &[Number]| params.iter().fold(Number::Int(1), |acc, &n| acc * n))
}

/// First param divided by each of the rest. Always a float.
pub fn divide() -> Operation {
    Operation::fallible(|params: &[Number]| {
        let (&first, rest) = split_first(params, "divide")?;
        rest.iter().try_fold(Number::Float(first.as_f64()), |acc, &n| {
            acc.checked_div(n)
                .ok_or_else(|| "division by zero".to_string())
        })
    })
}

/// Square root of exactly one non-negative param.
pub fn square_root() -> Operation {
    Operation::fallible(|params: &[Number]| match params {
        [value] => value
            .sqrt()
            .ok_or_else(|| format!("cannot take the square root of {value}")),
        _ => Err(format!(
            "square_root takes exactly 1 param, got {}",
            params.len()
        )),
    })
}

fn split_first<'a>(params: &'a [Number], name: &str) -> Result<(&'a Number, &'a [Number]), String> {
    params
        .split_first()
        .ok_or_else(|| format!("{name} needs at least 1 param"))
}
