//! Property-based tests for calculator execution and history.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use calcstate::api::*;
use calcstate::core::Number;
use calcstate::{ops, CalculatorError};
use proptest::prelude::*;
use serde_json::{json, Value};

prop_compose! {
    fn numeric_param()(int in -1_000_000i64..1_000_000, float in -1e6f64..1e6, pick in any::<bool>()) -> Value {
        if pick { json!(int) } else { json!(float) }
    }
}

prop_compose! {
    fn non_numeric_param()(variant in 0..5u8, text in "[a-z]{0,8}") -> Value {
        match variant {
            0 => json!(text),
            1 => Value::Null,
            2 => json!(true),
            3 => json!([1, 2]),
            _ => json!({ "value": 1 }),
        }
    }
}

fn expected_sum(params: &[Value]) -> Number {
    params
        .iter()
        .map(|v| match v.as_i64() {
            Some(i) => Number::Int(i),
            None => Number::Float(v.as_f64().unwrap()),
        })
        .fold(Number::Int(0), |acc, n| acc + n)
}

proptest! {
    #[test]
    fn perform_returns_function_result_and_records_once(
        params in prop::collection::vec(numeric_param(), 0..8)
    ) {
        let mut calc = create_new_calculator(Some(ops::standard()));

        let result = perform_operation(&mut calc, "add", &params).unwrap();

        prop_assert_eq!(result, expected_sum(&params));
        prop_assert_eq!(get_history(&calc).len(), 1);
        prop_assert_eq!(get_history(&calc)[0].result(), result);
        prop_assert_eq!(get_history(&calc)[0].params().len(), params.len());
    }

    #[test]
    fn non_numeric_param_is_rejected_without_side_effects(
        mut params in prop::collection::vec(numeric_param(), 0..6),
        bad in non_numeric_param(),
        position in any::<prop::sample::Index>()
    ) {
        let mut calc = create_new_calculator(Some(ops::standard()));
        let index = position.index(params.len() + 1);
        params.insert(index, bad);

        let err = perform_operation(&mut calc, "add", &params).unwrap_err();

        match err {
            CalculatorError::InvalidParams { violations } => {
                prop_assert_eq!(violations.len(), 1);
                prop_assert_eq!(violations[0].index, index);
            }
            other => prop_assert!(false, "unexpected error: {other}"),
        }
        prop_assert!(get_history(&calc).is_empty());
    }

    #[test]
    fn unregistered_name_is_rejected(name in "[a-z_]{1,12}") {
        prop_assume!(!ops::standard().contains(&name));
        let mut calc = create_new_calculator(Some(ops::standard()));

        let err = perform_operation(&mut calc, &name, &[json!(1)]).unwrap_err();

        prop_assert!(err.is_invalid_operation());
        prop_assert!(get_history(&calc).is_empty());
    }

    #[test]
    fn repeat_returns_most_recent_result(
        calls in prop::collection::vec(prop::collection::vec(numeric_param(), 1..4), 1..10)
    ) {
        let mut calc = create_new_calculator(Some(ops::standard()));
        let mut last = None;

        for params in &calls {
            last = Some(perform_operation(&mut calc, "multiply", params).unwrap());
        }

        prop_assert_eq!(get_history(&calc).len(), calls.len());
        prop_assert_eq!(repeat_last_operation(&calc), last);
    }

    #[test]
    fn reset_always_empties_history(
        calls in prop::collection::vec(prop::collection::vec(numeric_param(), 0..4), 0..6)
    ) {
        let mut calc = create_new_calculator(Some(ops::standard()));
        for params in &calls {
            perform_operation(&mut calc, "add", params).unwrap();
        }

        reset_history(&mut calc);

        prop_assert!(get_history(&calc).is_empty());
        prop_assert_eq!(repeat_last_operation(&calc), None);
        prop_assert_eq!(get_operations(&calc).len(), 5);
    }
}
