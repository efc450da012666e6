//! Basic Calculator
//!
//! This example walks through the calculator lifecycle.
//!
//! Key concepts:
//! - Registering operations (replace semantics)
//! - Performing operations with validated params
//! - Reading and resetting history
//! - Repeating the last stored result
//!
//! Run with: cargo run --example basic_calculator
//! Set RUST_LOG=calcstate=debug to see the library's log output.

use calcstate::api::*;
use calcstate::core::Number;
use calcstate::{ops, CalculatorBuilder};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Basic Calculator Example ===\n");

    let mut calc = create_new_calculator(None);
    add_new_operation(&mut calc, ops::standard()).unwrap();
    println!("Operations: {:?}", get_operations(&calc));

    let sum = perform_operation(&mut calc, "add", &[json!(1), json!(2), json!(3), json!(4.5), json!(-2)]).unwrap();
    println!("add(1, 2, 3, 4.5, -2) = {sum}");

    let quotient = perform_operation(&mut calc, "divide", &[json!(7), json!(2)]).unwrap();
    println!("divide(7, 2) = {quotient}");

    match perform_operation(&mut calc, "add", &[json!(2), json!("x")]) {
        Ok(value) => println!("unexpected success: {value}"),
        Err(err) => println!("add(2, \"x\") rejected: {err}"),
    }

    println!("\nHistory:");
    for entry in get_history(&calc) {
        println!(
            "  ({}, {}, {:?}, {})",
            entry.timestamp(),
            entry.operation(),
            entry.params(),
            entry.result()
        );
    }

    println!("\nRepeat last: {:?}", repeat_last_operation(&calc));
    reset_history(&mut calc);
    println!("After reset: {:?}", repeat_last_operation(&calc));

    println!("\n=== Builder ===\n");
    let mut custom = CalculatorBuilder::new()
        .function("square", |p: &[Number]| p[0] * p[0])
        .build()
        .unwrap();
    let squared = custom.perform("square", &[json!(12)]).unwrap();
    println!("square(12) = {squared}");

    println!("\n=== Example Complete ===");
}
