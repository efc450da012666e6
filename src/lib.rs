//! Calcstate: an in-memory calculator with pluggable operations
//!
//! A [`Calculator`](core::Calculator) is a plain owned value holding a mapping
//! of named operations and an append-only history of their executions.
//! There is no hidden global state; every call takes the calculator explicitly.
//!
//! # Core Concepts
//!
//! - **Number**: Tagged numeric value, integer or float
//! - **Operation**: A function from any number of params to one result
//! - **History**: Immutable records of executed operations, oldest first
//! - **Repeat**: Replays the last stored result without re-executing
//!
//! # Example
//!
//! ```rust
//! use calcstate::api::*;
//! use calcstate::core::{Number, Operation, OperationSet};
//! use serde_json::json;
//!
//! let mut calc = create_new_calculator(None);
//! add_new_operation(
//!     &mut calc,
//!     OperationSet::new().with("add", Operation::new(|p: &[Number]| p[0] + p[1])),
//! )
//! .unwrap();
//!
//! let result = perform_operation(&mut calc, "add", &[json!(2), json!(3)]).unwrap();
//! assert_eq!(result, Number::Int(5));
//! assert_eq!(get_history(&calc).len(), 1);
//! assert_eq!(repeat_last_operation(&calc), Some(Number::Int(5)));
//!
//! let err = perform_operation(&mut calc, "add", &[json!(2), json!("x")]);
//! assert!(err.is_err());
//! assert_eq!(get_history(&calc).len(), 1);
//! ```

pub mod api;
pub mod builder;
pub mod core;
pub mod error;
pub mod ops;

// Re-export commonly used types
pub use crate::builder::CalculatorBuilder;
pub use crate::core::{Calculator, History, HistoryEntry, Number, Operation, OperationSet};
pub use crate::error::{CalculatorError, InvalidOperation, ParamViolation};
