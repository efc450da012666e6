//! Core calculator types.
//!
//! This module contains the calculator state and everything it is built from:
//! - `Number`, the tagged numeric value
//! - `Operation` and `OperationSet`, the pluggable functions
//! - `History`, the append-only execution log
//! - `Calculator`, which owns operations and history

mod calculator;
mod history;
mod number;
mod operation;
mod params;

pub use calculator::Calculator;
pub use history::{History, HistoryEntry, TIMESTAMP_FORMAT};
pub use number::Number;
pub use operation::{Operation, OperationSet};
pub use params::validate_params;
