//! Build errors for the calculator builder.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Operation name must not be empty")]
    EmptyName,

    #[error("Operation '{name}' registered twice. Use distinct names")]
    DuplicateOperation { name: String },
}
