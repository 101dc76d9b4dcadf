// src/core/error.rs

use crate::core::operation::OperationKind;

/// Error type for arithmetic operations
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Only produced by the checked operations
    #[error("integer overflow in {operation}")]
    Overflow { operation: OperationKind },
}

pub type Result<T> = std::result::Result<T, ArithmeticError>;
