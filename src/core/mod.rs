// src/core/mod.rs

pub mod arith_integer;
pub mod error;
pub mod operation;

pub use arith_integer::ArithInteger;
pub use error::{ArithmeticError, Result};
pub use operation::{Operation, OperationKind, Outcome};
