// src/lib.rs

//! Integer arithmetic helpers: add, subtract, multiply, divide, square and
//! absolute value over fixed-width signed integers.
//!
//! ```
//! use arith::{ArithmeticService, ArithmeticError};
//!
//! let calc = ArithmeticService::<i32>::new();
//! assert_eq!(calc.add(2, 3), 5);
//! assert_eq!(calc.divide(5, 2), Ok(2.5));
//! assert_eq!(calc.divide(5, 0), Err(ArithmeticError::DivisionByZero));
//! ```

pub mod backends;
pub mod config;
pub mod core;
pub mod logging;
pub mod service;

pub use crate::config::{ArithConfig, OverflowPolicy};
pub use crate::core::{ArithInteger, ArithmeticError, Operation, OperationKind, Outcome, Result};
pub use crate::service::ArithmeticService;
