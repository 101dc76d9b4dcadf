// src/core/operation.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six operations of the arithmetic service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Square,
    Abs,
}

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
        OperationKind::Square,
        OperationKind::Abs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Subtract => "subtract",
            OperationKind::Multiply => "multiply",
            OperationKind::Divide => "divide",
            OperationKind::Square => "square",
            OperationKind::Abs => "abs",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single call with its operands, as recorded by a test harness
///
/// Serialized with an `op` tag, e.g. `{"op":"divide","a":5,"b":2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation<T> {
    Add { a: T, b: T },
    Subtract { a: T, b: T },
    Multiply { a: T, b: T },
    Divide { a: T, b: T },
    Square { n: T },
    Abs { n: T },
}

impl<T> Operation<T> {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Add { .. } => OperationKind::Add,
            Operation::Subtract { .. } => OperationKind::Subtract,
            Operation::Multiply { .. } => OperationKind::Multiply,
            Operation::Divide { .. } => OperationKind::Divide,
            Operation::Square { .. } => OperationKind::Square,
            Operation::Abs { .. } => OperationKind::Abs,
        }
    }
}

/// Result of evaluating an [`Operation`]
///
/// Division is the only operation producing a `Quotient`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Integer(T),
    Quotient(f64),
}

impl<T: Copy> Outcome<T> {
    pub fn integer(&self) -> Option<T> {
        match self {
            Outcome::Integer(value) => Some(*value),
            Outcome::Quotient(_) => None,
        }
    }

    pub fn quotient(&self) -> Option<f64> {
        match self {
            Outcome::Integer(_) => None,
            Outcome::Quotient(value) => Some(*value),
        }
    }
}
