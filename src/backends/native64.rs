// src/backends/native64.rs

use crate::core::arith_integer::ArithInteger;

/// Native i64 backend
///
/// For callers whose operands exceed 32 bits. Quotients are computed in f64,
/// so operands beyond 2^53 lose precision before dividing.
pub type Native64 = i64;

impl ArithInteger for i64 {
    fn as_f64(self) -> f64 {
        self as f64
    }

    fn backend_name() -> &'static str {
        "Native64"
    }
}
