// src/backends/native32.rs

use crate::core::arith_integer::ArithInteger;

/// Native i32 backend
///
/// The default width. Results wrap at `i32::MIN..=i32::MAX`.
pub type Native32 = i32;

impl ArithInteger for i32 {
    fn as_f64(self) -> f64 {
        f64::from(self)
    }

    fn backend_name() -> &'static str {
        "Native32"
    }
}
