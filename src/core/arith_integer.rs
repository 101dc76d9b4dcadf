// src/core/arith_integer.rs

use num::traits::{WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};
use num::{PrimInt, Signed};
use std::fmt::{Debug, Display};

/// Core trait for fixed-width integer arithmetic
///
/// This trait abstracts over the native signed integer widths the
/// arithmetic service can run on. Plain arithmetic wraps in two's complement,
/// checked arithmetic reports overflow as `None`.
///
/// Implementations:
/// - Native32: i32, the default width
/// - Native64: i64 for callers that need the wider range
pub trait ArithInteger:
    PrimInt +
    Signed +
    WrappingAdd +
    WrappingSub +
    WrappingMul +
    WrappingNeg +
    Debug +
    Display +
    Send +
    Sync +
    'static
{
    /// Convert to f64 the way a numeric cast does (rounding to nearest for
    /// values beyond 2^53)
    fn as_f64(self) -> f64;

    /// Name of this backend, used in log output
    fn backend_name() -> &'static str;

    /// Absolute value, wrapping at the minimum value
    fn wrapping_abs_value(self) -> Self {
        if self < Self::zero() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    /// Absolute value, `None` for the minimum value
    fn checked_abs_value(self) -> Option<Self> {
        if self < Self::zero() {
            Self::zero().checked_sub(&self)
        } else {
            Some(self)
        }
    }
}
