// src/service/arithmetic_service.rs

use log::{debug, trace};
use std::marker::PhantomData;

use crate::config::{ArithConfig, OverflowPolicy};
use crate::core::arith_integer::ArithInteger;
use crate::core::error::{ArithmeticError, Result};
use crate::core::operation::{Operation, OperationKind, Outcome};

/// Stateless arithmetic over one integer backend.
///
/// The six plain operations wrap on overflow and only `divide` can fail.
/// The `checked_*` operations report overflow instead. The overflow policy
/// picks between the two for [`ArithmeticService::evaluate`].
///
/// The service holds no mutable state, so a single value can be shared
/// freely between threads.
pub struct ArithmeticService<T: ArithInteger = i32> {
    policy: OverflowPolicy,
    _backend: PhantomData<fn() -> T>,
}

impl<T: ArithInteger> ArithmeticService<T> {
    /// Create a service with wrapping overflow.
    pub fn new() -> Self {
        Self::with_policy(OverflowPolicy::Wrapping)
    }

    pub fn with_policy(policy: OverflowPolicy) -> Self {
        debug!("arithmetic service on {} with {:?} overflow", T::backend_name(), policy);
        ArithmeticService {
            policy,
            _backend: PhantomData,
        }
    }

    pub fn from_config(config: &ArithConfig) -> Self {
        Self::with_policy(config.overflow)
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn add(&self, a: T, b: T) -> T {
        trace!("add({}, {})", a, b);
        a.wrapping_add(&b)
    }

    pub fn subtract(&self, a: T, b: T) -> T {
        trace!("subtract({}, {})", a, b);
        a.wrapping_sub(&b)
    }

    pub fn multiply(&self, a: T, b: T) -> T {
        trace!("multiply({}, {})", a, b);
        a.wrapping_mul(&b)
    }

    /// Divide as floating point, so `divide(5, 2)` is `2.5`.
    ///
    /// Both operands are converted to f64 before dividing.
    pub fn divide(&self, a: T, b: T) -> Result<f64> {
        trace!("divide({}, {})", a, b);
        if b.is_zero() {
            debug!("rejected divide({}, 0)", a);
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(a.as_f64() / b.as_f64())
    }

    pub fn square(&self, n: T) -> T {
        trace!("square({})", n);
        n.wrapping_mul(&n)
    }

    /// `abs(MIN)` wraps back to `MIN`.
    pub fn abs(&self, n: T) -> T {
        trace!("abs({})", n);
        n.wrapping_abs_value()
    }

    pub fn checked_add(&self, a: T, b: T) -> Result<T> {
        overflow_checked(OperationKind::Add, a.checked_add(&b))
    }

    pub fn checked_subtract(&self, a: T, b: T) -> Result<T> {
        overflow_checked(OperationKind::Subtract, a.checked_sub(&b))
    }

    pub fn checked_multiply(&self, a: T, b: T) -> Result<T> {
        overflow_checked(OperationKind::Multiply, a.checked_mul(&b))
    }

    /// Same as [`ArithmeticService::divide`]; a quotient of two fixed-width
    /// integers is always finite.
    pub fn checked_divide(&self, a: T, b: T) -> Result<f64> {
        self.divide(a, b)
    }

    pub fn checked_square(&self, n: T) -> Result<T> {
        overflow_checked(OperationKind::Square, n.checked_mul(&n))
    }

    pub fn checked_abs(&self, n: T) -> Result<T> {
        overflow_checked(OperationKind::Abs, n.checked_abs_value())
    }

    /// Evaluate one recorded operation under this service's overflow policy.
    pub fn evaluate(&self, operation: &Operation<T>) -> Result<Outcome<T>> {
        match self.policy {
            OverflowPolicy::Wrapping => self.evaluate_wrapping(operation),
            OverflowPolicy::Checked => self.evaluate_checked(operation),
        }
    }

    fn evaluate_wrapping(&self, operation: &Operation<T>) -> Result<Outcome<T>> {
        let outcome = match *operation {
            Operation::Add { a, b } => Outcome::Integer(self.add(a, b)),
            Operation::Subtract { a, b } => Outcome::Integer(self.subtract(a, b)),
            Operation::Multiply { a, b } => Outcome::Integer(self.multiply(a, b)),
            Operation::Divide { a, b } => Outcome::Quotient(self.divide(a, b)?),
            Operation::Square { n } => Outcome::Integer(self.square(n)),
            Operation::Abs { n } => Outcome::Integer(self.abs(n)),
        };
        Ok(outcome)
    }

    fn evaluate_checked(&self, operation: &Operation<T>) -> Result<Outcome<T>> {
        let outcome = match *operation {
            Operation::Add { a, b } => Outcome::Integer(self.checked_add(a, b)?),
            Operation::Subtract { a, b } => Outcome::Integer(self.checked_subtract(a, b)?),
            Operation::Multiply { a, b } => Outcome::Integer(self.checked_multiply(a, b)?),
            Operation::Divide { a, b } => Outcome::Quotient(self.checked_divide(a, b)?),
            Operation::Square { n } => Outcome::Integer(self.checked_square(n)?),
            Operation::Abs { n } => Outcome::Integer(self.checked_abs(n)?),
        };
        Ok(outcome)
    }
}

fn overflow_checked<T: ArithInteger>(operation: OperationKind, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| {
        debug!("{} overflowed the {} backend", operation, T::backend_name());
        ArithmeticError::Overflow { operation }
    })
}

// Derives would put `T: Clone` style bounds on the phantom parameter.
impl<T: ArithInteger> Clone for ArithmeticService<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ArithInteger> Copy for ArithmeticService<T> {}

impl<T: ArithInteger> Default for ArithmeticService<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ArithInteger> std::fmt::Debug for ArithmeticService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArithmeticService")
            .field("backend", &T::backend_name())
            .field("policy", &self.policy)
            .finish()
    }
}
