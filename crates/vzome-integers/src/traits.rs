//! The exact rational number contract.
//!
//! Numeric layers above this crate program against [`Rational`] rather than
//! a concrete representation.

use std::fmt::{Debug, Display};

use crate::RationalError;

/// An exact rational number in canonical lowest-terms form.
///
/// # Laws
///
/// - `plus` and `times` are commutative and associative
/// - `a.plus(&a.negate())` is zero
/// - `a.times(&a.reciprocal()?)` is one for non-zero `a`
/// - `Ord` is exact and agrees with `Eq`
pub trait Rational: Clone + Eq + Ord + Debug + Display {
    /// Returns true if the numerator is zero.
    fn is_zero(&self) -> bool;

    /// Returns true if this is exactly `1/1`.
    fn is_one(&self) -> bool;

    /// Returns true if the numerator is negative.
    fn is_negative(&self) -> bool;

    /// Exact sum.
    #[must_use]
    fn plus(&self, other: &Self) -> Self;

    /// Additive inverse.
    #[must_use]
    fn negate(&self) -> Self;

    /// Exact product.
    #[must_use]
    fn times(&self, other: &Self) -> Self;

    /// Product with a machine integer.
    #[must_use]
    fn times_int(&self, k: i64) -> Self;

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] for zero.
    fn reciprocal(&self) -> Result<Self, RationalError>;

    /// Floating approximation, for ordering and display only.
    fn evaluate(&self) -> f64;

    /// Exact difference.
    #[must_use]
    fn minus(&self, other: &Self) -> Self {
        self.plus(&other.negate())
    }

    /// Exact quotient.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] when `other` is zero.
    fn divided_by(&self, other: &Self) -> Result<Self, RationalError> {
        Ok(self.times(&other.reciprocal()?))
    }
}
