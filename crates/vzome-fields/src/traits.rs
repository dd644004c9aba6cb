//! The algebraic number contract exposed to surrounding collaborators.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::AlgebraError;

/// An element of an algebraic number field.
///
/// Binary operations require both operands to share a field and report
/// [`AlgebraError::FieldMismatch`] otherwise.
///
/// # Precision
///
/// Ordering (`compare_to`, `signum` and the derived predicates) compares
/// floating evaluations of the exact values. It is meant for ordering and UI
/// purposes. Equality stays exact and coefficient-wise.
pub trait FieldElement: Sized + Clone + PartialEq + Debug {
    /// Exact sum.
    ///
    /// # Errors
    ///
    /// Fails when the operands belong to different fields.
    fn plus(&self, other: &Self) -> Result<Self, AlgebraError>;

    /// Additive inverse.
    #[must_use]
    fn negate(&self) -> Self;

    /// Exact product.
    ///
    /// # Errors
    ///
    /// Fails when the operands belong to different fields.
    fn times(&self, other: &Self) -> Result<Self, AlgebraError>;

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] for zero.
    fn reciprocal(&self) -> Result<Self, AlgebraError>;

    /// Returns true if every coefficient is zero.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Floating approximation, never fed back into exact arithmetic.
    fn evaluate(&self) -> f64;

    /// Orders two elements by their evaluations.
    ///
    /// # Errors
    ///
    /// Fails when the operands belong to different fields.
    fn compare_to(&self, other: &Self) -> Result<Ordering, AlgebraError>;

    /// Sign of the evaluation: -1, 0, or 1.
    fn signum(&self) -> i8;

    /// Exact difference.
    ///
    /// # Errors
    ///
    /// Fails when the operands belong to different fields.
    fn minus(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.plus(&other.negate())
    }

    /// Exact quotient.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] when `other` is zero, or a
    /// field mismatch.
    fn divided_by(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.times(&other.reciprocal()?)
    }

    /// # Errors
    ///
    /// Fails when the operands belong to different fields.
    fn less_than(&self, other: &Self) -> Result<bool, AlgebraError> {
        Ok(self.compare_to(other)?.is_lt())
    }

    /// # Errors
    ///
    /// Fails when the operands belong to different fields.
    fn greater_than(&self, other: &Self) -> Result<bool, AlgebraError> {
        Ok(self.compare_to(other)?.is_gt())
    }

    /// # Errors
    ///
    /// Fails when the operands belong to different fields.
    fn less_than_or_equal_to(&self, other: &Self) -> Result<bool, AlgebraError> {
        Ok(self.compare_to(other)?.is_le())
    }

    /// # Errors
    ///
    /// Fails when the operands belong to different fields.
    fn greater_than_or_equal_to(&self, other: &Self) -> Result<bool, AlgebraError> {
        Ok(self.compare_to(other)?.is_ge())
    }
}
