//! The construction surface used by the model, import and worker layers.
//!
//! Collaborators outside the kernel build numbers through
//! [`AlgebraicNumberFactory`] so they never depend on a concrete rational or
//! number representation.

use tracing::debug;
use vzome_integers::{is_prime, next_prime, BigRational, Integer, Rational};

use crate::{AlgebraError, AlgebraicNumber, FieldElement, FieldRef};

/// Builds rationals and field elements from integer data.
pub trait AlgebraicNumberFactory {
    /// Rational representation handed out by this factory.
    type Rational: Rational;
    /// Field element representation handed out by this factory.
    type Number: FieldElement;

    /// The rational zero.
    fn zero(&self) -> Self::Rational;

    /// The rational one.
    fn one(&self) -> Self::Rational;

    /// `num / denom` as a rational.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] for a zero denominator.
    fn create_big_rational(&self, num: i64, denom: i64) -> Result<Self::Rational, AlgebraError>;

    /// `num / denom` embedded in `field`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] for a zero denominator.
    fn create_rational(
        &self,
        field: &FieldRef,
        num: &Integer,
        denom: &Integer,
    ) -> Result<Self::Number, AlgebraError>;

    /// Coefficient `i` is `numerators[i] / divisor`.
    ///
    /// # Errors
    ///
    /// Fails on arity mismatch or a zero divisor.
    fn create_algebraic_number(
        &self,
        field: &FieldRef,
        numerators: &[Integer],
        divisor: &Integer,
    ) -> Result<Self::Number, AlgebraError>;

    /// Decodes the trailing-divisor form.
    ///
    /// # Errors
    ///
    /// Fails on a malformed encoding or a zero divisor.
    fn create_from_trailing_divisor(
        &self,
        field: &FieldRef,
        values: &[Integer],
    ) -> Result<Self::Number, AlgebraError>;

    /// Decodes the numerator/denominator pair form.
    ///
    /// # Errors
    ///
    /// Fails on a malformed encoding, arity mismatch or a zero denominator.
    fn create_from_pairs(&self, field: &FieldRef, pairs: &[Integer]) -> Result<Self::Number, AlgebraError>;

    /// Primality test.
    fn is_prime(&self, n: u64) -> bool;

    /// First prime strictly greater than `n`.
    fn next_prime(&self, n: u64) -> Option<u64>;
}

/// Factory producing [`BigRational`] and [`AlgebraicNumber`] values.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactNumberFactory;

impl ExactNumberFactory {
    /// Creates a factory.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn rejected<'a>(field: &'a FieldRef, form: &'static str) -> impl FnOnce(AlgebraError) -> AlgebraError + 'a {
    move |err| {
        debug!(field = field.name(), form, error = %err, "rejected number construction");
        err
    }
}

impl AlgebraicNumberFactory for ExactNumberFactory {
    type Rational = BigRational;
    type Number = AlgebraicNumber;

    fn zero(&self) -> BigRational {
        BigRational::zero()
    }

    fn one(&self) -> BigRational {
        BigRational::one()
    }

    fn create_big_rational(&self, num: i64, denom: i64) -> Result<BigRational, AlgebraError> {
        Ok(BigRational::from_i64(num, denom)?)
    }

    fn create_rational(
        &self,
        field: &FieldRef,
        num: &Integer,
        denom: &Integer,
    ) -> Result<AlgebraicNumber, AlgebraError> {
        AlgebraicNumber::from_rational(field, num.clone(), denom.clone())
            .map_err(rejected(field, "rational"))
    }

    fn create_algebraic_number(
        &self,
        field: &FieldRef,
        numerators: &[Integer],
        divisor: &Integer,
    ) -> Result<AlgebraicNumber, AlgebraError> {
        AlgebraicNumber::from_coefficients(field, numerators, divisor)
            .map_err(rejected(field, "coefficients"))
    }

    fn create_from_trailing_divisor(
        &self,
        field: &FieldRef,
        values: &[Integer],
    ) -> Result<AlgebraicNumber, AlgebraError> {
        AlgebraicNumber::from_trailing_divisor(field, values)
            .map_err(rejected(field, "trailing divisor"))
    }

    fn create_from_pairs(
        &self,
        field: &FieldRef,
        pairs: &[Integer],
    ) -> Result<AlgebraicNumber, AlgebraError> {
        AlgebraicNumber::from_pairs(field, pairs).map_err(rejected(field, "pairs"))
    }

    fn is_prime(&self, n: u64) -> bool {
        is_prime(n)
    }

    fn next_prime(&self, n: u64) -> Option<u64> {
        next_prime(n)
    }
}
