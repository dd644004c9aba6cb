//! Elements of algebraic number fields.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::sync::Arc;

use vzome_integers::{BigRational, Integer, Rational};

use crate::encoding;
use crate::field::{same_field, FieldName};
use crate::{AlgebraError, FieldElement, FieldRef, NumberFormat};

/// An element of an algebraic number field.
///
/// Holds exactly `field.order()` rational coefficients against the field's
/// basis. Immutable: every operation returns a fresh value.
#[derive(Clone)]
pub struct AlgebraicNumber {
    field: FieldRef,
    coeffs: Vec<BigRational>,
}

impl AlgebraicNumber {
    /// Creates a number from explicit coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidArity`] unless there are exactly
    /// `field.order()` coefficients.
    pub fn new(field: FieldRef, coeffs: Vec<BigRational>) -> Result<Self, AlgebraError> {
        check_arity(&field, coeffs.len())?;
        Ok(Self { field, coeffs })
    }

    /// The additive identity of `field`.
    #[must_use]
    pub fn zero(field: &FieldRef) -> Self {
        Self {
            field: Arc::clone(field),
            coeffs: vec![BigRational::zero(); field.order()],
        }
    }

    /// The multiplicative identity of `field`.
    #[must_use]
    pub fn one(field: &FieldRef) -> Self {
        let mut number = Self::zero(field);
        number.coeffs[0] = BigRational::one();
        number
    }

    /// The rational `numerator / denominator` embedded in `field`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] for a zero denominator.
    pub fn from_rational(
        field: &FieldRef,
        numerator: Integer,
        denominator: Integer,
    ) -> Result<Self, AlgebraError> {
        let mut number = Self::zero(field);
        number.coeffs[0] = BigRational::new(numerator, denominator)?;
        Ok(number)
    }

    /// Coefficient `i` is `numerators[i] / divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidArity`] if `numerators` does not have
    /// `field.order()` entries, or [`AlgebraError::DivisionByZero`] for a zero
    /// divisor.
    pub fn from_coefficients(
        field: &FieldRef,
        numerators: &[Integer],
        divisor: &Integer,
    ) -> Result<Self, AlgebraError> {
        check_arity(field, numerators.len())?;
        let coeffs = numerators
            .iter()
            .map(|n| BigRational::new(n.clone(), divisor.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            field: Arc::clone(field),
            coeffs,
        })
    }

    /// Decodes `[m_0, ..., m_{order-1}, D]`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::MalformedEncoding`] unless there are exactly
    /// `order + 1` values, or [`AlgebraError::DivisionByZero`] for `D = 0`.
    pub fn from_trailing_divisor(field: &FieldRef, values: &[Integer]) -> Result<Self, AlgebraError> {
        let expected = field.order() + 1;
        if values.len() != expected {
            return Err(AlgebraError::MalformedEncoding(format!(
                "field `{}` needs {expected} trailing-divisor values, got {}",
                field.name(),
                values.len()
            )));
        }
        let coeffs = encoding::decode_trailing_divisor(values)?;
        Ok(Self {
            field: Arc::clone(field),
            coeffs,
        })
    }

    /// Decodes `[n_0, d_0, n_1, d_1, ...]`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::MalformedEncoding`] for an odd count,
    /// [`AlgebraError::InvalidArity`] unless there are `order` pairs, or
    /// [`AlgebraError::DivisionByZero`] for a zero denominator.
    pub fn from_pairs(field: &FieldRef, pairs: &[Integer]) -> Result<Self, AlgebraError> {
        let coeffs = encoding::decode_pairs(pairs)?;
        Self::new(Arc::clone(field), coeffs)
    }

    /// The owning field.
    #[must_use]
    pub fn field(&self) -> &FieldRef {
        &self.field
    }

    /// Coefficients against the field basis.
    #[must_use]
    pub fn coefficients(&self) -> &[BigRational] {
        &self.coeffs
    }

    /// Flattens coefficients to `[num0, den0, num1, den1, ...]`.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<Integer> {
        encoding::encode_pairs(&self.coeffs)
    }

    /// Encodes as `[m_0, ..., m_{order-1}, D]` over the least common denominator.
    #[must_use]
    pub fn to_trailing_divisor(&self) -> Vec<Integer> {
        encoding::encode_trailing_divisor(&self.coeffs)
    }

    /// Renders the number using the field's symbols.
    #[must_use]
    pub fn to_string_with(&self, format: NumberFormat) -> String {
        self.field.number_expression(&self.coeffs, format)
    }

    fn with_coeffs(&self, coeffs: Vec<BigRational>) -> Self {
        Self {
            field: Arc::clone(&self.field),
            coeffs,
        }
    }

    fn check_field(&self, other: &Self) -> Result<(), AlgebraError> {
        if same_field(&self.field, &other.field) {
            Ok(())
        } else {
            Err(AlgebraError::FieldMismatch {
                left: self.field.name().to_string(),
                right: other.field.name().to_string(),
            })
        }
    }
}

fn check_arity(field: &FieldRef, got: usize) -> Result<(), AlgebraError> {
    let expected = field.order();
    if got == expected {
        Ok(())
    } else {
        Err(AlgebraError::InvalidArity {
            field: field.name().to_string(),
            expected,
            got,
        })
    }
}

impl FieldElement for AlgebraicNumber {
    fn plus(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_field(other)?;
        if self.is_zero() {
            return Ok(other.clone());
        }
        if other.is_zero() {
            return Ok(self.clone());
        }
        let sums = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(a, b)| a.plus(b))
            .collect();
        Ok(self.with_coeffs(sums))
    }

    fn negate(&self) -> Self {
        self.with_coeffs(self.coeffs.iter().map(Rational::negate).collect())
    }

    fn times(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_field(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero(&self.field));
        }
        if self.is_one() {
            return Ok(other.clone());
        }
        if other.is_one() {
            return Ok(self.clone());
        }
        let product = self.field.multiply(&self.coeffs, &other.coeffs);
        Ok(self.with_coeffs(product))
    }

    fn reciprocal(&self) -> Result<Self, AlgebraError> {
        if self.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        let inverse = self.field.reciprocal(&self.coeffs)?;
        Ok(self.with_coeffs(inverse))
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Rational::is_zero)
    }

    fn is_one(&self) -> bool {
        self.coeffs[0].is_one() && self.coeffs[1..].iter().all(Rational::is_zero)
    }

    fn evaluate(&self) -> f64 {
        self.field.evaluate(&self.coeffs)
    }

    fn compare_to(&self, other: &Self) -> Result<Ordering, AlgebraError> {
        self.check_field(other)?;
        let (d1, d2) = (self.evaluate(), other.evaluate());
        Ok(if d1 == d2 {
            Ordering::Equal
        } else if d1 < d2 {
            Ordering::Less
        } else {
            Ordering::Greater
        })
    }

    fn signum(&self) -> i8 {
        let d = self.evaluate();
        if d == 0.0 {
            0
        } else if d < 0.0 {
            -1
        } else {
            1
        }
    }
}

impl PartialEq for AlgebraicNumber {
    fn eq(&self, other: &Self) -> bool {
        same_field(&self.field, &other.field) && self.coeffs == other.coeffs
    }
}

impl Eq for AlgebraicNumber {}

impl Neg for AlgebraicNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Debug for AlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgebraicNumber")
            .field("field", &FieldName(&self.field))
            .field("coeffs", &self.coeffs)
            .finish()
    }
}

impl fmt::Display for AlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(NumberFormat::Default))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AlgebraicNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("AlgebraicNumber", 2)?;
        state.serialize_field("field", self.field.name())?;
        state.serialize_field("coefficients", &self.coeffs)?;
        state.end()
    }
}
