//! The field of rational numbers Q, as a degree-1 algebraic field.

use vzome_integers::{BigRational, Rational};

use crate::{AlgebraError, AlgebraicField, NumberFormat};

/// Name of the rational field.
pub const RATIONAL: &str = "rational";

/// The trivial extension: every element is a single rational coefficient.
#[derive(Clone, Copy, Debug, Default)]
pub struct RationalField;

impl AlgebraicField for RationalField {
    fn name(&self) -> &str {
        RATIONAL
    }

    fn order(&self) -> usize {
        1
    }

    fn multiply(&self, a: &[BigRational], b: &[BigRational]) -> Vec<BigRational> {
        vec![a[0].times(&b[0])]
    }

    fn reciprocal(&self, a: &[BigRational]) -> Result<Vec<BigRational>, AlgebraError> {
        Ok(vec![a[0].reciprocal()?])
    }

    fn evaluate(&self, coeffs: &[BigRational]) -> f64 {
        coeffs[0].evaluate()
    }

    fn irrational(&self, _index: usize, _format: NumberFormat) -> String {
        String::new()
    }
}
