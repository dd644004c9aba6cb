//! The algebraic field capability.
//!
//! A field is injected into every number it owns. Numbers never know which
//! concrete field they live in; they only see the structure constants exposed
//! here (order, product, reciprocal, evaluation and display symbols).

use std::fmt::{self, Debug};
use std::sync::Arc;

use vzome_integers::{BigRational, Rational};

use crate::AlgebraError;

/// A shared handle to a field. Many numbers point at one field.
pub type FieldRef = Arc<dyn AlgebraicField>;

/// Textual rendering conventions for numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    /// Symbolic form, e.g. `4 + 3φ`.
    #[default]
    Default,
    /// ASCII expression form, e.g. `4 + 3*phi`.
    Expression,
    /// Coefficients in basis order, space separated, e.g. `4 3`.
    Zomic,
    /// Coefficients highest basis element first, e.g. `(3,4)`.
    Vef,
}

impl NumberFormat {
    /// Maps the legacy integer format codes (0 to 3) onto formats.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Default),
            1 => Some(Self::Expression),
            2 => Some(Self::Zomic),
            3 => Some(Self::Vef),
            _ => None,
        }
    }
}

/// A finite-degree extension of the rationals with a fixed basis.
///
/// Coefficient slices handed to these methods always have exactly
/// [`order`](AlgebraicField::order) entries; `AlgebraicNumber` guarantees it.
///
/// # Laws
///
/// - `order() >= 1`, and the first basis element is the rational unit
/// - `multiply` is commutative and associative
/// - `evaluate` is a ring homomorphism into the reals
pub trait AlgebraicField: Send + Sync + Debug {
    /// Stable name of the field, e.g. `golden`.
    fn name(&self) -> &str;

    /// Number of basis coefficients per element.
    fn order(&self) -> usize;

    /// Product of two coefficient vectors.
    fn multiply(&self, a: &[BigRational], b: &[BigRational]) -> Vec<BigRational>;

    /// Multiplicative inverse of a coefficient vector.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] if the vector is zero.
    fn reciprocal(&self, a: &[BigRational]) -> Result<Vec<BigRational>, AlgebraError>;

    /// Floating approximation of a coefficient vector.
    fn evaluate(&self, coeffs: &[BigRational]) -> f64;

    /// Display symbol for basis element `index` (never called with 0).
    fn irrational(&self, index: usize, format: NumberFormat) -> String;

    /// Renders a coefficient vector in the given format.
    fn number_expression(&self, coeffs: &[BigRational], format: NumberFormat) -> String {
        match format {
            NumberFormat::Zomic => coeffs
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            NumberFormat::Vef if coeffs.len() > 1 => {
                let reversed: Vec<String> = coeffs.iter().rev().map(ToString::to_string).collect();
                format!("({})", reversed.join(","))
            }
            NumberFormat::Vef => coeffs.first().map(ToString::to_string).unwrap_or_default(),
            NumberFormat::Default | NumberFormat::Expression => {
                symbolic_expression(self, coeffs, format)
            }
        }
    }
}

fn symbolic_expression<F: AlgebraicField + ?Sized>(
    field: &F,
    coeffs: &[BigRational],
    format: NumberFormat,
) -> String {
    let mut out = String::new();
    for (i, c) in coeffs.iter().enumerate() {
        if c.is_zero() {
            continue;
        }
        let negative = c.is_negative();
        let magnitude = if negative { c.negate() } else { c.clone() };
        if out.is_empty() {
            if negative {
                out.push('-');
            }
        } else {
            out.push_str(if negative { " - " } else { " + " });
        }
        if i == 0 {
            out.push_str(&magnitude.to_string());
            continue;
        }
        if !magnitude.is_one() {
            out.push_str(&magnitude.to_string());
            if format == NumberFormat::Expression {
                out.push('*');
            }
        }
        out.push_str(&field.irrational(i, format));
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Returns true if two handles denote the same field.
///
/// Fields are identified by name and order; sharing one allocation is the
/// fast path. [`crate::FieldRegistry`] refuses to hand out two structurally
/// different fields under one name.
#[must_use]
pub fn same_field(a: &FieldRef, b: &FieldRef) -> bool {
    Arc::ptr_eq(a, b) || (a.name() == b.name() && a.order() == b.order())
}

/// Returns true if both fields multiply and evaluate their bases identically.
pub(crate) fn same_structure(a: &dyn AlgebraicField, b: &dyn AlgebraicField) -> bool {
    let n = a.order();
    if n != b.order() {
        return false;
    }
    let unit = |k: usize| {
        let mut v = vec![BigRational::zero(); n];
        v[k] = BigRational::one();
        v
    };
    let basis: Vec<Vec<BigRational>> = (0..n).map(unit).collect();
    basis
        .iter()
        .all(|e| a.evaluate(e).to_bits() == b.evaluate(e).to_bits())
        && basis.iter().all(|x| {
            basis
                .iter()
                .all(|y| a.multiply(x, y) == b.multiply(x, y))
        })
}

/// Wraps a field's name for `Debug` output of numbers.
pub(crate) struct FieldName<'a>(pub(crate) &'a FieldRef);

impl fmt::Debug for FieldName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}
