//! Integer encodings of coefficient vectors.
//!
//! Two flat forms cross the kernel boundary:
//!
//! - pairs: `[n_0, d_0, n_1, d_1, ...]`, one fraction per coefficient
//! - trailing divisor: `[m_0, m_1, ..., m_{k-1}, D]`, every coefficient is
//!   `m_i / D` and `D` is the least common denominator

use num_traits::{One, Zero};
use vzome_integers::{BigRational, Integer};

use crate::AlgebraError;

/// Flattens coefficients into `[num, den, ...]` pairs.
#[must_use]
pub fn encode_pairs(coeffs: &[BigRational]) -> Vec<Integer> {
    coeffs
        .iter()
        .flat_map(|c| [c.numerator().clone(), c.denominator().clone()])
        .collect()
}

/// Reads `[num, den, ...]` pairs as fractions.
///
/// # Errors
///
/// Returns [`AlgebraError::MalformedEncoding`] for an odd number of values and
/// [`AlgebraError::DivisionByZero`] for a zero denominator.
pub fn decode_pairs(pairs: &[Integer]) -> Result<Vec<BigRational>, AlgebraError> {
    if pairs.len() % 2 != 0 {
        return Err(AlgebraError::MalformedEncoding(format!(
            "pair encoding needs an even number of values, got {}",
            pairs.len()
        )));
    }
    pairs
        .chunks_exact(2)
        .map(|pair| BigRational::new(pair[0].clone(), pair[1].clone()).map_err(AlgebraError::from))
        .collect()
}

/// Encodes coefficients over their least common denominator.
#[must_use]
pub fn encode_trailing_divisor(coeffs: &[BigRational]) -> Vec<Integer> {
    let divisor = coeffs
        .iter()
        .fold(Integer::one(), |acc, c| acc.lcm(c.denominator()));
    let mut values: Vec<Integer> = coeffs
        .iter()
        .map(|c| c.numerator() * &(&divisor / c.denominator()))
        .collect();
    values.push(divisor);
    values
}

/// Reads `[m_0, ..., m_{k-1}, D]` as `k` fractions over `D`.
///
/// # Errors
///
/// Returns [`AlgebraError::MalformedEncoding`] for an empty slice and
/// [`AlgebraError::DivisionByZero`] for a zero divisor.
pub fn decode_trailing_divisor(values: &[Integer]) -> Result<Vec<BigRational>, AlgebraError> {
    let Some((divisor, numerators)) = values.split_last() else {
        return Err(AlgebraError::MalformedEncoding(
            "trailing-divisor encoding is empty".to_string(),
        ));
    };
    if divisor.is_zero() {
        return Err(AlgebraError::DivisionByZero);
    }
    numerators
        .iter()
        .map(|n| BigRational::new(n.clone(), divisor.clone()).map_err(AlgebraError::from))
        .collect()
}

/// Converts a pair encoding into the trailing-divisor encoding.
///
/// # Errors
///
/// Same as [`decode_pairs`].
pub fn pairs_to_trailing_divisor(pairs: &[Integer]) -> Result<Vec<Integer>, AlgebraError> {
    Ok(encode_trailing_divisor(&decode_pairs(pairs)?))
}

/// Converts a trailing-divisor encoding into reduced pairs.
///
/// # Errors
///
/// Same as [`decode_trailing_divisor`].
pub fn trailing_divisor_to_pairs(values: &[Integer]) -> Result<Vec<Integer>, AlgebraError> {
    Ok(encode_pairs(&decode_trailing_divisor(values)?))
}
