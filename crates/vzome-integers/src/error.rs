//! Errors raised by exact rational arithmetic.

use thiserror::Error;

/// Errors that can occur while constructing or combining rationals.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A denominator, or a divisor, was exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Text could not be read as `n` or `n/d`.
    #[error("invalid rational literal `{0}`")]
    Parse(String),
}
