//! Errors raised by algebraic number construction and arithmetic.

use thiserror::Error;
use vzome_integers::RationalError;

/// Errors that can occur while building or combining algebraic numbers.
///
/// All of these are deterministic input-validation failures: retrying with
/// the same arguments cannot succeed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// A divisor was the exact zero element.
    #[error("division by zero")]
    DivisionByZero,

    /// Two operands belong to different fields.
    #[error("cannot combine a number of field `{left}` with a number of field `{right}`")]
    FieldMismatch {
        /// Field of the left operand.
        left: String,
        /// Field of the right operand.
        right: String,
    },

    /// A coefficient list does not match the field order.
    #[error("field `{field}` expects {expected} coefficients, got {got}")]
    InvalidArity {
        /// Field being constructed into.
        field: String,
        /// The field order.
        expected: usize,
        /// Number of coefficients supplied.
        got: usize,
    },

    /// A pair or trailing-divisor encoding has the wrong shape.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// A coordinate basis does not span the field or does not start at 1.
    #[error("invalid basis: {0}")]
    InvalidBasis(String),

    /// A different field is already registered under this name.
    #[error("a different field is already registered as `{0}`")]
    NameConflict(String),
}

impl From<RationalError> for AlgebraError {
    fn from(err: RationalError) -> Self {
        match err {
            RationalError::DivisionByZero => Self::DivisionByZero,
            RationalError::Parse(text) => Self::MalformedEncoding(format!("invalid rational `{text}`")),
        }
    }
}
