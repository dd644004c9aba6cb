//! # vzome-fields
//!
//! Exact arithmetic over algebraic number fields for vZome.
//!
//! This crate provides:
//! - The `AlgebraicField` capability: order, product, reciprocal, evaluation
//! - Concrete fields: Q, and power-basis fields Q(α) (golden, √2, √3, √φ, ...)
//! - `AlgebraicNumber`, an exact coefficient vector bound to a shared field
//! - Pair and trailing-divisor encodings for transport and storage
//! - `AlgebraicNumberFactory`, the construction surface for collaborators
//! - `FieldRegistry`, name-based lookup of shared fields
//!
//! ## Layering
//!
//! ```text
//! BigRational (vzome-integers)
//!  └── AlgebraicField ── PolynomialField, RationalField
//!       └── AlgebraicNumber ── encoding, factory, registry
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod encoding;
pub mod error;
pub mod factory;
pub mod field;
pub mod number;
pub mod polynomial;
pub mod rational_field;
pub mod registry;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::AlgebraError;
pub use factory::{AlgebraicNumberFactory, ExactNumberFactory};
pub use field::{same_field, AlgebraicField, FieldRef, NumberFormat};
pub use number::AlgebraicNumber;
pub use polynomial::PolynomialField;
pub use rational_field::RationalField;
pub use registry::{standard_field, FieldRegistry};
pub use traits::FieldElement;
