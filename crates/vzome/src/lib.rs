//! # vzome
//!
//! The exact arithmetic kernel behind vZome's zometool geometry.
//!
//! Coordinates in vZome never touch floating point until they are drawn.
//! They live in algebraic number fields such as Q(φ), represented as
//! vectors of exact rationals against a field basis.
//!
//! ## Crates
//!
//! - [`integers`]: `Integer`, `BigRational` and primality helpers
//! - [`fields`]: fields, `AlgebraicNumber`, encodings, factory, registry
//! - [`dom`]: element tree with number attributes and deterministic output
//!
//! ## Quick Start
//!
//! ```rust
//! use vzome::prelude::*;
//!
//! let registry = FieldRegistry::with_standard_fields();
//! let golden = registry.get("golden").unwrap();
//! let phi = AlgebraicNumber::from_coefficients(
//!     &golden,
//!     &[Integer::new(0), Integer::new(1)],
//!     &Integer::new(1),
//! )
//! .unwrap();
//! // φ² = φ + 1
//! let square = phi.times(&phi).unwrap();
//! assert_eq!(square.to_string(), "1 + φ");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use vzome_dom as dom;
pub use vzome_fields as fields;
pub use vzome_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use vzome_dom::{DomError, Element, Node};
    pub use vzome_fields::{
        AlgebraError, AlgebraicField, AlgebraicNumber, AlgebraicNumberFactory, ExactNumberFactory,
        FieldElement, FieldRef, FieldRegistry, NumberFormat, PolynomialField, RationalField,
    };
    pub use vzome_integers::{BigRational, Integer, Rational};
}
