//! # vzome-integers
//!
//! Arbitrary precision integer and rational arithmetic for vZome.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact rationals in lowest terms (`BigRational`), behind the `Rational` contract
//! - Primality helpers used by field construction (`is_prime`, `next_prime`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod primes;
pub mod rational;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use integer::Integer;
pub use primes::{is_prime, next_prime};
pub use rational::BigRational;
pub use traits::Rational;
