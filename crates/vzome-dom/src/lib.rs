//! # vzome-dom
//!
//! A small element tree for reading and writing vZome design documents.
//!
//! Attributes are stored sorted, so XML and JSON output is deterministic.
//! Algebraic numbers travel in attributes as trailing-divisor integers.
//! Children tagged `effects` belong to history exports and are invisible to
//! the content accessors.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod element;
pub mod error;
mod numbers;
mod xml;

pub use element::{Element, Node, EFFECTS_TAG};
pub use error::DomError;
