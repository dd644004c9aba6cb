//! Errors raised while reading elements.

use thiserror::Error;
use vzome_fields::AlgebraError;

/// Errors that can occur while decoding element content.
#[derive(Debug, Error)]
pub enum DomError {
    /// A required attribute is absent.
    #[error("element `{element}` has no attribute `{name}`")]
    MissingAttribute {
        /// Tag of the element.
        element: String,
        /// Requested attribute.
        name: String,
    },

    /// An attribute token is not an integer.
    #[error("`{0}` is not an integer")]
    InvalidInteger(String),

    /// The integers do not describe a number of the requested field.
    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    /// JSON form could not be read or written.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
