//! Algebraic numbers stored in attributes.
//!
//! A number is written as its trailing-divisor integers separated by single
//! spaces, e.g. `"3 -4 6"` for `1/2 - 2/3 φ`.

use tracing::debug;
use vzome_fields::{AlgebraicNumber, FieldRef};
use vzome_integers::Integer;

use crate::{DomError, Element};

impl Element {
    /// Stores `value` under `name` in trailing-divisor form.
    pub fn set_number_attribute(&mut self, name: impl Into<String>, value: &AlgebraicNumber) {
        let encoded = value
            .to_trailing_divisor()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attribute(name, encoded);
    }

    /// Reads a number of `field` from attribute `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::MissingAttribute`] if the attribute is absent,
    /// [`DomError::InvalidInteger`] for a token that is not an integer, and
    /// [`DomError::Algebra`] when the integers do not fit the field.
    pub fn number_attribute(&self, name: &str, field: &FieldRef) -> Result<AlgebraicNumber, DomError> {
        let raw = self.require_attribute(name)?;
        let values = raw
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<Integer>()
                    .map_err(|_| DomError::InvalidInteger(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AlgebraicNumber::from_trailing_divisor(field, &values).map_err(|err| {
            debug!(element = %self.local_name(), attribute = name, %err, "rejected number attribute");
            DomError::from(err)
        })
    }
}
