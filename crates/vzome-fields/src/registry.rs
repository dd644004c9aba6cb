//! Named field lookup.
//!
//! Numbers built from the same registry share one field allocation. The
//! standard fields are constructed lazily on first lookup; racing lookups may
//! both build a field, but only the first insertion is ever handed out.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::trace;

use crate::field::same_structure;
use crate::polynomial::{GOLDEN, HEPTAGON, ROOT_THREE, ROOT_TWO, SNUB_CUBE, SQRT_PHI};
use crate::rational_field::RATIONAL;
use crate::{AlgebraError, FieldRef, PolynomialField, RationalField};

/// Names of the fields [`standard_field`] knows how to build.
pub const STANDARD_FIELDS: [&str; 7] = [
    RATIONAL, GOLDEN, ROOT_TWO, ROOT_THREE, SQRT_PHI, HEPTAGON, SNUB_CUBE,
];

/// Builds a fresh standard field by name.
#[must_use]
pub fn standard_field(name: &str) -> Option<FieldRef> {
    let field: FieldRef = match name {
        RATIONAL => Arc::new(RationalField),
        GOLDEN => Arc::new(PolynomialField::golden()),
        ROOT_TWO => Arc::new(PolynomialField::root_two()),
        ROOT_THREE => Arc::new(PolynomialField::root_three()),
        SQRT_PHI => Arc::new(PolynomialField::sqrt_phi()),
        HEPTAGON => Arc::new(PolynomialField::heptagon()),
        SNUB_CUBE => Arc::new(PolynomialField::snub_cube()),
        _ => return None,
    };
    Some(field)
}

/// A thread-safe map from field names to shared fields.
#[derive(Default)]
pub struct FieldRegistry {
    fields: RwLock<FxHashMap<String, FieldRef>>,
}

impl FieldRegistry {
    /// Creates a registry that resolves only the standard fields.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: RwLock::new(FxHashMap::default()),
        }
    }

    /// Creates a registry with every standard field already built.
    #[must_use]
    pub fn with_standard_fields() -> Self {
        let fields = STANDARD_FIELDS
            .iter()
            .filter_map(|name| standard_field(name))
            .map(|field| (field.name().to_string(), field))
            .collect();
        Self {
            fields: RwLock::new(fields),
        }
    }

    /// Registers a field under its name.
    ///
    /// Registering a field with the same structure as the one already held
    /// under that name returns the existing handle.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NameConflict`] if the name is taken by a field
    /// with a different order, multiplication or evaluation.
    pub fn register(&self, field: FieldRef) -> Result<FieldRef, AlgebraError> {
        let mut fields = self.fields.write();
        if let Some(existing) = fields.get(field.name()) {
            if Arc::ptr_eq(existing, &field) || same_structure(existing.as_ref(), field.as_ref()) {
                return Ok(Arc::clone(existing));
            }
            trace!(field = field.name(), "rejected conflicting field");
            return Err(AlgebraError::NameConflict(field.name().to_string()));
        }
        trace!(field = field.name(), order = field.order(), "registered field");
        fields.insert(field.name().to_string(), Arc::clone(&field));
        Ok(field)
    }

    /// Looks up a field, building a standard field on first use.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<FieldRef> {
        if let Some(field) = self.fields.read().get(name) {
            return Some(Arc::clone(field));
        }
        standard_field(name).and_then(|field| self.register(field).ok())
    }

    /// Registered field names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.read().len()
    }

    /// Returns true if no field is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.read().is_empty()
    }
}

impl std::fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("fields", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlgebraicNumber, FieldElement};
    use vzome_integers::{BigRational, Integer};

    #[test]
    fn test_lazy_lookup_shares_allocation() {
        let registry = FieldRegistry::new();
        assert!(registry.is_empty());
        let a = registry.get("golden").unwrap();
        let b = registry.get("golden").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("no-such-field").is_none());
    }

    #[test]
    fn test_standard_fields() {
        let registry = FieldRegistry::with_standard_fields();
        assert_eq!(registry.len(), STANDARD_FIELDS.len());
        assert_eq!(
            registry.names(),
            vec!["golden", "heptagon", "rational", "rootThree", "rootTwo", "snubCube", "sqrtPhi"]
        );
        assert_eq!(registry.get("sqrtPhi").unwrap().order(), 4);
        assert_eq!(registry.get("rational").unwrap().order(), 1);
    }

    #[test]
    fn test_first_registration_wins() {
        let registry = FieldRegistry::new();
        let first = registry.register(Arc::new(PolynomialField::golden())).unwrap();
        let second = registry.register(Arc::new(PolynomialField::golden())).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_conflicting_registration_rejected() {
        let registry = FieldRegistry::with_standard_fields();
        let root_two_poly = [-2i64, 0, 1].map(BigRational::from).to_vec();
        let impostor = PolynomialField::new("golden", root_two_poly, 1.414, "φ", "phi").unwrap();
        assert_eq!(
            registry.register(Arc::new(impostor)).unwrap_err(),
            AlgebraError::NameConflict("golden".to_string())
        );
        let golden = registry.get("golden").unwrap();
        let phi = AlgebraicNumber::from_pairs(&golden, &[0, 1, 1, 1].map(Integer::new)).unwrap();
        // φ² = 1 + φ still holds for the registered field
        assert_eq!(
            phi.times(&phi).unwrap().to_trailing_divisor(),
            [1, 1, 1].map(Integer::new).to_vec()
        );

        let tribonacci = [-1i64, -1, -1, 1].map(BigRational::from).to_vec();
        let custom = PolynomialField::new("cubic", tribonacci, 1.839, "ξ", "xi").unwrap();
        let registered = registry.register(Arc::new(custom)).unwrap();
        assert!(Arc::ptr_eq(&registered, &registry.get("cubic").unwrap()));
    }

    #[test]
    fn test_concurrent_lookups() {
        let registry = Arc::new(FieldRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    let field = registry.get("golden").unwrap();
                    let one_plus_phi = [1, 1, 1, 1].map(Integer::new);
                    let x = AlgebraicNumber::from_pairs(&field, &one_plus_phi).unwrap();
                    x.times(&x).unwrap().to_trailing_divisor()
                })
            })
            .collect();
        let first = registry.get("golden").unwrap();
        for handle in handles {
            // (1 + φ)² = 2 + 3φ
            assert_eq!(handle.join().unwrap(), [2, 3, 1].map(Integer::new).to_vec());
        }
        assert!(Arc::ptr_eq(&first, &registry.get("golden").unwrap()));
    }
}
