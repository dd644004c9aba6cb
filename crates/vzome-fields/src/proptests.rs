//! Property-based tests for field arithmetic and encodings.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;
    use vzome_integers::Integer;

    use crate::{AlgebraError, AlgebraicNumber, FieldElement, FieldRef, PolynomialField};

    fn small_int() -> impl Strategy<Value = i64> {
        -50i64..50i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-50i64..=-1i64), (1i64..=50i64)]
    }

    fn fields() -> impl Strategy<Value = FieldRef> {
        prop_oneof![
            Just(Arc::new(PolynomialField::golden()) as FieldRef),
            Just(Arc::new(PolynomialField::root_two()) as FieldRef),
            Just(Arc::new(PolynomialField::root_three()) as FieldRef),
            Just(Arc::new(PolynomialField::snub_cube()) as FieldRef),
            Just(Arc::new(PolynomialField::heptagon()) as FieldRef),
            Just(Arc::new(PolynomialField::sqrt_phi()) as FieldRef),
        ]
    }

    fn element(field: FieldRef) -> impl Strategy<Value = AlgebraicNumber> {
        let order = field.order();
        (prop::collection::vec(small_int(), order), non_zero_int()).prop_map(move |(nums, d)| {
            let nums: Vec<Integer> = nums.into_iter().map(Integer::new).collect();
            AlgebraicNumber::from_coefficients(&field, &nums, &Integer::new(d)).unwrap()
        })
    }

    fn triple() -> impl Strategy<Value = (AlgebraicNumber, AlgebraicNumber, AlgebraicNumber)> {
        fields().prop_flat_map(|f| (element(f.clone()), element(f.clone()), element(f)))
    }

    proptest! {
        #[test]
        fn add_commutative((a, b, _) in triple()) {
            prop_assert_eq!(a.plus(&b).unwrap(), b.plus(&a).unwrap());
        }

        #[test]
        fn add_associative((a, b, c) in triple()) {
            prop_assert_eq!(
                a.plus(&b).unwrap().plus(&c).unwrap(),
                a.plus(&b.plus(&c).unwrap()).unwrap()
            );
        }

        #[test]
        fn mul_commutative((a, b, _) in triple()) {
            prop_assert_eq!(a.times(&b).unwrap(), b.times(&a).unwrap());
        }

        #[test]
        fn mul_associative((a, b, c) in triple()) {
            prop_assert_eq!(
                a.times(&b).unwrap().times(&c).unwrap(),
                a.times(&b.times(&c).unwrap()).unwrap()
            );
        }

        #[test]
        fn distributive((a, b, c) in triple()) {
            prop_assert_eq!(
                a.times(&b.plus(&c).unwrap()).unwrap(),
                a.times(&b).unwrap().plus(&a.times(&c).unwrap()).unwrap()
            );
        }

        #[test]
        fn additive_inverse((a, _, _) in triple()) {
            prop_assert!(a.plus(&a.negate()).unwrap().is_zero());
        }

        #[test]
        fn multiplicative_inverse((a, _, _) in triple()) {
            if a.is_zero() {
                prop_assert_eq!(a.reciprocal(), Err(AlgebraError::DivisionByZero));
            } else {
                prop_assert!(a.times(&a.reciprocal().unwrap()).unwrap().is_one());
            }
        }

        #[test]
        fn trailing_divisor_roundtrip((a, _, _) in triple()) {
            let td = a.to_trailing_divisor();
            prop_assert_eq!(AlgebraicNumber::from_trailing_divisor(a.field(), &td).unwrap(), a);
        }

        #[test]
        fn pairs_roundtrip((a, _, _) in triple()) {
            let pairs = a.to_pairs();
            prop_assert_eq!(AlgebraicNumber::from_pairs(a.field(), &pairs).unwrap(), a);
        }

        #[test]
        fn evaluate_is_homomorphic((a, b, _) in triple()) {
            let sum = a.plus(&b).unwrap().evaluate();
            let product = a.times(&b).unwrap().evaluate();
            let tolerance = 1e-9 * (1.0 + a.evaluate().abs()) * (1.0 + b.evaluate().abs());
            prop_assert!((sum - (a.evaluate() + b.evaluate())).abs() <= tolerance);
            prop_assert!((product - a.evaluate() * b.evaluate()).abs() <= tolerance);
        }

        #[test]
        fn ordering_antisymmetric((a, b, _) in triple()) {
            prop_assert_eq!(a.compare_to(&b).unwrap(), b.compare_to(&a).unwrap().reverse());
        }
    }
}
