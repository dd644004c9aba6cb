//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{is_prime, next_prime, BigRational, Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = BigRational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| BigRational::from_i64(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = BigRational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| BigRational::from_i64(n, d).unwrap())
    }

    proptest! {
        // Canonical form

        #[test]
        fn create_is_reduced(num in small_int(), den in non_zero_int()) {
            let r = BigRational::from_i64(num, den).unwrap();
            prop_assert!(!r.denominator().is_negative());
            prop_assert!(!r.denominator().is_zero());
            let g = r.numerator().abs().gcd(r.denominator());
            prop_assert_eq!(g, Integer::new(1));
        }

        #[test]
        fn reduction_idempotent(num in small_int(), den in non_zero_int(), k in non_zero_int()) {
            let a = BigRational::from_i64(num, den).unwrap();
            let b = BigRational::from_i64(num * k, den * k).unwrap();
            prop_assert_eq!(a, b);
        }

        // Field axioms

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.plus(&b), b.plus(&a));
        }

        #[test]
        fn add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(a.plus(&b).plus(&c), a.plus(&b.plus(&c)));
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.times(&b), b.times(&a));
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(a.times(&b.plus(&c)), a.times(&b).plus(&a.times(&c)));
        }

        #[test]
        fn additive_inverse(a in rational()) {
            prop_assert!(a.plus(&a.negate()).is_zero());
        }

        #[test]
        fn multiplicative_inverse(a in non_zero_rational()) {
            let inv = a.reciprocal().unwrap();
            prop_assert!(a.times(&inv).is_one());
        }

        #[test]
        fn times_int_matches_times(a in rational(), k in small_int()) {
            prop_assert_eq!(a.times_int(k), a.times(&BigRational::from(k)));
        }

        // Ordering

        #[test]
        fn order_consistent_with_eq(a in rational(), b in rational()) {
            prop_assert_eq!(a.cmp(&b) == std::cmp::Ordering::Equal, a == b);
        }

        #[test]
        fn order_matches_evaluation(a in rational(), b in rational()) {
            if a < b {
                prop_assert!(a.evaluate() <= b.evaluate());
            }
        }

        #[test]
        fn display_parse_roundtrip(a in rational()) {
            let text = a.to_string();
            prop_assert_eq!(text.parse::<BigRational>().unwrap(), a);
        }

        // Primes

        #[test]
        fn next_prime_is_next(n in 0u64..5000u64) {
            let p = next_prime(n).unwrap();
            prop_assert!(p > n);
            prop_assert!(is_prime(p));
            prop_assert!(((n + 1)..p).all(|m| !is_prime(m)));
        }
    }
}
