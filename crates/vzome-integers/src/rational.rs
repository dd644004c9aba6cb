//! Arbitrary precision rational numbers.
//!
//! `BigRational` is an immutable numerator/denominator pair kept in lowest
//! terms, with the sign carried by the numerator. Every arithmetic result is a
//! fresh value; the cheap identity cases (adding zero, multiplying by one) skip
//! the big-integer work entirely.

use dashu::base::UnsignedAbs;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{Integer, Rational, RationalError};

/// An arbitrary precision rational number.
///
/// Invariants: `denominator > 0` and `gcd(|numerator|, denominator) == 1`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigRational {
    num: Integer,
    den: Integer,
}

impl BigRational {
    /// Creates a rational from numerator and denominator, reduced to lowest
    /// terms with a positive denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduce(numerator, denominator))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            num: n,
            den: Integer::one(),
        }
    }

    /// The canonical zero, `0/1`.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    /// The canonical one, `1/1`.
    #[must_use]
    pub fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    /// Returns the numerator. Carries the sign.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.num
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.den
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.num.signum()
    }

    // Caller guarantees a non-zero denominator.
    fn reduce(num: Integer, den: Integer) -> Self {
        if num.is_zero() {
            return Self::zero();
        }
        let g = num.gcd(&den);
        let (mut num, mut den) = if g.is_one() {
            (num, den)
        } else {
            (&num / &g, &den / &g)
        };
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        Self { num, den }
    }
}

impl Rational for BigRational {
    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }

    fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    fn plus(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        if self.den == other.den {
            return Self::reduce(&self.num + &other.num, self.den.clone());
        }
        let num = &(&self.num * &other.den) + &(&other.num * &self.den);
        Self::reduce(num, &self.den * &other.den)
    }

    fn negate(&self) -> Self {
        Self {
            num: -&self.num,
            den: self.den.clone(),
        }
    }

    fn times(&self, other: &Self) -> Self {
        if self.is_one() {
            return other.clone();
        }
        if other.is_one() {
            return self.clone();
        }
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        Self::reduce(&self.num * &other.num, &self.den * &other.den)
    }

    fn times_int(&self, k: i64) -> Self {
        match k {
            1 => self.clone(),
            0 => Self::zero(),
            _ => Self::reduce(&self.num * &Integer::new(k), self.den.clone()),
        }
    }

    fn reciprocal(&self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        if self.is_one() {
            return Ok(self.clone());
        }
        let (num, den) = if self.num.is_negative() {
            (-&self.den, -&self.num)
        } else {
            (self.den.clone(), self.num.clone())
        };
        Ok(Self { num, den })
    }

    fn evaluate(&self) -> f64 {
        let ratio = RBig::from_parts(
            self.num.clone().into_inner(),
            self.den.clone().into_inner().unsigned_abs(),
        );
        ratio.to_f64().value()
    }
}

impl Default for BigRational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigRational {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.den == other.den {
            return self.num.cmp(&other.num);
        }
        (&self.num * &other.den).cmp(&(&other.num * &self.den))
    }
}

impl PartialOrd for BigRational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigRational({self})")
    }
}

impl fmt::Display for BigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl FromStr for BigRational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.parse::<Integer>()
                .map_err(|_| RationalError::Parse(s.to_string()))
        };
        match s.split_once('/') {
            Some((num, den)) => Self::new(parse(num)?, parse(den)?),
            None => Ok(Self::from_integer(parse(s)?)),
        }
    }
}

// Arithmetic operators delegate to the `Rational` contract.
impl Add for BigRational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(&rhs)
    }
}

impl Add for &BigRational {
    type Output = BigRational;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(rhs)
    }
}

impl Sub for BigRational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(&rhs)
    }
}

impl Sub for &BigRational {
    type Output = BigRational;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(rhs)
    }
}

impl Mul for BigRational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times(&rhs)
    }
}

impl Mul for &BigRational {
    type Output = BigRational;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times(rhs)
    }
}

impl Neg for BigRational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &BigRational {
    type Output = BigRational;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl From<Integer> for BigRational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for BigRational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BigRational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigRational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
