//! Exact rational numbers.
//!
//! A [`Rational`] wraps a [`BigRational`], which keeps every value in lowest
//! terms with a positive denominator. Structural equality is therefore value
//! equality, and the [`Display`](fmt::Display) output is the canonical
//! answer string. There is no size limit on either part.

use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use rand::Rng;
use serde::Deserialize;

use crate::error::FractionError;

/// An exact fraction in lowest terms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

impl Rational {
    /// The value zero (`0/1`).
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// Build a fraction and reduce it to lowest terms.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, FractionError> {
        Self::from_parts(BigInt::from(numerator), BigInt::from(denominator))
    }

    /// Build a fraction from arbitrary-size parts and reduce it.
    pub fn from_parts(numerator: BigInt, denominator: BigInt) -> Result<Self, FractionError> {
        if denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Self(BigRational::new(numerator, denominator)))
    }

    /// A whole number.
    pub fn from_integer(value: i64) -> Self {
        Self(BigRational::from_integer(BigInt::from(value)))
    }

    /// The reduced numerator; carries the sign.
    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    /// The reduced denominator; always positive.
    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Floating point approximation, e.g. `1.375` for `11/8`.
    pub fn estimate(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

/// Canonical form: `3/4`, `2`, `1-3/8`, `0`.
///
/// Values of one or more render as a mixed number whose fractional part is
/// itself reduced; whole results drop the fractional part entirely.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (numer, denom) = (self.0.numer(), self.0.denom());
        if denom.is_one() {
            return write!(f, "{numer}");
        }
        if numer > denom {
            let whole = self.0.to_integer();
            let rest = Rational(self.0.fract());
            return write!(f, "{whole}-{rest}");
        }
        write!(f, "{numer}/{denom}")
    }
}

impl FromStr for Rational {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_answer(s)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        Rational(self.0 + rhs.0)
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        Rational(self.0 - rhs.0)
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        Rational(&self.0 - &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

// ---------------------------------------------------------------------------
// Denominator setting
// ---------------------------------------------------------------------------

/// The denominator problems are drawn with: a power of two from 2 to 128.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u32")]
pub struct Denominator(u32);

impl Denominator {
    /// Every accepted denominator.
    pub const ALLOWED: [u32; 7] = [2, 4, 8, 16, 32, 64, 128];

    pub fn new(value: u32) -> Result<Self, String> {
        if Self::ALLOWED.contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "invalid denominator {value}; choose one of {}",
                Self::ALLOWED.map(|d| d.to_string()).join(", ")
            ))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Denominator {
    fn default() -> Self {
        Self(16)
    }
}

impl TryFrom<u32> for Denominator {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Denominator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid denominator: {s}"))?;
        Self::new(value)
    }
}

impl fmt::Display for Denominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Draw `n/d` with `n` uniform in `[1, d-1]`, reduced to lowest terms.
///
/// Reduction means the returned denominator can be smaller than `d`.
pub fn random_rational<R: Rng + ?Sized>(rng: &mut R, denominator: Denominator) -> Rational {
    let d = denominator.get();
    let n = rng.random_range(1..d);
    // Every allowed denominator is at least 2.
    Rational(BigRational::new(BigInt::from(n), BigInt::from(d)))
}
