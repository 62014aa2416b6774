//! Answer text parser.
//!
//! Turns what the user typed into an exact [`Rational`]. Accepted forms:
//!
//! - mixed numbers: `1-3/8`
//! - plain fractions, optionally signed: `11/8`, `-3/4`
//! - integers and decimals, optionally signed, with an optional exponent:
//!   `2`, `1.375`, `.5`, `1375e-3`
//!
//! Anything else is a [`FractionError::Parse`], which the session treats as
//! "ask again" rather than as a wrong answer.

use lazy_static::lazy_static;
use num_bigint::BigInt;
use num_traits::One;
use regex::{Captures, Regex};

use crate::error::FractionError;
use crate::rational::Rational;

/// Largest power of ten a decimal exponent may produce.
const MAX_DECIMAL_SCALE: u32 = 100_000;

lazy_static! {
    static ref MIXED_NUMBER: Regex = Regex::new(r"^(\d+)-(\d+)/(\d+)$").unwrap();
    static ref FRACTION: Regex = Regex::new(r"^([+-]?)(\d+)/(\d+)$").unwrap();
    static ref DECIMAL: Regex =
        Regex::new(r"^([+-]?)(?:(\d+)(?:\.(\d*))?|\.(\d+))(?:[eE]([+-]?\d+))?$").unwrap();
}

/// Parse answer text into an exact value.
///
/// Surrounding whitespace is ignored. Digits of any length are kept exactly.
/// Any failure, including a zero denominator or an exponent beyond
/// `10^100000`, is reported as [`FractionError::Parse`] carrying the
/// original text.
pub fn parse_answer(text: &str) -> Result<Rational, FractionError> {
    let trimmed = text.trim();
    let invalid = || FractionError::Parse(text.to_string());

    let parsed = if let Some(caps) = MIXED_NUMBER.captures(trimmed) {
        parse_mixed(&caps)
    } else if let Some(caps) = FRACTION.captures(trimmed) {
        parse_fraction(&caps)
    } else if let Some(caps) = DECIMAL.captures(trimmed) {
        parse_decimal(&caps)
    } else {
        None
    };

    parsed.ok_or_else(invalid)
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn number(digits: &str) -> Option<BigInt> {
    digits.parse().ok()
}

fn apply_sign(sign: &str, value: BigInt) -> BigInt {
    if sign == "-" {
        -value
    } else {
        value
    }
}

fn power_of_ten(exponent: u64) -> Option<BigInt> {
    let exponent = u32::try_from(exponent)
        .ok()
        .filter(|e| *e <= MAX_DECIMAL_SCALE)?;
    Some(BigInt::from(10).pow(exponent))
}

/// `whole-num/denom` means `(whole * denom + num) / denom`.
fn parse_mixed(caps: &Captures<'_>) -> Option<Rational> {
    let whole = number(group(caps, 1))?;
    let num = number(group(caps, 2))?;
    let denom = number(group(caps, 3))?;
    let numerator = whole * &denom + num;
    Rational::from_parts(numerator, denom).ok()
}

fn parse_fraction(caps: &Captures<'_>) -> Option<Rational> {
    let num = apply_sign(group(caps, 1), number(group(caps, 2))?);
    let denom = number(group(caps, 3))?;
    Rational::from_parts(num, denom).ok()
}

fn parse_decimal(caps: &Captures<'_>) -> Option<Rational> {
    let sign = group(caps, 1);
    let (int_part, frac_part) = match caps.get(4) {
        Some(m) => ("", m.as_str()),
        None => (group(caps, 2), group(caps, 3)),
    };
    let exponent: i64 = match caps.get(5) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    let digits = format!("{int_part}{frac_part}");
    let numerator = apply_sign(sign, number(&digits)?);
    let scale = i64::try_from(frac_part.len()).ok()?.checked_sub(exponent)?;
    let power = power_of_ten(scale.unsigned_abs())?;

    if scale >= 0 {
        Rational::from_parts(numerator, power).ok()
    } else {
        Rational::from_parts(numerator * power, BigInt::one()).ok()
    }
}
