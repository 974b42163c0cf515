//! Monetary amounts held as integer cents.
//!
//! User input is parsed with lenient decimal-prefix semantics: the longest
//! leading decimal literal is read and anything after it is ignored, so
//! `"12abc"` is twelve and `"abc"` is rejected. The parsed value is rounded
//! half away from zero to whole cents.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{CENTS_PER_UNIT, MAX_CENTS};

/// Reasons an input is not admitted as an amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// Nothing left after trimming.
    #[error("amount is empty")]
    Empty,

    /// No leading decimal literal.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// Infinite value (overflowing literal or `Infinity`).
    #[error("amount is not finite")]
    NotFinite,

    /// Zero, negative, or rounding to zero cents.
    #[error("amount must be greater than zero")]
    NotPositive,

    /// Above the largest amount the snapshot format stores exactly.
    #[error("amount exceeds {}", format_cents(u128::from(MAX_CENTS)))]
    TooLarge,
}

/// A positive amount with two decimal places of precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// Build an amount from whole cents. Returns `None` for zero or
    /// out-of-range values.
    #[must_use]
    pub fn from_cents(cents: u64) -> Option<Self> {
        (cents > 0 && cents <= MAX_CENTS).then_some(Self(cents))
    }

    /// Round a float to cents and validate it.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn from_f64(value: f64) -> Result<Self, AmountError> {
        if value.is_nan() {
            return Err(AmountError::NotANumber(value.to_string()));
        }
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        if value <= 0.0 {
            return Err(AmountError::NotPositive);
        }
        let cents = (value * CENTS_PER_UNIT as f64).round();
        if !cents.is_finite() || cents > MAX_CENTS as f64 {
            return Err(AmountError::TooLarge);
        }
        Self::from_cents(cents as u64).ok_or(AmountError::NotPositive)
    }

    /// The amount in cents.
    #[must_use]
    pub fn cents(self) -> u64 {
        self.0
    }

    /// The amount as a float, e.g. `2.5` for 250 cents.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_cents(u128::from(self.0)))
    }
}

/// Format a cent count with exactly two decimals, e.g. `550` → `"5.50"`.
#[must_use]
pub fn format_cents(cents: u128) -> String {
    let unit = u128::from(CENTS_PER_UNIT);
    format!("{}.{:02}", cents / unit, cents % unit)
}

/// Parse free-form user input into an amount.
pub fn parse_amount(raw: &str) -> Result<Amount, AmountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned.len() + 1 >= trimmed.len() && unsigned.starts_with("Infinity") {
        return Err(AmountError::NotFinite);
    }

    let prefix = decimal_prefix(trimmed)
        .ok_or_else(|| AmountError::NotANumber(trimmed.to_string()))?;
    let value: f64 = prefix
        .parse()
        .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?;
    Amount::from_f64(value)
}

/// Longest leading `[+-]digits[.digits][(e|E)[+-]digits]` slice with at
/// least one mantissa digit.
fn decimal_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let mut mantissa_digits = pos - int_start;

    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        mantissa_digits += end - frac_start;
        if mantissa_digits > 0 {
            pos = end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && matches!(bytes[end], b'+' | b'-') {
            end += 1;
        }
        let exp_digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > exp_digits_start {
            pos = end;
        }
    }

    Some(&s[..pos])
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Whole amounts are written as integers: `3`, not `3.0`.
        if self.0 % CENTS_PER_UNIT == 0 {
            serializer.serialize_u64(self.0 / CENTS_PER_UNIT)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

struct AmountVisitor;

impl Visitor<'_> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a positive finite number")
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        self.visit_f64(v as f64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        self.visit_f64(v as f64)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        Amount::from_f64(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_f64(AmountVisitor)
    }
}
