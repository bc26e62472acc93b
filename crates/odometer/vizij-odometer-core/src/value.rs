//! Raw odometer inputs and their normalization into non-negative numbers.
//!
//! Hosts hand the odometer either a number or numeric text. Numbers are taken
//! as-is (fractions preserved); text is read as a base-10 integer prefix, so a
//! fractional part in text is truncated rather than rounded.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value exactly as supplied by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{n}"),
            RawValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<u64> for RawValue {
    fn from(n: u64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

/// Outcome of normalizing one input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Normalized {
    /// Finite, non-negative value.
    Value(f64),
    /// No input was supplied.
    Absent,
    /// Input was supplied but is negative, NaN, infinite, or not numeric.
    Invalid,
}

impl Normalized {
    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Normalized::Value(v) => Some(v),
            Normalized::Absent | Normalized::Invalid => None,
        }
    }

    #[inline]
    pub fn is_invalid(self) -> bool {
        matches!(self, Normalized::Invalid)
    }
}

/// Normalize a raw input.
///
/// - `None` -> `Absent`
/// - `Number(n)` -> `Value(n)` when `n` is finite and `n >= 0`
/// - `Text(s)` -> the integer prefix of `s`, then the numeric rule above
pub fn normalize(raw: Option<&RawValue>) -> Normalized {
    match raw {
        None => Normalized::Absent,
        Some(RawValue::Number(n)) => {
            if n.is_finite() && *n >= 0.0 {
                Normalized::Value(*n)
            } else {
                Normalized::Invalid
            }
        }
        Some(RawValue::Text(s)) => match parse_leading_integer(s) {
            Some(n) => normalize(Some(&RawValue::Number(n))),
            None => Normalized::Invalid,
        },
    }
}

/// Parse the base-10 integer prefix of `s`.
///
/// Leading whitespace and a single `+`/`-` sign are accepted; parsing stops at
/// the first non-digit. Returns `None` when no digit follows the sign.
pub fn parse_leading_integer(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude: f64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Canonical base-10 text of `|value|`.
///
/// Uses the shortest representation that round-trips, never exponent notation.
pub fn format_number(value: f64) -> String {
    format!("{}", value.abs())
}
