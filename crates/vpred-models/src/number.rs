//! Numeric coercion of raw form input.
//!
//! Raw numeric inputs are coerced the way a browser's `Number(...)` would,
//! except that empty input is invalid rather than zero. Anything that does
//! not yield a finite number becomes the invalid sentinel, which serializes
//! as JSON `null`.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A coerced numeric form value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WireNumber(Option<f64>);

impl WireNumber {
    /// The invalid-number sentinel.
    pub const INVALID: WireNumber = WireNumber(None);

    /// Wrap a value; non-finite values become the sentinel.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(Some(value))
        } else {
            Self::INVALID
        }
    }

    /// Coerce raw input text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::INVALID;
        }

        if let Some(value) = parse_prefixed_integer(trimmed) {
            return value.map(Self::new).unwrap_or(Self::INVALID);
        }

        trimmed
            .parse::<f64>()
            .map(Self::new)
            .unwrap_or(Self::INVALID)
    }

    pub fn value(&self) -> Option<f64> {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }
}

/// Parse `0x`/`0o`/`0b` literals.
///
/// Returns `None` when the input has no radix prefix, `Some(None)` when the
/// prefix is present but the digits are malformed.
fn parse_prefixed_integer(s: &str) -> Option<Option<f64>> {
    let radix = match s.get(..2)?.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }

    // Long literals lose precision instead of overflowing.
    let value = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0_f64, |acc, d| acc * f64::from(radix) + f64::from(d));
    Some(Some(value))
}

impl Serialize for WireNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            None => serializer.serialize_none(),
            // Whole numbers go out as JSON integers (`5000`, not `5000.0`).
            Some(v) if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(v as i64)
            }
            Some(v) => serializer.serialize_f64(v),
        }
    }
}

/// What to do with numeric input that does not coerce to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumericPolicy {
    /// Send the invalid sentinel as JSON `null`.
    #[default]
    Lenient,
    /// Reject the submission before any request is made.
    Strict,
}

impl NumericPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericPolicy::Lenient => "lenient",
            NumericPolicy::Strict => "strict",
        }
    }
}

impl fmt::Display for NumericPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NumericPolicy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(NumericPolicy::Lenient),
            "strict" => Ok(NumericPolicy::Strict),
            _ => Err(ModelError::UnknownPolicy(s.to_string())),
        }
    }
}
