//! Fixed-point monetary type with 2 decimal places precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so slip and PIX
//! amounts are always centavo-exact, never floating-point approximations.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A monetary amount that maintains exactly 2 decimal places of precision.
///
/// This type wraps `rust_decimal::Decimal` and enforces a consistent scale,
/// which is also the exact textual form the PIX amount field requires
/// (decimal point, two fractional digits, no locale separators).
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use slip_codec::Money2;
///
/// let amount = Money2::from_str("100.5").unwrap();
/// assert_eq!(amount.to_string(), "100.50");
/// assert_eq!(amount.cents(), 10050);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money2(Decimal);

impl Money2 {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money2(Decimal::ZERO);

    /// Creates a new `Money2` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Money2(normalized)
    }

    /// Returns `true` if this amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// The amount in the smallest currency unit: value × 100, truncated.
    ///
    /// Amounts too large for the slip layout's 10-digit field overflow
    /// silently; the layout has no wider representation.
    pub fn cents(&self) -> i64 {
        (self.0 * Decimal::from(100)).trunc().to_i64().unwrap_or(0)
    }
}

impl FromStr for Money2 {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)?;
        Ok(Money2::new(decimal))
    }
}

impl fmt::Display for Money2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Money2 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:.2}", self.0))
    }
}

impl<'de> Deserialize<'de> for Money2 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money2::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_normalizes_scale() {
        let m = Money2::from_str("1").unwrap();
        assert_eq!(m.to_string(), "1.00");

        let m = Money2::from_str("100.5").unwrap();
        assert_eq!(m.to_string(), "100.50");

        let m = Money2::from_str("  2.75  ").unwrap();
        assert_eq!(m.to_string(), "2.75");
    }

    #[test]
    fn test_cents() {
        assert_eq!(Money2::from_str("100.50").unwrap().cents(), 10050);
        assert_eq!(Money2::from_str("0.01").unwrap().cents(), 1);
        assert_eq!(Money2::from_str("999999.99").unwrap().cents(), 99999999);
        assert_eq!(Money2::ZERO.cents(), 0);
    }

    #[test]
    fn test_is_positive() {
        assert!(Money2::from_str("0.01").unwrap().is_positive());
        assert!(!Money2::ZERO.is_positive());
        assert!(!Money2::from_str("-1.00").unwrap().is_positive());
    }

    #[test]
    fn test_zero_constant() {
        assert_eq!(Money2::ZERO.to_string(), "0.00");
    }
}
