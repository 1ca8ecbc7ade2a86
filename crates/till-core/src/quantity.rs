//! # Quantity
//!
//! Scanned quantities, which may be fractional for weighed goods.
//!
//! ## Why Decimal?
//! A tag like `ITEM000003-2.5` means 2.5 jin of lychee. Storing that as a
//! float would leak rounding into every price; instead the quantity is held
//! as an exact base-10 [`Decimal`], so `2.5`, `1.2345` and `1e1` mean
//! exactly what was scanned. Rounding to the cent happens once, when
//! [`Money`](crate::money::Money) prices the line.
//!
//! ```rust
//! use till_core::quantity::Quantity;
//!
//! let q: Quantity = "2.5".parse().unwrap();
//! assert_eq!(q.to_string(), "2.5");
//! assert_eq!(q.whole_units(), 2);
//!
//! let q: Quantity = "1e1".parse().unwrap();
//! assert_eq!(q.to_string(), "10");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Fractional digits in one milli-unit.
const MILLI_SCALE: u32 = 3;

/// A positive quantity, stored as an exact decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Exactly one unit, the implied quantity of a bare barcode tag.
    pub const ONE: Quantity = Quantity(Decimal::ONE);

    /// Wraps a decimal value.
    #[inline]
    pub fn new(value: Decimal) -> Self {
        Quantity(value.normalize())
    }

    /// Creates a quantity from thousandths of a unit (`2500` → `2.5`).
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Decimal::from_i128_with_scale(i128::from(millis), MILLI_SCALE))
    }

    /// Creates a quantity of whole units.
    pub fn from_units(units: u64) -> Self {
        Quantity(Decimal::from(units))
    }

    /// Returns the exact decimal value.
    #[inline]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns the number of complete units (floor).
    ///
    /// Saturates at `u64::MAX` for quantities beyond that range.
    pub fn whole_units(&self) -> u64 {
        self.0.floor().to_u64().unwrap_or(u64::MAX)
    }

    /// Checks if the quantity is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.0).map(Quantity::new)
    }
}

/// Shortest decimal form: `5`, `2.5`, `0.0001`.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Parses a positive decimal such as `3`, `2.5`, `.75`, `1.2345` or `1e1`.
///
/// ## Rules
/// - ASCII digits with an optional `.` and an optional exponent
/// - Must be greater than zero
impl FromStr for Quantity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(invalid_quantity("expected a decimal number"));
        }

        let not_a_number = || invalid_quantity(format!("'{}' is not a decimal number", s));

        if !s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        {
            return Err(not_a_number());
        }

        let parsed = if s.contains(['e', 'E']) {
            Decimal::from_scientific(s)
        } else {
            Decimal::from_str(&pad_bare_point(s))
        };
        let value = parsed.map_err(|_| not_a_number())?;

        if value <= Decimal::ZERO {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }

        Ok(Quantity::new(value))
    }
}

// ".75" → "0.75", "4." → "4"
fn pad_bare_point(s: &str) -> String {
    let s = s.strip_suffix('.').unwrap_or(s);
    match s.strip_prefix('.') {
        Some(fraction) => format!("0.{}", fraction),
        None => s.to_string(),
    }
}

fn invalid_quantity(reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "quantity".to_string(),
        reason: reason.into(),
    }
}

/// Serialized as its decimal string (`"2.5"`) so no precision is lost.
impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Quantity {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!(parse("3"), Quantity::from_units(3));
        assert_eq!(parse("2.5"), Quantity::from_millis(2500));
        assert_eq!(parse("0.125"), Quantity::from_millis(125));
        assert_eq!(parse(".75"), Quantity::from_millis(750));
        assert_eq!(parse("4."), Quantity::from_units(4));
        assert_eq!(parse(" 2 "), Quantity::from_units(2));
    }

    #[test]
    fn test_parse_keeps_full_precision() {
        assert_eq!(parse("1.2345").to_string(), "1.2345");
        assert_eq!(parse("0.0001").to_string(), "0.0001");
        assert!(!parse("0.0001").is_zero());
    }

    #[test]
    fn test_parse_exponent_form() {
        assert_eq!(parse("1e1"), Quantity::from_units(10));
        assert_eq!(parse("2.5E2"), Quantity::from_units(250));
        assert_eq!(parse("25e-1"), Quantity::from_millis(2500));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", ".", "abc", "2.5kg", "1.2.3", "2-3", "NaN", "inf", "1e"] {
            let err = bad.parse::<Quantity>().unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { .. }),
                "expected InvalidFormat for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        let err = "0".parse::<Quantity>().unwrap_err();
        assert!(matches!(err, ValidationError::MustBePositive { .. }));
        assert!("0.000".parse::<Quantity>().is_err());
        assert!("-1".parse::<Quantity>().is_err());
    }

    #[test]
    fn test_parse_rejects_unrepresentable() {
        assert!("9".repeat(40).parse::<Quantity>().is_err());
    }

    #[test]
    fn test_display_shortest_form() {
        assert_eq!(Quantity::from_units(5).to_string(), "5");
        assert_eq!(Quantity::from_millis(2500).to_string(), "2.5");
        assert_eq!(Quantity::from_millis(1250).to_string(), "1.25");
        assert_eq!(Quantity::from_millis(5).to_string(), "0.005");
    }

    #[test]
    fn test_whole_units_floors() {
        assert_eq!(Quantity::from_millis(2999).whole_units(), 2);
        assert_eq!(Quantity::from_millis(3000).whole_units(), 3);
        assert_eq!(Quantity::ONE.whole_units(), 1);
        assert_eq!(parse("50000000000000000000000000000").whole_units(), u64::MAX);
    }

    #[test]
    fn test_checked_add() {
        let sum = Quantity::ONE.checked_add(Quantity::from_millis(500)).unwrap();
        assert_eq!(sum, Quantity::from_millis(1500));

        let big = parse("50000000000000000000000000000");
        assert!(big.checked_add(big).is_none());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Quantity::from_millis(2500)).unwrap();
        assert_eq!(json, "\"2.5\"");

        let parsed: Quantity = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(parsed, Quantity::from_units(3));
    }
}
