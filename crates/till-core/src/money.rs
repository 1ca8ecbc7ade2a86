//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Weighed produce makes it worse:                                        │
//! │    15.00 × 2.5 kg, summed over a cart, drifts by fractions of a fen     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents × Exact Decimal Quantity                   │
//! │    1500 cents × 2.5 = 3750.0 → 3750 cents (37.50)                       │
//! │    Rounding happens exactly once per line, half away from zero         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//! use till_core::quantity::Quantity;
//!
//! let price = Money::from_cents(1500); // 15.00
//! let weight: Quantity = "2.5".parse().unwrap();
//!
//! let line_total = price.checked_mul_quantity(weight).unwrap();
//! assert_eq!(line_total.cents(), 3750);
//! assert_eq!(line_total.to_string(), "37.50");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::quantity::Quantity;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (fen / cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows the subtraction `line_total - saved` without
///   a separate unsigned type
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialization**: as the raw cent count (`300` for 3.00)
///
/// ## Where Money Flows
/// ```text
/// CatalogItem.price_cents ──► CartItem.price ──► PromotedItem.pay_price/saved
///                                                        │
///                                                        ▼
///                                  Totals ──► Receipt ──► "小计：12.00(元)"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_cents(450); // Represents 4.50
    /// assert_eq!(price.cents(), 450);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a (possibly fractional) quantity.
    ///
    /// The exact decimal product is rounded half away from zero to the
    /// nearest cent. Returns `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    /// use till_core::quantity::Quantity;
    ///
    /// let apples = Money::from_cents(550); // 5.50 / jin
    /// let total = apples.checked_mul_quantity(Quantity::from_millis(1_500));
    /// assert_eq!(total, Some(Money::from_cents(825)));
    ///
    /// // 0.333 jin of lychee at 15.00 = 4.995 → 5.00
    /// let lychee = Money::from_cents(1500);
    /// let total = lychee.checked_mul_quantity(Quantity::from_millis(333));
    /// assert_eq!(total, Some(Money::from_cents(500)));
    /// ```
    pub fn checked_mul_quantity(&self, qty: Quantity) -> Option<Money> {
        Decimal::from(self.0)
            .checked_mul(qty.as_decimal())?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Money)
    }

    /// Multiplies money by a whole number of units.
    ///
    /// Returns `None` on overflow.
    #[inline]
    pub fn checked_mul_units(&self, units: u64) -> Option<Money> {
        let units = i64::try_from(units).ok()?;
        self.0.checked_mul(units).map(Money)
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Checked subtraction. Returns `None` on overflow.
    #[inline]
    pub fn checked_sub(&self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders a plain two-decimal amount: `3.00`, `37.50`, `-5.50`.
///
/// ## Note
/// No currency symbol; the receipt appends `(元)` itself.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.to_string(), "10.99");
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(300).to_string(), "3.00");
        assert_eq!(Money::from_cents(3750).to_string(), "37.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(450);

        assert_eq!((a + b).cents(), 1450);
        assert_eq!((a - b).cents(), 550);
        assert_eq!((b * 3).cents(), 1350);
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::from_cents(1200),
            Money::from_cents(3750),
            Money::from_cents(900),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 5850);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_mul_quantity_whole_units() {
        let price = Money::from_cents(300);
        let total = price.checked_mul_quantity(Quantity::from_units(5)).unwrap();
        assert_eq!(total.cents(), 1500);
    }

    #[test]
    fn test_mul_quantity_rounds_half_up() {
        // 1 cent × 0.5 = 0.5 cent → 1 cent
        let one_cent = Money::from_cents(1);
        let total = one_cent.checked_mul_quantity(Quantity::from_millis(500)).unwrap();
        assert_eq!(total.cents(), 1);

        // 1 cent × 0.499 = 0.499 cent → 0 cents
        let total = one_cent.checked_mul_quantity(Quantity::from_millis(499)).unwrap();
        assert_eq!(total.cents(), 0);

        // Negative amounts round away from zero
        let refund = Money::from_cents(-1);
        let total = refund.checked_mul_quantity(Quantity::from_millis(500)).unwrap();
        assert_eq!(total.cents(), -1);
    }

    #[test]
    fn test_mul_quantity_overflow() {
        let huge = Money::from_cents(i64::MAX);
        assert!(huge.checked_mul_quantity(Quantity::from_units(2)).is_none());
        let big: Quantity = "50000000000000000000000000000".parse().unwrap();
        assert!(Money::from_cents(300).checked_mul_quantity(big).is_none());
        assert!(huge.checked_mul_units(2).is_none());
        assert!(Money::from_cents(1).checked_mul_units(u64::MAX).is_none());
    }

    #[test]
    fn test_mul_quantity_beyond_three_decimals() {
        // 15.00 × 1.2345 = 18.5175 → 18.52
        let lychee = Money::from_cents(1500);
        let total = lychee.checked_mul_quantity("1.2345".parse().unwrap()).unwrap();
        assert_eq!(total.cents(), 1852);

        let total = lychee.checked_mul_quantity("1e1".parse().unwrap()).unwrap();
        assert_eq!(total.cents(), 15000);
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(1500);
        assert_eq!(a.checked_add(Money::from_cents(300)), Some(Money::from_cents(1800)));
        assert!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)).is_none());
    }

    #[test]
    fn test_checked_sub() {
        let a = Money::from_cents(1500);
        assert_eq!(a.checked_sub(Money::from_cents(300)), Some(Money::from_cents(1200)));
        assert!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)).is_none());
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(450)).unwrap();
        assert_eq!(json, "450");
    }
}
