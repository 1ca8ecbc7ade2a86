//! # Totals Calculator
//!
//! Sums payable amounts and savings across promoted cart lines. With integer
//! cents the result does not depend on summation order.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::promotion::PromotedItem;

/// Receipt totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_pay_price: Money,
    pub total_saved: Money,
}

/// Sums `pay_price` and `saved` over all items.
///
/// Fails with [`CoreError::AmountOverflow`] naming the line whose amount
/// no longer fits.
pub fn calculate_totals(items: &[PromotedItem]) -> CoreResult<Totals> {
    items
        .iter()
        .try_fold(Totals::default(), |acc, item| -> CoreResult<Totals> {
            let overflow = || CoreError::AmountOverflow {
                barcode: item.barcode.clone(),
            };
            Ok(Totals {
                total_pay_price: acc
                    .total_pay_price
                    .checked_add(item.pay_price)
                    .ok_or_else(overflow)?,
                total_saved: acc.total_saved.checked_add(item.saved).ok_or_else(overflow)?,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantity;

    fn promoted(pay_cents: i64, saved_cents: i64) -> PromotedItem {
        promoted_as("ITEM000001", pay_cents, saved_cents)
    }

    fn promoted_as(barcode: &str, pay_cents: i64, saved_cents: i64) -> PromotedItem {
        PromotedItem {
            barcode: barcode.to_string(),
            name: "雪碧".to_string(),
            unit: "瓶".to_string(),
            price: Money::from_cents(300),
            count: Quantity::ONE,
            pay_price: Money::from_cents(pay_cents),
            saved: Money::from_cents(saved_cents),
        }
    }

    #[test]
    fn test_calculate_totals() {
        let totals = calculate_totals(&[promoted(1200, 300), promoted(3750, 0), promoted(900, 450)]).unwrap();
        assert_eq!(totals.total_pay_price, Money::from_cents(5850));
        assert_eq!(totals.total_saved, Money::from_cents(750));
    }

    #[test]
    fn test_empty_totals_are_zero() {
        assert_eq!(calculate_totals(&[]).unwrap(), Totals::default());
    }

    #[test]
    fn test_order_independent() {
        let mut items = vec![promoted(1, 0), promoted(2, 1), promoted(3, 2)];
        let forward = calculate_totals(&items).unwrap();
        items.reverse();
        assert_eq!(calculate_totals(&items).unwrap(), forward);
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let half = 5_000_000_000_000_000_000;
        let items = [promoted_as("A", half, 0), promoted_as("B", half, 0)];

        assert!(matches!(
            calculate_totals(&items),
            Err(CoreError::AmountOverflow { ref barcode }) if barcode == "B"
        ));
    }

    #[test]
    fn test_saved_overflow_is_an_error() {
        let items = [promoted_as("A", 0, i64::MAX), promoted_as("B", 0, 1)];
        assert!(calculate_totals(&items).is_err());
    }
}
