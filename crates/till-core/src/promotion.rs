//! # Promotion Engine
//!
//! Applies the "buy two get one free" rule to cart lines.
//!
//! ## Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BUY_TWO_GET_ONE_FREE                                                   │
//! │                                                                         │
//! │  count = 5 bottles @ 3.00, eligible                                     │
//! │    free_units = floor(5 / 3) = 1                                        │
//! │    saved      = 3.00 × 1     = 3.00                                     │
//! │    pay_price  = 15.00 - 3.00 = 12.00                                    │
//! │                                                                         │
//! │  count = 2.9 jin, eligible                                              │
//! │    free_units = floor(2.9 / 3) = 0   (partial triples earn nothing)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::quantity::Quantity;
use crate::types::{Promotion, PromotionKind};

/// Units in one "buy two get one free" group.
pub const FREE_UNIT_GROUP_SIZE: u64 = 3;

/// A cart line with its discount applied.
///
/// ## Invariants
/// - `pay_price == price × count - saved`
/// - `saved >= 0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotedItem {
    pub barcode: String,
    pub name: String,
    pub unit: String,
    pub price: Money,
    pub count: Quantity,
    pub pay_price: Money,
    pub saved: Money,
}

/// Finds the first promotion of the given kind.
pub fn find_promotion(promotions: &[Promotion], kind: PromotionKind) -> CoreResult<&Promotion> {
    promotions
        .iter()
        .find(|p| p.kind() == Some(kind))
        .ok_or_else(|| CoreError::MissingPromotion(kind.as_str().to_string()))
}

/// Number of free units earned by `count` units.
#[inline]
pub fn free_units(count: Quantity) -> u64 {
    count.whole_units() / FREE_UNIT_GROUP_SIZE
}

/// Prices a single cart line under `promotion`.
pub fn apply_buy_two_get_one_free(item: &CartItem, promotion: &Promotion) -> CoreResult<PromotedItem> {
    let overflow = || CoreError::AmountOverflow {
        barcode: item.barcode.clone(),
    };

    let line_total = item.line_total()?;
    let saved = if promotion.covers(&item.barcode) {
        item.price
            .checked_mul_units(free_units(item.count))
            .ok_or_else(overflow)?
    } else {
        Money::zero()
    };
    let pay_price = line_total.checked_sub(saved).ok_or_else(overflow)?;

    Ok(PromotedItem {
        barcode: item.barcode.clone(),
        name: item.name.clone(),
        unit: item.unit.clone(),
        price: item.price,
        count: item.count,
        pay_price,
        saved,
    })
}

/// Applies the buy-two-get-one-free promotion to every cart line.
///
/// ## Errors
/// - [`CoreError::MissingPromotion`] if `promotions` has no
///   `BUY_TWO_GET_ONE_FREE` entry, even when no item would be eligible
pub fn build_promotions(
    cart_items: &[CartItem],
    promotions: &[Promotion],
) -> CoreResult<Vec<PromotedItem>> {
    let promotion = find_promotion(promotions, PromotionKind::BuyTwoGetOneFree)?;

    cart_items
        .iter()
        .map(|item| apply_buy_two_get_one_free(item, promotion))
        .collect()
}
