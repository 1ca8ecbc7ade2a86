//! # Cart Builder
//!
//! Joins counted barcodes against the item catalog.
//!
//! ## Price Freezing
//! Each [`CartItem`] copies name, unit and price out of the catalog at build
//! time, so later stages never look the catalog up again.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::quantity::Quantity;
use crate::tag::CountedBarcode;
use crate::types::CatalogItem;
use crate::validation::validate_price_cents;

/// A priced line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub barcode: String,

    /// Item name at time of scanning (frozen).
    pub name: String,

    /// Unit of sale (frozen).
    pub unit: String,

    /// Unit price (frozen).
    pub price: Money,

    /// Total scanned quantity.
    pub count: Quantity,
}

impl CartItem {
    /// Creates a cart line from a catalog item and a quantity.
    pub fn from_catalog(item: &CatalogItem, count: Quantity) -> Self {
        CartItem {
            barcode: item.barcode.clone(),
            name: item.name.clone(),
            unit: item.unit.clone(),
            price: item.price(),
            count,
        }
    }

    /// Calculates the line total (unit price × quantity, rounded to the cent).
    pub fn line_total(&self) -> CoreResult<Money> {
        self.price
            .checked_mul_quantity(self.count)
            .ok_or_else(|| CoreError::AmountOverflow {
                barcode: self.barcode.clone(),
            })
    }
}

fn find_item<'a>(catalog: &'a [CatalogItem], barcode: &str) -> Option<&'a CatalogItem> {
    catalog.iter().find(|item| item.barcode == barcode)
}

/// Builds cart lines in the same order as `counted`.
///
/// ## Errors
/// - [`CoreError::UnknownBarcode`] if a barcode is not in the catalog
/// - [`CoreError::Validation`] if the matched item has a negative price
pub fn build_cart_items(
    counted: &[CountedBarcode],
    catalog: &[CatalogItem],
) -> CoreResult<Vec<CartItem>> {
    counted
        .iter()
        .map(|entry| -> CoreResult<CartItem> {
            let item = find_item(catalog, &entry.barcode)
                .ok_or_else(|| CoreError::UnknownBarcode(entry.barcode.clone()))?;
            validate_price_cents(item.price_cents)?;
            Ok(CartItem::from_catalog(item, entry.count))
        })
        .collect()
}
