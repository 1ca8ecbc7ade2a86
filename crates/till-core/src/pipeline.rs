//! # Receipt Pipeline
//!
//! Composes the six stages into one call.
//!
//! ```text
//! tags ─► format_tags ─► count_barcodes ─► build_cart_items ─► build_promotions
//!                                                                    │
//!        String ◄─ render_receipt ◄─ build_receipt ◄─ calculate_totals
//! ```
//!
//! Every stage takes its input by reference and returns a fresh value, so
//! running the pipeline twice on the same data yields identical receipts.

use tracing::debug;

use crate::cart::build_cart_items;
use crate::error::CoreResult;
use crate::promotion::build_promotions;
use crate::receipt::{build_receipt, render_receipt, Receipt};
use crate::tag::{count_barcodes, format_tags};
use crate::totals::calculate_totals;
use crate::types::{CatalogItem, Promotion};

/// Reference data bound to a pipeline run.
///
/// ## Usage
/// ```rust
/// use till_core::pipeline::ReceiptPipeline;
/// use till_core::{CatalogItem, Money, Promotion, PromotionKind};
///
/// let catalog = vec![CatalogItem::new("ITEM000001", "雪碧", "瓶", Money::from_cents(300))];
/// let promotions = vec![Promotion::new(PromotionKind::BuyTwoGetOneFree, ["ITEM000001"])];
///
/// let pipeline = ReceiptPipeline::new(&catalog, &promotions);
/// let receipt = pipeline.build(&["ITEM000001-3"]).unwrap();
///
/// assert_eq!(receipt.total_pay_price, Money::from_cents(600));
/// assert_eq!(receipt.total_saved, Money::from_cents(300));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReceiptPipeline<'a> {
    catalog: &'a [CatalogItem],
    promotions: &'a [Promotion],
}

impl<'a> ReceiptPipeline<'a> {
    /// Creates a pipeline over already-loaded reference data.
    pub fn new(catalog: &'a [CatalogItem], promotions: &'a [Promotion]) -> Self {
        ReceiptPipeline {
            catalog,
            promotions,
        }
    }

    /// Runs every stage up to the structured receipt.
    pub fn build<S: AsRef<str>>(&self, tags: &[S]) -> CoreResult<Receipt> {
        let formatted = format_tags(tags)?;
        debug!(tags = formatted.len(), "Formatted tags");

        let counted = count_barcodes(&formatted)?;
        debug!(barcodes = counted.len(), "Counted barcodes");

        let cart_items = build_cart_items(&counted, self.catalog)?;
        let promoted = build_promotions(&cart_items, self.promotions)?;
        let totals = calculate_totals(&promoted)?;
        debug!(
            total_pay_price = %totals.total_pay_price,
            total_saved = %totals.total_saved,
            "Calculated totals"
        );

        Ok(build_receipt(&promoted, totals))
    }

    /// Builds the receipt and renders it for `store_name`.
    pub fn print<S: AsRef<str>>(&self, tags: &[S], store_name: &str) -> CoreResult<String> {
        let receipt = self.build(tags)?;
        Ok(render_receipt(&receipt, store_name))
    }
}

/// One-call form of [`ReceiptPipeline::print`].
pub fn print_receipt<S: AsRef<str>>(
    tags: &[S],
    catalog: &[CatalogItem],
    promotions: &[Promotion],
    store_name: &str,
) -> CoreResult<String> {
    ReceiptPipeline::new(catalog, promotions).print(tags, store_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::money::Money;
    use crate::types::PromotionKind;

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("ITEM000001", "雪碧", "瓶", Money::from_cents(300)),
            CatalogItem::new("ITEM000003", "荔枝", "斤", Money::from_cents(1500)),
            CatalogItem::new("ITEM000005", "方便面", "袋", Money::from_cents(450)),
        ]
    }

    fn promotions() -> Vec<Promotion> {
        vec![Promotion::new(
            PromotionKind::BuyTwoGetOneFree,
            ["ITEM000001", "ITEM000005"],
        )]
    }

    #[test]
    fn test_build_receipt_from_tags() {
        let catalog = catalog();
        let promotions = promotions();
        let tags = [
            "ITEM000001",
            "ITEM000001",
            "ITEM000001",
            "ITEM000001",
            "ITEM000001",
            "ITEM000003-2.5",
            "ITEM000005",
            "ITEM000005-2",
        ];

        let receipt = ReceiptPipeline::new(&catalog, &promotions).build(&tags).unwrap();

        assert_eq!(receipt.receipt_items.len(), 3);
        assert_eq!(receipt.total_pay_price, Money::from_cents(5850));
        assert_eq!(receipt.total_saved, Money::from_cents(750));
    }

    #[test]
    fn test_no_tags_yields_empty_receipt() {
        let catalog = catalog();
        let promotions = promotions();
        let receipt = ReceiptPipeline::new(&catalog, &promotions)
            .build::<&str>(&[])
            .unwrap();
        assert!(receipt.is_empty());
        assert!(receipt.total_pay_price.is_zero());
    }

    #[test]
    fn test_errors_abort_without_partial_receipt() {
        let catalog = catalog();
        let promotions = promotions();
        let pipeline = ReceiptPipeline::new(&catalog, &promotions);

        assert!(matches!(
            pipeline.build(&["ITEM000001", "ITEM000002"]),
            Err(CoreError::UnknownBarcode(_))
        ));
        assert!(matches!(
            pipeline.build(&["ITEM000001-x"]),
            Err(CoreError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            ReceiptPipeline::new(&catalog, &[]).build(&["ITEM000001"]),
            Err(CoreError::MissingPromotion(_))
        ));
    }

    #[test]
    fn test_total_overflow_aborts_build() {
        let catalog = vec![
            CatalogItem::new("A", "甲", "个", Money::from_cents(5_000_000_000_000_000_000)),
            CatalogItem::new("B", "乙", "个", Money::from_cents(5_000_000_000_000_000_000)),
        ];
        let promotions = promotions();

        assert!(matches!(
            ReceiptPipeline::new(&catalog, &promotions).build(&["A", "B"]),
            Err(CoreError::AmountOverflow { .. })
        ));
    }

    #[test]
    fn test_unusual_barcode_reaches_catalog_lookup() {
        let catalog = catalog();
        let promotions = promotions();

        assert!(matches!(
            ReceiptPipeline::new(&catalog, &promotions).build(&["ITEM.001"]),
            Err(CoreError::UnknownBarcode(ref b)) if b == "ITEM.001"
        ));
    }

    #[test]
    fn test_print_receipt_is_idempotent() {
        let catalog = catalog();
        let promotions = promotions();
        let tags = vec!["ITEM000005-3".to_string(), "ITEM000003".to_string()];

        let first = print_receipt(&tags, &catalog, &promotions, "没钱赚商店").unwrap();
        let second = print_receipt(&tags, &catalog, &promotions, "没钱赚商店").unwrap();

        assert_eq!(first, second);
        assert!(first.contains("名称：方便面，数量：3袋，单价：4.50(元)，小计：9.00(元)"));
    }
}
