//! Built-in reference data.
//!
//! The six-item kata catalog and its buy-two-get-one-free list, compiled
//! into the binary from `fixtures/*.json`.

use till_core::{CatalogItem, Promotion};
use tracing::debug;

use super::{ItemSource, PromotionSource};
use crate::error::{CatalogError, CatalogResult};

const ITEMS_JSON: &str = include_str!("../../fixtures/items.json");
const PROMOTIONS_JSON: &str = include_str!("../../fixtures/promotions.json");

const ITEMS_ORIGIN: &str = "built-in items";
const PROMOTIONS_ORIGIN: &str = "built-in promotions";

/// Compiled-in catalog and promotions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fixtures;

impl ItemSource for Fixtures {
    fn origin(&self) -> String {
        ITEMS_ORIGIN.to_string()
    }

    fn load_all_items(&self) -> CatalogResult<Vec<CatalogItem>> {
        let items: Vec<CatalogItem> = serde_json::from_str(ITEMS_JSON)
            .map_err(|e| CatalogError::parse(ITEMS_ORIGIN, e))?;
        debug!(count = items.len(), "Loaded built-in items");
        Ok(items)
    }
}

impl PromotionSource for Fixtures {
    fn origin(&self) -> String {
        PROMOTIONS_ORIGIN.to_string()
    }

    fn load_promotions(&self) -> CatalogResult<Vec<Promotion>> {
        serde_json::from_str(PROMOTIONS_JSON).map_err(|e| CatalogError::parse(PROMOTIONS_ORIGIN, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use till_core::validation::{validate_catalog, validate_promotions};
    use till_core::{Money, PromotionKind};

    #[test]
    fn test_builtin_items() {
        let items = Fixtures.load_all_items().unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0].barcode, "ITEM000000");
        assert_eq!(items[0].name, "可口可乐");
        assert_eq!(items[3].price(), Money::from_cents(1500));
        assert_eq!(items[5].unit, "袋");
        validate_catalog(&items).unwrap();
    }

    #[test]
    fn test_builtin_promotions() {
        let promotions = Fixtures.load_promotions().unwrap();
        assert_eq!(promotions.len(), 1);
        assert_eq!(promotions[0].kind(), Some(PromotionKind::BuyTwoGetOneFree));
        assert!(promotions[0].covers("ITEM000005"));
        assert!(!promotions[0].covers("ITEM000003"));
        validate_promotions(&promotions).unwrap();
    }
}
