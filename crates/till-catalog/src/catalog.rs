//! Validated reference data bundle.

use till_core::validation::{validate_catalog, validate_promotions};
use till_core::{CatalogItem, Promotion, ReceiptPipeline};
use tracing::info;

use crate::error::{CatalogError, CatalogResult};
use crate::source::{Fixtures, ItemSource, PromotionSource};

/// Items and promotions that passed validation.
///
/// ## Usage
/// ```rust
/// use till_catalog::Catalog;
///
/// let catalog = Catalog::builtin().unwrap();
/// let receipt = catalog.pipeline().build(&["ITEM000001-3"]).unwrap();
///
/// assert_eq!(receipt.total_saved.to_string(), "3.00");
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    promotions: Vec<Promotion>,
}

impl Catalog {
    /// Loads and validates both halves of the reference data.
    pub fn load<I, P>(items: &I, promotions: &P) -> CatalogResult<Self>
    where
        I: ItemSource + ?Sized,
        P: PromotionSource + ?Sized,
    {
        let loaded_items = items.load_all_items()?;
        validate_catalog(&loaded_items).map_err(|e| CatalogError::invalid(items.origin(), e))?;

        let loaded_promotions = promotions.load_promotions()?;
        validate_promotions(&loaded_promotions)
            .map_err(|e| CatalogError::invalid(promotions.origin(), e))?;

        info!(
            items = loaded_items.len(),
            promotions = loaded_promotions.len(),
            "Catalog ready"
        );

        Ok(Catalog {
            items: loaded_items,
            promotions: loaded_promotions,
        })
    }

    /// The compiled-in kata catalog.
    pub fn builtin() -> CatalogResult<Self> {
        Self::load(&Fixtures, &Fixtures)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    /// A receipt pipeline bound to this catalog.
    pub fn pipeline(&self) -> ReceiptPipeline<'_> {
        ReceiptPipeline::new(&self.items, &self.promotions)
    }
}
