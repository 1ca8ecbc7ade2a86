//! # JSON File Source
//!
//! Reads reference data from a JSON array on disk.
//!
//! ## File Formats
//! ```text
//! items.json                                   promotions.json
//! ──────────                                   ───────────────
//! [                                            [
//!   { "barcode": "ITEM000001",                   { "type": "BUY_TWO_GET_ONE_FREE",
//!     "name": "雪碧",                               "barcodes": ["ITEM000001"] }
//!     "unit": "瓶",                            ]
//!     "price_cents": 300 }
//! ]
//! ```
//!
//! Items may give `"price": 3.00` instead of `price_cents`.
//!
//! The same [`JsonFile`] type serves both roles; which records it yields
//! depends on the trait it is used through.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use till_core::{CatalogItem, Promotion};
use tracing::{debug, info};

use super::{ItemSource, PromotionSource};
use crate::error::{CatalogError, CatalogResult};

/// A JSON reference data file.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_array<T: DeserializeOwned>(&self) -> CatalogResult<Vec<T>> {
        debug!(path = %self.path.display(), "Reading reference data file");

        let content =
            fs::read_to_string(&self.path).map_err(|e| CatalogError::io(&self.path, e))?;

        serde_json::from_str(&content)
            .map_err(|e| CatalogError::parse(self.path.display().to_string(), e))
    }
}

impl ItemSource for JsonFile {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn load_all_items(&self) -> CatalogResult<Vec<CatalogItem>> {
        let items: Vec<CatalogItem> = self.read_array()?;
        info!(path = %self.path.display(), count = items.len(), "Loaded items");
        Ok(items)
    }
}

impl PromotionSource for JsonFile {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn load_promotions(&self) -> CatalogResult<Vec<Promotion>> {
        let promotions: Vec<Promotion> = self.read_array()?;
        info!(path = %self.path.display(), count = promotions.len(), "Loaded promotions");
        Ok(promotions)
    }
}
