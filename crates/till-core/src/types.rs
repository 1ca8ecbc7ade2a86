//! # Reference Data Types
//!
//! Read-only records supplied by the catalog providers.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Reference Data                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────────────┐        │
//! │  │    CatalogItem      │        │         Promotion           │        │
//! │  │  ─────────────────  │        │  ─────────────────────────  │        │
//! │  │  barcode            │◄───────│  type  BUY_TWO_GET_ONE_FREE │        │
//! │  │  name   "雪碧"      │        │  barcodes [ITEM000001, ...] │        │
//! │  │  unit   "瓶"        │        └─────────────────────────────┘        │
//! │  │  price_cents 300    │                                               │
//! │  └─────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both are loaded once per run and never mutated.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Catalog Item
// =============================================================================

/// An item that can be scanned at the till.
///
/// Item files may give the price either as `price_cents` (`300`) or as a
/// decimal `price` (`3.00` or `"3.00"`); it is always written back as
/// `price_cents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalogItem")]
pub struct CatalogItem {
    /// Barcode printed on the item (business identifier).
    pub barcode: String,

    /// Display name shown on the receipt.
    pub name: String,

    /// Unit of sale shown after the quantity (瓶, 斤, 袋...).
    pub unit: String,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,
}

impl CatalogItem {
    /// Creates a catalog item.
    pub fn new(
        barcode: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        price: Money,
    ) -> Self {
        CatalogItem {
            barcode: barcode.into(),
            name: name.into(),
            unit: unit.into(),
            price_cents: price.cents(),
        }
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Wire form of [`CatalogItem`] before the price is resolved.
#[derive(Deserialize)]
struct RawCatalogItem {
    barcode: String,
    name: String,
    unit: String,
    price_cents: Option<i64>,
    price: Option<DecimalPrice>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalPrice {
    Number(f64),
    Text(String),
}

impl DecimalPrice {
    fn to_cents(&self) -> Result<i64, ValidationError> {
        let text = match self {
            DecimalPrice::Number(n) => n.to_string(),
            DecimalPrice::Text(s) => s.trim().to_string(),
        };
        let invalid = |reason: String| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason,
        };

        let value = Decimal::from_str(&text)
            .map_err(|_| invalid(format!("'{}' is not a decimal amount", text)))?
            .normalize();
        if value.scale() > 2 {
            return Err(invalid(format!("'{}' has fractions of a cent", text)));
        }

        value
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .ok_or_else(|| invalid(format!("'{}' is out of range", text)))
    }
}

impl TryFrom<RawCatalogItem> for CatalogItem {
    type Error = ValidationError;

    fn try_from(raw: RawCatalogItem) -> Result<Self, Self::Error> {
        let price_cents = match (raw.price_cents, &raw.price) {
            (Some(cents), None) => cents,
            (None, Some(price)) => price.to_cents()?,
            (Some(_), Some(_)) => {
                return Err(ValidationError::InvalidFormat {
                    field: "price".to_string(),
                    reason: "give either price or price_cents, not both".to_string(),
                })
            }
            (None, None) => {
                return Err(ValidationError::Required {
                    field: "price".to_string(),
                })
            }
        };

        Ok(CatalogItem {
            barcode: raw.barcode,
            name: raw.name,
            unit: raw.unit,
            price_cents,
        })
    }
}

// =============================================================================
// Promotion Kind
// =============================================================================

/// Promotion rules the pricing engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionKind {
    /// Every complete group of three units has one unit free.
    BuyTwoGetOneFree,
}

impl PromotionKind {
    /// Returns the wire name used in promotion catalogs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PromotionKind::BuyTwoGetOneFree => "BUY_TWO_GET_ONE_FREE",
        }
    }
}

impl fmt::Display for PromotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromotionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY_TWO_GET_ONE_FREE" => Ok(PromotionKind::BuyTwoGetOneFree),
            other => Err(ValidationError::InvalidFormat {
                field: "promotion type".to_string(),
                reason: format!("unknown promotion type '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Promotion
// =============================================================================

/// A promotion rule descriptor.
///
/// `kind` is kept as the raw string so catalogs may carry promotion types
/// this build does not know about; they are simply never selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    /// Promotion type name, e.g. `BUY_TWO_GET_ONE_FREE`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Barcodes eligible for this promotion.
    #[serde(default)]
    pub barcodes: Vec<String>,
}

impl Promotion {
    /// Creates a promotion of a known kind.
    pub fn new<I, S>(kind: PromotionKind, barcodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Promotion {
            kind: kind.as_str().to_string(),
            barcodes: barcodes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the parsed kind, or `None` for unrecognized types.
    pub fn kind(&self) -> Option<PromotionKind> {
        self.kind.parse().ok()
    }

    /// Checks whether a barcode is eligible for this promotion.
    pub fn covers(&self, barcode: &str) -> bool {
        self.barcodes.iter().any(|b| b == barcode)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
