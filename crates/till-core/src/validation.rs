//! # Validation Module
//!
//! Input validation utilities for tags and reference data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog load (till-catalog)                                  │
//! │  ├── validate_catalog: names, units, prices, unique barcodes           │
//! │  └── validate_promotions: type names, barcode format                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Tag formatting (till-core::tag)                              │
//! │  ├── scanned barcode must be non-empty (format is not checked)         │
//! │  └── Quantity::from_str on every quantity suffix                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart building                                                │
//! │  └── validate_price_cents on the matched item                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::validation::{validate_barcode, validate_price_cents};
//!
//! validate_barcode("ITEM000001").unwrap();
//! validate_price_cents(300).unwrap();
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::{CatalogItem, Promotion};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest barcode accepted.
pub const MAX_BARCODE_LEN: usize = 50;

/// Longest item name accepted (in characters, not bytes).
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a barcode.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_BARCODE_LEN`] characters
/// - Only letters, digits and underscores (`-` is the tag quantity separator)
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_barcode;
///
/// assert!(validate_barcode("ITEM000001").is_ok());
/// assert!(validate_barcode("").is_err());
/// assert!(validate_barcode("ITEM-1").is_err());
/// ```
pub fn validate_barcode(barcode: &str) -> ValidationResult<()> {
    if barcode.is_empty() {
        return Err(ValidationError::Required {
            field: "barcode".to_string(),
        });
    }

    if barcode.chars().count() > MAX_BARCODE_LEN {
        return Err(ValidationError::TooLong {
            field: "barcode".to_string(),
            max: MAX_BARCODE_LEN,
        });
    }

    if !barcode.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::InvalidFormat {
            field: "barcode".to_string(),
            reason: "must contain only letters, numbers, and underscores".to_string(),
        });
    }

    Ok(())
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates an item name shown on the receipt.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, MAX_NAME_LEN)
}

/// Validates a unit label (瓶, 斤...).
pub fn validate_unit(unit: &str) -> ValidationResult<()> {
    validate_text("unit", unit, 20)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(450).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates a whole item catalog.
///
/// Every item must pass the field validators, and barcodes must be unique
/// so that each scanned barcode resolves to exactly one item.
pub fn validate_catalog(items: &[CatalogItem]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        validate_barcode(&item.barcode)?;
        validate_item_name(&item.name)?;
        validate_unit(&item.unit)?;
        validate_price_cents(item.price_cents)?;

        if !seen.insert(item.barcode.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "barcode".to_string(),
                value: item.barcode.clone(),
            });
        }
    }

    Ok(())
}

/// Validates a promotion catalog.
///
/// Unknown promotion types are allowed; they are ignored by the engine.
pub fn validate_promotions(promotions: &[Promotion]) -> ValidationResult<()> {
    for promotion in promotions {
        if promotion.kind.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "promotion type".to_string(),
            });
        }

        for barcode in &promotion.barcodes {
            validate_barcode(barcode)?;
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::PromotionKind;

    fn item(barcode: &str, price_cents: i64) -> CatalogItem {
        CatalogItem::new(barcode, "雪碧", "瓶", Money::from_cents(price_cents))
    }

    #[test]
    fn test_validate_barcode() {
        assert!(validate_barcode("ITEM000001").is_ok());
        assert!(validate_barcode("123456").is_ok());
        assert!(validate_barcode("item_1").is_ok());

        assert!(validate_barcode("").is_err());
        assert!(validate_barcode("has space").is_err());
        assert!(validate_barcode("ITEM-000001").is_err());
        assert!(validate_barcode(&"A".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("方便面").is_ok());
        assert!(validate_item_name("   ").is_err());
        // 200 CJK characters are 600 bytes but still within the limit
        assert!(validate_item_name(&"荔".repeat(200)).is_ok());
        assert!(validate_item_name(&"荔".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1500).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_catalog_rejects_duplicates() {
        let items = vec![item("ITEM000001", 300), item("ITEM000001", 350)];
        let err = validate_catalog(&items).unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { ref value, .. } if value == "ITEM000001"));
    }

    #[test]
    fn test_validate_catalog_rejects_negative_price() {
        let items = vec![item("ITEM000001", -300)];
        assert!(matches!(
            validate_catalog(&items),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_validate_catalog_ok() {
        let items = vec![item("ITEM000001", 300), item("ITEM000005", 450)];
        assert!(validate_catalog(&items).is_ok());
        assert!(validate_catalog(&[]).is_ok());
    }

    #[test]
    fn test_validate_promotions() {
        let ok = vec![Promotion::new(PromotionKind::BuyTwoGetOneFree, ["ITEM000001"])];
        assert!(validate_promotions(&ok).is_ok());

        let unknown_type = vec![Promotion {
            kind: "HALF_PRICE".to_string(),
            barcodes: vec![],
        }];
        assert!(validate_promotions(&unknown_type).is_ok());

        let empty_type = vec![Promotion {
            kind: " ".to_string(),
            barcodes: vec![],
        }];
        assert!(validate_promotions(&empty_type).is_err());

        let bad_barcode = vec![Promotion::new(PromotionKind::BuyTwoGetOneFree, ["BAD CODE"])];
        assert!(validate_promotions(&bad_barcode).is_err());
    }
}
