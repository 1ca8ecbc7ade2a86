//! # Tag Formatting & Barcode Aggregation
//!
//! First two stages of the receipt pipeline.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Raw tags                 format_tags            count_barcodes         │
//! │  ────────                 ───────────            ──────────────         │
//! │  "ITEM000001"      ──►    (ITEM000001, 1)   ┐                           │
//! │  "ITEM000001"      ──►    (ITEM000001, 1)   ├──► (ITEM000001, 2)        │
//! │  "ITEM000003-2.5"  ──►    (ITEM000003, 2.5) ┴──► (ITEM000003, 2.5)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::quantity::Quantity;
use crate::BARCODE_QUANTITY_SEPARATOR;

/// A scanned tag normalized to barcode and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTag {
    pub barcode: String,
    pub count: Quantity,
}

/// One entry per distinct barcode, quantities summed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountedBarcode {
    pub barcode: String,
    pub count: Quantity,
}

/// Parses a single raw tag.
///
/// ## Rules
/// - `barcode` → quantity 1
/// - `barcode-quantity` → split at the first `-`; quantity is a positive decimal
/// - The barcode is opaque: any non-empty text is accepted here and resolved
///   against the catalog later
///
/// ## Example
/// ```rust
/// use till_core::tag::format_tag;
///
/// let tag = format_tag("ITEM000003-2.5").unwrap();
/// assert_eq!(tag.barcode, "ITEM000003");
/// assert_eq!(tag.count.to_string(), "2.5");
///
/// assert!(format_tag("ITEM000003-two").is_err());
/// ```
pub fn format_tag(raw: &str) -> CoreResult<FormattedTag> {
    let tag = raw.trim();

    let (barcode, count) = match tag.split_once(BARCODE_QUANTITY_SEPARATOR) {
        Some((barcode, quantity)) => {
            let count = quantity
                .parse::<Quantity>()
                .map_err(|e| CoreError::InvalidQuantity {
                    tag: tag.to_string(),
                    reason: e.to_string(),
                })?;
            (barcode, count)
        }
        None => (tag, Quantity::ONE),
    };

    if barcode.is_empty() {
        return Err(ValidationError::Required {
            field: "barcode".to_string(),
        }
        .into());
    }

    Ok(FormattedTag {
        barcode: barcode.to_string(),
        count,
    })
}

/// Parses every raw tag, preserving scan order.
///
/// Fails on the first malformed tag.
pub fn format_tags<S: AsRef<str>>(tags: &[S]) -> CoreResult<Vec<FormattedTag>> {
    tags.iter().map(|tag| format_tag(tag.as_ref())).collect()
}

/// Merges duplicate barcodes, summing their quantities.
///
/// Output order is the order in which each barcode was first scanned.
/// Fails with [`CoreError::QuantityOverflow`] if a sum is not representable.
pub fn count_barcodes(formatted_tags: &[FormattedTag]) -> CoreResult<Vec<CountedBarcode>> {
    formatted_tags.iter().try_fold(
        Vec::new(),
        |mut counted: Vec<CountedBarcode>, tag| -> CoreResult<Vec<CountedBarcode>> {
            match counted.iter_mut().find(|c| c.barcode == tag.barcode) {
                Some(existing) => {
                    existing.count = existing.count.checked_add(tag.count).ok_or_else(|| {
                        CoreError::QuantityOverflow {
                            barcode: tag.barcode.clone(),
                        }
                    })?;
                }
                None => counted.push(CountedBarcode {
                    barcode: tag.barcode.clone(),
                    count: tag.count,
                }),
            }
            Ok(counted)
        },
    )
}
