//! # Receipt Formatter
//!
//! Builds the structured [`Receipt`] and renders it as text.
//!
//! ## Layout
//! ```text
//! ***<没钱赚商店>收据***
//! 名称：雪碧，数量：5瓶，单价：3.00(元)，小计：12.00(元)
//! 名称：荔枝，数量：2.5斤，单价：15.00(元)，小计：37.50(元)
//! ----------------------
//! 总计：49.50(元)
//! 节省：3.00(元)
//! **********************
//! ```
//!
//! Rendering is pure. Writing the text anywhere (stdout, a file) is the
//! caller's job.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::promotion::PromotedItem;
use crate::quantity::Quantity;
use crate::totals::Totals;

/// Divider between item lines and totals.
pub const SEPARATOR_LINE: &str = "----------------------";

/// Closing banner.
pub const FOOTER_LINE: &str = "**********************";

/// A receipt line. Same as [`PromotedItem`] without the barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    pub name: String,
    pub unit: String,
    pub price: Money,
    pub count: Quantity,
    pub pay_price: Money,
    pub saved: Money,
}

impl From<&PromotedItem> for ReceiptItem {
    fn from(item: &PromotedItem) -> Self {
        ReceiptItem {
            name: item.name.clone(),
            unit: item.unit.clone(),
            price: item.price,
            count: item.count,
            pay_price: item.pay_price,
            saved: item.saved,
        }
    }
}

/// The final priced, discounted cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub receipt_items: Vec<ReceiptItem>,
    pub total_pay_price: Money,
    pub total_saved: Money,
}

impl Receipt {
    /// Renders the receipt for the given store. See [`render_receipt`].
    pub fn render(&self, store_name: &str) -> String {
        render_receipt(self, store_name)
    }

    /// Checks if the receipt has no lines.
    pub fn is_empty(&self) -> bool {
        self.receipt_items.is_empty()
    }
}

/// Builds the receipt from promoted items and their totals.
pub fn build_receipt(items: &[PromotedItem], totals: Totals) -> Receipt {
    Receipt {
        receipt_items: items.iter().map(ReceiptItem::from).collect(),
        total_pay_price: totals.total_pay_price,
        total_saved: totals.total_saved,
    }
}

/// Renders a receipt as fixed-format text.
///
/// Lines are joined with `\n`; there is no trailing newline.
///
/// ## Example
/// ```rust
/// use till_core::receipt::{render_receipt, Receipt};
/// use till_core::Money;
///
/// let empty = Receipt {
///     receipt_items: vec![],
///     total_pay_price: Money::zero(),
///     total_saved: Money::zero(),
/// };
/// let text = render_receipt(&empty, "没钱赚商店");
/// assert!(text.starts_with("***<没钱赚商店>收据***\n"));
/// assert!(text.contains("总计：0.00(元)"));
/// ```
pub fn render_receipt(receipt: &Receipt, store_name: &str) -> String {
    let mut lines = Vec::with_capacity(receipt.receipt_items.len() + 5);

    lines.push(format!("***<{}>收据***", store_name));
    for item in &receipt.receipt_items {
        lines.push(format!(
            "名称：{}，数量：{}{}，单价：{}(元)，小计：{}(元)",
            item.name, item.count, item.unit, item.price, item.pay_price
        ));
    }
    lines.push(SEPARATOR_LINE.to_string());
    lines.push(format!("总计：{}(元)", receipt.total_pay_price));
    lines.push(format!("节省：{}(元)", receipt.total_saved));
    lines.push(FOOTER_LINE.to_string());

    lines.join("\n")
}
