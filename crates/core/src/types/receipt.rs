//! Wire payload for a finished order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::item::CartItem;

/// Snapshot of one cart line inside a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub name: String,
    #[serde(rename = "priceValue")]
    pub price_value: Decimal,
    pub qty: u32,
}

impl From<&CartItem> for ReceiptItem {
    fn from(item: &CartItem) -> Self {
        Self {
            name: item.name.clone(),
            price_value: item.unit_price,
            qty: item.quantity,
        }
    }
}

/// Payload submitted to the receipt store at checkout.
///
/// Carries no timestamp: the store assigns the authoritative one on
/// insert and never trusts client clocks. Immutable once written
/// server-side; there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptPayload {
    /// Delivery zone label, e.g. "Sto. Niño".
    pub location: String,
    pub delivery_fee: Decimal,
    pub grand_total: Decimal,
    pub items: Vec<ReceiptItem>,
}
