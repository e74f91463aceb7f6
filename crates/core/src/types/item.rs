//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single line in the cart.
///
/// The item name is the unique key within a cart: adding an item whose
/// name already exists increments the existing line instead of creating
/// a new one. Quantity is never zero - a line decremented below one is
/// removed from the cart entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Display name, unique within a cart.
    pub name: String,
    /// Price for a single unit.
    #[serde(rename = "priceValue")]
    pub unit_price: Decimal,
    /// Number of units, always >= 1.
    #[serde(rename = "qty")]
    pub quantity: u32,
}

impl CartItem {
    /// Create a new line with quantity 1.
    #[must_use]
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
