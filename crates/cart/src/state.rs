//! Cart state: items, delivery fee, selected location.
//!
//! All mutations run synchronously inside one UI event; the state is a
//! plain owned value, so there is nothing to lock.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use nanocafe_core::CartItem;

/// A selectable delivery zone.
///
/// The `id` is the select-option value from the page; the `label` is the
/// human-readable zone name shown on receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub label: String,
}

/// Direction of a quantity-button click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Increment,
    Decrement,
}

/// The cart owned by a single controller.
///
/// Items keep insertion order. `location == None` is the "no location
/// selected" sentinel; checkout is blocked until a real zone is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<CartItem>,
    delivery_fee: Decimal,
    location: Option<Location>,
}

impl CartState {
    /// Rebuild state from persisted parts (page reload).
    #[must_use]
    pub const fn from_parts(
        items: Vec<CartItem>,
        delivery_fee: Decimal,
        location: Option<Location>,
    ) -> Self {
        Self {
            items,
            delivery_fee,
            location,
        }
    }

    /// Add one unit of an item. Increments the existing line if the name
    /// is already in the cart, otherwise appends a new line.
    pub fn add_item(&mut self, name: &str, unit_price: Decimal) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.name == name) {
            existing.quantity += 1;
        } else {
            self.items.push(CartItem::new(name, unit_price));
        }
    }

    /// Apply a quantity-button click to the named line.
    ///
    /// Increment is always allowed. Decrement at quantity 1 removes the
    /// line entirely - no line ever holds quantity zero. Returns `false`
    /// if no line with that name exists.
    pub fn adjust_quantity(&mut self, name: &str, adjustment: Adjustment) -> bool {
        let Some(index) = self.items.iter().position(|i| i.name == name) else {
            return false;
        };

        match adjustment {
            Adjustment::Increment => {
                if let Some(item) = self.items.get_mut(index) {
                    item.quantity += 1;
                }
            }
            Adjustment::Decrement => {
                let at_minimum = self.items.get(index).is_some_and(|i| i.quantity == 1);
                if at_minimum {
                    self.items.remove(index);
                } else if let Some(item) = self.items.get_mut(index) {
                    item.quantity -= 1;
                }
            }
        }
        true
    }

    /// Update the delivery location and fee. Negative fees are clamped
    /// to zero to hold the non-negative invariant.
    pub fn set_location(&mut self, location: Option<Location>, fee: Decimal) {
        if fee.is_sign_negative() {
            tracing::warn!(%fee, "negative delivery fee clamped to zero");
            self.delivery_fee = Decimal::ZERO;
        } else {
            self.delivery_fee = fee;
        }
        self.location = location;
    }

    /// Sum of line totals over current items.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Subtotal plus delivery fee.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.subtotal() + self.delivery_fee
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub const fn delivery_fee(&self) -> Decimal {
        self.delivery_fee
    }

    #[must_use]
    pub const fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Reset to the initial state: no items, zero fee, no location.
    pub fn clear(&mut self) {
        self.items.clear();
        self.delivery_fee = Decimal::ZERO;
        self.location = None;
    }
}
