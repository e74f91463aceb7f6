//! HTML rendering for the cart widget.
//!
//! Rendering is a pure function of cart state: given the same items and
//! delivery fee, the same markup comes out. View structs carry
//! preformatted price strings so templates stay dumb; every currency
//! figure is formatted to exactly two decimal places.

use askama::Template;
use rust_decimal::Decimal;

use nanocafe_core::CartItem;

use crate::controller::ReceiptEntry;
use crate::state::CartState;

/// Format a decimal amount as a display price.
pub(crate) fn format_price(amount: Decimal) -> String {
    format!("₱{amount:.2}")
}

/// One cart line prepared for display.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub name: String,
    pub quantity: u32,
    pub line_price: String,
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            line_price: format_price(item.line_total()),
        }
    }
}

/// Cart item list fragment.
#[derive(Template)]
#[template(path = "cart_items.html")]
pub struct CartItemsTemplate {
    items: Vec<CartLineView>,
}

impl CartItemsTemplate {
    #[must_use]
    pub fn from_state(state: &CartState) -> Self {
        Self {
            items: state.items().iter().map(CartLineView::from).collect(),
        }
    }
}

/// Totals fragment: subtotal, delivery fee line, grand total.
#[derive(Template)]
#[template(path = "cart_totals.html")]
pub struct CartTotalsTemplate {
    subtotal: String,
    delivery_fee: String,
    grand_total: String,
}

impl CartTotalsTemplate {
    #[must_use]
    pub fn from_state(state: &CartState) -> Self {
        Self {
            subtotal: format_price(state.subtotal()),
            delivery_fee: format_price(state.delivery_fee()),
            grand_total: format_price(state.grand_total()),
        }
    }
}

/// One line inside a rendered receipt.
#[derive(Debug, Clone)]
pub struct ReceiptLineView {
    pub name: String,
    pub qty: u32,
    pub line_total: String,
}

/// A single (collapsible) receipt entry in the local order history.
#[derive(Template)]
#[template(path = "receipt_entry.html")]
pub struct ReceiptEntryTemplate {
    timestamp: String,
    lines: Vec<ReceiptLineView>,
    subtotal: String,
    location_label: String,
    delivery_fee: String,
    grand_total: String,
    expanded: bool,
}

impl ReceiptEntryTemplate {
    #[must_use]
    pub fn from_entry(entry: &ReceiptEntry) -> Self {
        Self {
            timestamp: entry.timestamp.clone(),
            lines: entry
                .items
                .iter()
                .map(|item| ReceiptLineView {
                    name: item.name.clone(),
                    qty: item.quantity,
                    line_total: format_price(item.line_total()),
                })
                .collect(),
            subtotal: format_price(entry.subtotal),
            location_label: entry.location_label.clone(),
            delivery_fee: format_price(entry.delivery_fee),
            grand_total: format_price(entry.grand_total),
            expanded: entry.expanded,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::state::Location;

    fn sample_state() -> CartState {
        let mut state = CartState::default();
        state.add_item("Latte", Decimal::new(12_000, 2));
        state.add_item("Latte", Decimal::new(12_000, 2));
        state.set_location(
            Some(Location {
                id: "50".to_string(),
                label: "Sto. Niño".to_string(),
            }),
            Decimal::new(5_000, 2),
        );
        state
    }

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(Decimal::from(120)), "₱120.00");
        assert_eq!(format_price(Decimal::new(295, 1)), "₱29.50");
        assert_eq!(format_price(Decimal::ZERO), "₱0.00");
    }

    #[test]
    fn test_empty_cart_markup() {
        let html = CartItemsTemplate::from_state(&CartState::default())
            .render()
            .unwrap();
        assert!(html.contains("Your cart is empty"));
    }

    #[test]
    fn test_item_list_markup() {
        let html = CartItemsTemplate::from_state(&sample_state())
            .render()
            .unwrap();
        assert!(html.contains("Latte"));
        assert!(html.contains(r#"<span class="qty">2</span>"#));
        assert!(html.contains("₱240.00"));
    }

    #[test]
    fn test_totals_markup() {
        let html = CartTotalsTemplate::from_state(&sample_state())
            .render()
            .unwrap();
        assert!(html.contains("Total: ₱240.00"));
        assert!(html.contains("Delivery Fee: ₱50.00"));
        assert!(html.contains("GRAND TOTAL: ₱290.00"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let state = sample_state();
        let first = CartItemsTemplate::from_state(&state).render().unwrap();
        let second = CartItemsTemplate::from_state(&state).render().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_item_name_is_escaped() {
        let mut state = CartState::default();
        state.add_item("<script>alert(1)</script>", Decimal::from(1));
        let html = CartItemsTemplate::from_state(&state).render().unwrap();
        assert!(!html.contains("<script>"));
    }
}
