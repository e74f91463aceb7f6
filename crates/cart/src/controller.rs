//! The cart controller: one object owning cart state, the overlay, and
//! the local order history, driven by UI events.
//!
//! Every mutation persists through the injected [`StoragePort`] before
//! returning, so a page reload restores the cart exactly. Submission
//! goes through the injected [`ReceiptSink`]; whether local state clears
//! before or after the store acknowledges is a [`ClearPolicy`] choice.

use std::time::Duration;

use askama::Template;
use chrono::Local;
use rust_decimal::Decimal;

use nanocafe_core::{CartItem, ReceiptItem, ReceiptPayload, parse_listed_price};

use crate::config::{CartConfig, ClearPolicy};
use crate::message;
use crate::overlay::{OverlayEvent, OverlayState};
use crate::render::{CartItemsTemplate, CartTotalsTemplate, ReceiptEntryTemplate};
use crate::state::{Adjustment, CartState, Location};
use crate::storage::{self, StoragePort};
use crate::submit::{ReceiptSink, SubmitError};

/// Duration of the cart-icon scale animation after an accepted
/// add-to-cart message.
pub const ICON_PULSE: Duration = Duration::from_millis(200);

/// Visual feedback the embedding UI should play on the cart icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPulse {
    pub duration: Duration,
}

/// An entry in the local order history, shown collapsed by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptEntry {
    /// Local wall-clock time of checkout (display only; the store keeps
    /// its own authoritative timestamp).
    pub timestamp: String,
    pub location_label: String,
    pub items: Vec<CartItem>,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub grand_total: Decimal,
    pub expanded: bool,
}

/// Result of an order submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Checkout validation failed. Show the alert; nothing changed and
    /// the receipt store was never called.
    Blocked { alert: String },
    /// The order went through: a receipt entry was added, the cart was
    /// cleared, and the overlay closed.
    Placed { alert: String },
}

/// The cart controller.
pub struct CartController<S, R> {
    config: CartConfig,
    storage: S,
    sink: R,
    state: CartState,
    overlay: OverlayState,
    receipts: Vec<ReceiptEntry>,
}

impl<S: StoragePort, R: ReceiptSink> CartController<S, R> {
    /// Create a controller, restoring any persisted cart state.
    pub fn new(config: CartConfig, storage: S, sink: R) -> Self {
        let state = storage::load_state(&storage);
        Self {
            config,
            storage,
            sink,
            state,
            overlay: OverlayState::Closed,
            receipts: Vec::new(),
        }
    }

    /// Handle a cross-document message from a listing page.
    ///
    /// Messages from origins outside the allow-list, with an unexpected
    /// shape, or with an unparsable price are dropped. On accept, the
    /// item is added (or its quantity incremented), state is persisted,
    /// and the caller gets the icon pulse to play. Re-render the item
    /// list and totals afterwards.
    pub fn handle_message(&mut self, origin: &str, raw: &str) -> Option<IconPulse> {
        if !self.config.origin_allowed(origin) {
            tracing::warn!(%origin, "dropping message from disallowed origin");
            return None;
        }

        let item = message::parse_add_to_cart(raw)?;
        let Some(unit_price) = parse_listed_price(&item.price) else {
            tracing::warn!(
                name = %item.name,
                price = %item.price,
                "dropping add-to-cart message with unparsable price"
            );
            return None;
        };

        self.state.add_item(&item.name, unit_price);
        storage::save_items(&mut self.storage, &self.state);

        Some(IconPulse {
            duration: ICON_PULSE,
        })
    }

    /// Change the delivery location and fee.
    ///
    /// The item list is untouched; only the totals fragment needs a
    /// re-render after this.
    pub fn set_location(&mut self, location: Option<Location>, fee: Decimal) {
        self.state.set_location(location, fee);
        storage::save_location(&mut self.storage, &self.state);
    }

    /// Apply a quantity-button click. Returns `false` when the named
    /// item is not in the cart.
    pub fn adjust_quantity(&mut self, name: &str, adjustment: Adjustment) -> bool {
        let changed = self.state.adjust_quantity(name, adjustment);
        if changed {
            storage::save_items(&mut self.storage, &self.state);
        }
        changed
    }

    /// Apply an overlay UI event and return the new overlay state.
    pub fn overlay_event(&mut self, event: OverlayEvent) -> OverlayState {
        self.overlay = self.overlay.apply(event);
        self.overlay
    }

    /// Validate and submit the order.
    ///
    /// An empty cart or a missing location blocks with a user-facing
    /// alert and changes nothing. Otherwise the receipt payload is built
    /// from the current state and handed to the sink. Under
    /// [`ClearPolicy::Optimistic`] a failed submission is logged and the
    /// cart still clears; under [`ClearPolicy::WaitForAck`] the error is
    /// returned and local state stays intact for a retry.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` only under `WaitForAck` when the store does
    /// not acknowledge the write.
    pub async fn submit_order(&mut self) -> Result<Submission, SubmitError> {
        if self.state.is_empty() {
            return Ok(Submission::Blocked {
                alert: "Your cart is empty!".to_string(),
            });
        }
        let Some(location) = self.state.location().cloned() else {
            return Ok(Submission::Blocked {
                alert: "Please select a delivery location!".to_string(),
            });
        };

        let payload = ReceiptPayload {
            location: location.label.clone(),
            delivery_fee: self.state.delivery_fee(),
            grand_total: self.state.grand_total(),
            items: self.state.items().iter().map(ReceiptItem::from).collect(),
        };

        if let Err(e) = self.sink.submit(&payload).await {
            match self.config.clear_policy {
                ClearPolicy::Optimistic => {
                    tracing::warn!(error = %e, "receipt submission failed; clearing cart anyway");
                }
                ClearPolicy::WaitForAck => return Err(e),
            }
        }

        // Local receipt entry, newest first, collapsed by default.
        self.receipts.insert(
            0,
            ReceiptEntry {
                timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                location_label: location.label,
                items: self.state.items().to_vec(),
                subtotal: self.state.subtotal(),
                delivery_fee: self.state.delivery_fee(),
                grand_total: self.state.grand_total(),
                expanded: false,
            },
        );

        self.state.clear();
        storage::clear_state(&mut self.storage);
        self.overlay = OverlayState::Closed;

        Ok(Submission::Placed {
            alert: "Order placed successfully!".to_string(),
        })
    }

    /// Flip a receipt entry between collapsed and expanded. Returns the
    /// new expanded flag, or `None` for an unknown index.
    pub fn toggle_receipt(&mut self, index: usize) -> Option<bool> {
        let entry = self.receipts.get_mut(index)?;
        entry.expanded = !entry.expanded;
        Some(entry.expanded)
    }

    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    #[must_use]
    pub const fn overlay(&self) -> OverlayState {
        self.overlay
    }

    /// Order history, newest first.
    #[must_use]
    pub fn receipts(&self) -> &[ReceiptEntry] {
        &self.receipts
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Render the item list fragment.
    ///
    /// # Errors
    ///
    /// Returns `askama::Error` if template rendering fails.
    pub fn render_items(&self) -> askama::Result<String> {
        CartItemsTemplate::from_state(&self.state).render()
    }

    /// Render the totals fragment.
    ///
    /// # Errors
    ///
    /// Returns `askama::Error` if template rendering fails.
    pub fn render_totals(&self) -> askama::Result<String> {
        CartTotalsTemplate::from_state(&self.state).render()
    }

    /// Render the order history, newest first.
    ///
    /// # Errors
    ///
    /// Returns `askama::Error` if template rendering fails.
    pub fn render_receipts(&self) -> askama::Result<String> {
        let mut fragments = Vec::with_capacity(self.receipts.len());
        for entry in &self.receipts {
            fragments.push(ReceiptEntryTemplate::from_entry(entry).render()?);
        }
        Ok(fragments.join("\n"))
    }
}
