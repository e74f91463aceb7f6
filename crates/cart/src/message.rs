//! Cross-document `add-to-cart` messages.
//!
//! Product-listing pages post messages of the shape:
//!
//! ```json
//! { "type": "add-to-cart", "item": { "name": "Latte", "price": "₱120.00" } }
//! ```
//!
//! Anything else - a different type tag, a missing field, non-JSON - is
//! ignored. Origin filtering happens in the controller against the
//! configured allow-list; this module only deals with shape.

use serde::Deserialize;

/// Message type tag accepted from listing pages.
const ADD_TO_CART: &str = "add-to-cart";

/// An item as described by a listing page: the price is still the
/// rendered display string.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ListedItem {
    pub name: String,
    pub price: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    item: ListedItem,
}

/// Extract the item from a raw message payload, if it is a well-formed
/// `add-to-cart` message. Returns `None` for every other shape.
#[must_use]
pub fn parse_add_to_cart(raw: &str) -> Option<ListedItem> {
    let envelope: Envelope = serde_json::from_str(raw).ok()?;
    if envelope.kind == ADD_TO_CART {
        Some(envelope.item)
    } else {
        tracing::debug!(kind = %envelope.kind, "ignoring message with unknown type");
        None
    }
}
