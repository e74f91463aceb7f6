//! Value types shared across Nanocafe components.
//!
//! Serialized field names (`priceValue`, `qty`) follow the layout the
//! kiosk already uses for durable storage and for the receipt wire
//! format, so saved carts and existing clients keep working.

pub mod item;
pub mod price;
pub mod receipt;

pub use item::CartItem;
pub use price::parse_listed_price;
pub use receipt::{ReceiptItem, ReceiptPayload};
