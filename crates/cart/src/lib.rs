//! Nanocafe Cart - client-resident cart controller.
//!
//! Owns the cart state for a single ordering kiosk: items arrive as
//! cross-document messages from product-listing pages, quantities and
//! the delivery location are adjusted through UI events, and checkout
//! submits a finished order to the receipt store.
//!
//! # Architecture
//!
//! - [`state`] - `CartState`: items, delivery fee, selected location
//! - [`storage`] - injected storage port (durable key/value entries)
//! - [`message`] - the `add-to-cart` cross-document message contract
//! - [`overlay`] - open/close state machine for the cart overlay
//! - [`render`] - HTML fragments as pure functions of state
//! - [`submit`] - receipt submission client (`ReceiptSink` seam)
//! - [`controller`] - ties the above together behind UI-event methods
//!
//! Rendering never mutates state: after any mutating call, re-render
//! the affected fragments with [`controller::CartController::render_items`]
//! and friends. Location changes touch totals only, so the item list
//! does not need a re-render there.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod controller;
pub mod message;
pub mod overlay;
pub mod render;
pub mod state;
pub mod storage;
pub mod submit;

pub use config::{CartConfig, ClearPolicy};
pub use controller::{CartController, IconPulse, ReceiptEntry, Submission};
pub use state::{Adjustment, CartState, Location};
