//! HTTP route handlers for the receipt store.
//!
//! # Route Structure
//!
//! ```text
//! POST /receipts - Persist a finished order
//! ```
//!
//! That is the whole surface: the store is write-only. Health endpoints
//! live in the binary, next to the server bootstrap.

pub mod receipts;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Create all routes for the receipt store.
pub fn routes() -> Router<AppState> {
    Router::new().route("/receipts", post(receipts::create))
}
