//! Nanocafe Core - Shared types library.
//!
//! This crate provides the value types shared between the Nanocafe
//! components:
//! - `cart` - Client-resident cart controller
//! - `server` - Receipt store (persistence endpoint)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Cart items, receipt payloads, and price parsing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
