//! Nanocafe Server library.
//!
//! This crate provides the receipt store as a library, allowing it to be
//! tested and reused: one write-only endpoint that persists a finished
//! order into the `receipts` table.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod routes;
pub mod state;
