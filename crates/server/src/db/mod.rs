//! Database access for the receipt store.
//!
//! # Table: `receipts`
//!
//! Append-only, one row per order, schema assumed pre-existing:
//!
//! ```sql
//! CREATE TABLE receipts (
//!     timestamp    TEXT NOT NULL,
//!     location     TEXT NOT NULL,
//!     delivery_fee TEXT NOT NULL,
//!     grand_total  TEXT NOT NULL,
//!     items        TEXT NOT NULL
//! );
//! ```
//!
//! Money columns hold canonical two-decimal strings; `items` holds the
//! submitted item snapshots re-serialized as JSON text. No read, update,
//! or delete path exists - the store is write-only from the client's
//! perspective.

pub mod receipts;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub use receipts::{NewReceipt, ReceiptRepository};

/// Create a `SQLite` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
