//! Receipt repository.
//!
//! All queries are parameterized; no value ever reaches the SQL text by
//! string formatting. That invariant lives here, not at call sites.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::SqlitePool;

/// Timestamp layout persisted with each row.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A finished order ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReceipt {
    pub location: String,
    pub delivery_fee: Decimal,
    pub grand_total: Decimal,
    /// Item snapshots, already serialized to JSON text.
    pub items_json: String,
}

/// Repository for receipt database operations.
pub struct ReceiptRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReceiptRepository<'a> {
    /// Create a new receipt repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert one receipt row.
    ///
    /// The store assigns the authoritative timestamp here; client clocks
    /// are never trusted. The row is written in a single atomic insert
    /// or not at all.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the write fails.
    pub async fn insert(&self, receipt: &NewReceipt) -> Result<(), sqlx::Error> {
        let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        sqlx::query(
            "INSERT INTO receipts (timestamp, location, delivery_fee, grand_total, items)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&timestamp)
        .bind(&receipt.location)
        .bind(format!("{:.2}", receipt.delivery_fee))
        .bind(format!("{:.2}", receipt.grand_total))
        .bind(&receipt.items_json)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
