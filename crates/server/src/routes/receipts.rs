//! Receipt persistence handler.
//!
//! One operation: accept a finished order and write one row. The
//! response contract is the JSON body, always at HTTP 200 - clients
//! consume only the `success` flag, never the status code.

use axum::{Json, body::Bytes, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::db::{NewReceipt, ReceiptRepository};
use crate::state::AppState;

/// Acknowledgment body for every response.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    const fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

/// Raw submission body.
///
/// Money fields arrive as whatever the client sent; they are coerced
/// leniently (see [`coerce_decimal`]). The item snapshots are accepted
/// as arbitrary JSON and re-serialized to text for the `items` column -
/// the store never interprets them.
#[derive(Debug, Deserialize)]
struct ReceiptSubmission {
    location: String,
    delivery_fee: Value,
    grand_total: Value,
    items: Value,
}

/// Coerce a JSON value to a decimal amount.
///
/// Numbers and numeric strings parse; everything else becomes zero.
/// The endpoint's contract coerces rather than rejects, so a malformed
/// total produces a zeroed row, not an error.
fn coerce_decimal(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => n.to_string().parse().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => Decimal::ZERO,
    }
}

/// Persist a finished order.
///
/// The body is read raw so an absent or unparseable payload yields the
/// contractual `{"success":false,"error":"Invalid data"}` instead of a
/// framework rejection. No partial writes: one atomic insert or nothing.
#[instrument(skip(state, body))]
pub async fn create(State(state): State<AppState>, body: Bytes) -> Json<SubmitResponse> {
    let submission: ReceiptSubmission = match serde_json::from_slice(&body) {
        Ok(submission) => submission,
        Err(e) => {
            tracing::debug!(error = %e, "rejecting unparseable submission");
            return Json(SubmitResponse::failure("Invalid data"));
        }
    };

    let Ok(items_json) = serde_json::to_string(&submission.items) else {
        return Json(SubmitResponse::failure("Invalid data"));
    };

    let receipt = NewReceipt {
        location: submission.location,
        delivery_fee: coerce_decimal(&submission.delivery_fee),
        grand_total: coerce_decimal(&submission.grand_total),
        items_json,
    };

    match ReceiptRepository::new(state.pool()).insert(&receipt).await {
        Ok(()) => {
            tracing::info!(
                location = %receipt.location,
                grand_total = %receipt.grand_total,
                "receipt persisted"
            );
            Json(SubmitResponse::ok())
        }
        Err(e) => {
            // Log the driver detail; never leak it to the client.
            tracing::error!(error = %e, "receipt insert failed");
            Json(SubmitResponse::failure("Write failed"))
        }
    }
}
