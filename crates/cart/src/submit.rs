//! Receipt submission to the receipt store.
//!
//! The controller talks to the store through the [`ReceiptSink`] trait
//! so tests can substitute a recording double; [`HttpReceiptSink`] is
//! the real implementation.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use nanocafe_core::ReceiptPayload;

/// Errors from submitting a receipt.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never produced a decodable response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with `success: false`.
    #[error("receipt store rejected the order: {0}")]
    Rejected(String),
}

/// Acknowledgment body returned by the receipt store.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAck {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Where finished orders are sent.
pub trait ReceiptSink {
    /// Submit one finished order.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` when the request fails or the store answers
    /// with `success: false`.
    async fn submit(&self, payload: &ReceiptPayload) -> Result<SubmitAck, SubmitError>;
}

/// HTTP sink posting JSON to the receipt endpoint.
#[derive(Debug, Clone)]
pub struct HttpReceiptSink {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpReceiptSink {
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl ReceiptSink for HttpReceiptSink {
    async fn submit(&self, payload: &ReceiptPayload) -> Result<SubmitAck, SubmitError> {
        let ack: SubmitAck = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?
            .json()
            .await?;

        if ack.success {
            Ok(ack)
        } else {
            Err(SubmitError::Rejected(
                ack.error
                    .unwrap_or_else(|| "unspecified error".to_string()),
            ))
        }
    }
}
