//! Cart widget configuration.
//!
//! The embedding page constructs a [`CartConfig`] and hands it to the
//! controller; nothing here reads the environment.

use url::Url;

/// When local cart state is cleared relative to receipt submission.
///
/// Under [`ClearPolicy::Optimistic`] a network failure silently loses
/// the receipt server-side while the user sees a placed order. Whether
/// that trade is acceptable for a low-stakes kiosk is a policy question,
/// so both behaviors are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearPolicy {
    /// Clear the cart as soon as the order is handed off. A failed
    /// submission is logged and the receipt is lost.
    #[default]
    Optimistic,
    /// Clear only after the receipt store acknowledges the write. On
    /// failure nothing changes and the user can retry.
    WaitForAck,
}

/// Configuration for one cart controller instance.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Origins allowed to post `add-to-cart` messages. Messages from any
    /// other origin are dropped. An empty list accepts nothing.
    pub allowed_origins: Vec<Url>,
    /// Receipt store endpoint, e.g. `http://127.0.0.1:3000/receipts`.
    pub receipt_endpoint: Url,
    /// Clearing behavior around submission.
    pub clear_policy: ClearPolicy,
}

impl CartConfig {
    /// Create a configuration with the default (optimistic) clear policy.
    #[must_use]
    pub fn new(receipt_endpoint: Url, allowed_origins: Vec<Url>) -> Self {
        Self {
            allowed_origins,
            receipt_endpoint,
            clear_policy: ClearPolicy::default(),
        }
    }

    /// Whether a message origin is on the allow-list.
    ///
    /// Origins are compared after URL normalization, so
    /// `https://shop.example:443` and `https://shop.example/` match.
    #[must_use]
    pub fn origin_allowed(&self, origin: &str) -> bool {
        let Ok(origin) = Url::parse(origin) else {
            return false;
        };
        self.allowed_origins
            .iter()
            .any(|allowed| allowed.origin() == origin.origin())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config(origins: &[&str]) -> CartConfig {
        CartConfig::new(
            Url::parse("http://127.0.0.1:3000/receipts").unwrap(),
            origins.iter().map(|o| Url::parse(o).unwrap()).collect(),
        )
    }

    #[test]
    fn test_origin_allowed() {
        let config = config(&["https://shop.example"]);
        assert!(config.origin_allowed("https://shop.example"));
        assert!(config.origin_allowed("https://shop.example/"));
        assert!(config.origin_allowed("https://shop.example:443"));
    }

    #[test]
    fn test_origin_rejected() {
        let config = config(&["https://shop.example"]);
        assert!(!config.origin_allowed("https://evil.example"));
        assert!(!config.origin_allowed("http://shop.example"));
        assert!(!config.origin_allowed("not a url"));
    }

    #[test]
    fn test_empty_allow_list_accepts_nothing() {
        let config = config(&[]);
        assert!(!config.origin_allowed("https://shop.example"));
    }
}
