//! Durable cart storage.
//!
//! Cart state is persisted continuously as three independent entries so
//! a page reload restores it:
//!
//! - `cartItems` - JSON array of cart lines
//! - `deliveryFee` - stringified decimal
//! - `selectedLocation` - JSON of the selected [`Location`]
//!
//! Persistence goes through the [`StoragePort`] trait rather than a
//! global store so tests can inject a double. Corrupt entries are
//! tolerated: the loader warns and falls back to an empty value, the
//! same recovery a user would get from clearing site data.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;

use nanocafe_core::CartItem;

use crate::state::{CartState, Location};

/// Storage key for the serialized item list.
pub const ITEMS_KEY: &str = "cartItems";
/// Storage key for the delivery fee.
pub const FEE_KEY: &str = "deliveryFee";
/// Storage key for the selected location.
pub const LOCATION_KEY: &str = "selectedLocation";

/// Durable string key/value storage.
///
/// Modeled on browser persistent storage: infallible from the caller's
/// perspective, with absence expressed as `None`.
pub trait StoragePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Load cart state from storage (page-load initialization).
pub fn load_state<S: StoragePort>(storage: &S) -> CartState {
    let items: Vec<CartItem> = storage
        .get(ITEMS_KEY)
        .and_then(|raw| match serde_json::from_str(&raw) {
            Ok(items) => Some(items),
            Err(e) => {
                tracing::warn!(error = %e, "discarding corrupt {ITEMS_KEY} entry");
                None
            }
        })
        .unwrap_or_default();

    let delivery_fee = storage
        .get(FEE_KEY)
        .and_then(|raw| Decimal::from_str(&raw).ok())
        .unwrap_or_default();

    let location: Option<Location> = storage
        .get(LOCATION_KEY)
        .and_then(|raw| match serde_json::from_str(&raw) {
            Ok(location) => Some(location),
            Err(e) => {
                tracing::warn!(error = %e, "discarding corrupt {LOCATION_KEY} entry");
                None
            }
        });

    CartState::from_parts(items, delivery_fee, location)
}

/// Persist the item list.
pub fn save_items<S: StoragePort>(storage: &mut S, state: &CartState) {
    match serde_json::to_string(state.items()) {
        Ok(json) => storage.set(ITEMS_KEY, &json),
        Err(e) => tracing::error!(error = %e, "failed to serialize cart items"),
    }
}

/// Persist the delivery fee and selected location.
pub fn save_location<S: StoragePort>(storage: &mut S, state: &CartState) {
    storage.set(FEE_KEY, &state.delivery_fee().to_string());
    match state.location() {
        Some(location) => match serde_json::to_string(location) {
            Ok(json) => storage.set(LOCATION_KEY, &json),
            Err(e) => tracing::error!(error = %e, "failed to serialize location"),
        },
        None => storage.remove(LOCATION_KEY),
    }
}

/// Remove all three entries (successful order submission).
pub fn clear_state<S: StoragePort>(storage: &mut S) {
    storage.remove(ITEMS_KEY);
    storage.remove(FEE_KEY);
    storage.remove(LOCATION_KEY);
}

/// In-memory storage: test double and ephemeral fallback.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// File-backed storage: the kiosk's durable store.
///
/// The whole key/value map lives in one JSON file rewritten on every
/// mutation. Write failures are logged, not surfaced - the port mirrors
/// browser storage, which callers cannot meaningfully recover from
/// either.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStorage {
    /// Open (or create) the store at `path`.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(entries) => Some(entries),
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "discarding corrupt storage file");
                    None
                }
            })
            .unwrap_or_default();

        Self { path, entries }
    }

    fn flush(&self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize storage entries");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            tracing::error!(error = %e, path = %self.path.display(), "failed to write storage file");
        }
    }
}

impl StoragePort for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.flush();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_storage() {
        let mut storage = MemoryStorage::new();
        let mut state = CartState::default();
        state.add_item("Latte", Decimal::new(12_000, 2));
        state.set_location(
            Some(Location {
                id: "50".to_string(),
                label: "Sto. Niño".to_string(),
            }),
            Decimal::new(5_000, 2),
        );

        save_items(&mut storage, &state);
        save_location(&mut storage, &state);

        let restored = load_state(&storage);
        assert_eq!(restored, state);
    }

    #[test]
    fn test_load_from_empty_storage() {
        let storage = MemoryStorage::new();
        let state = load_state(&storage);
        assert!(state.is_empty());
        assert_eq!(state.delivery_fee(), Decimal::ZERO);
        assert!(state.location().is_none());
    }

    #[test]
    fn test_corrupt_items_entry_falls_back() {
        let mut storage = MemoryStorage::new();
        storage.set(ITEMS_KEY, "not json");
        storage.set(FEE_KEY, "50");

        let state = load_state(&storage);
        assert!(state.is_empty());
        assert_eq!(state.delivery_fee(), Decimal::from(50));
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let mut storage = MemoryStorage::new();
        storage.set(ITEMS_KEY, "[]");
        storage.set(FEE_KEY, "50");
        storage.set(LOCATION_KEY, "{}");

        clear_state(&mut storage);
        assert!(storage.get(ITEMS_KEY).is_none());
        assert!(storage.get(FEE_KEY).is_none());
        assert!(storage.get(LOCATION_KEY).is_none());
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let path = std::env::temp_dir().join(format!(
            "nanocafe-storage-test-{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        {
            let mut storage = FileStorage::open(&path);
            storage.set(FEE_KEY, "50");
        }
        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get(FEE_KEY).as_deref(), Some("50"));

        let _ = fs::remove_file(&path);
    }
}
