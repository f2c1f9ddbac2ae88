//! Repository adapters for the persistence layer
//!
//! Opening never fails: an unusable storage location degrades to fresh data
//! and dropped writes, both logged.

use std::path::PathBuf;

use tracing::warn;

use yard_infra::persistence::{KeyValueStore, LocalStorage, StorageKeys};

use crate::config::Config;
use crate::store::InventoryStore;

/// Open local storage in the configured data directory
pub fn open_local_storage(config: &Config) -> LocalStorage {
    let data_dir = config.data_dir().unwrap_or_else(|e| {
        let fallback = std::env::temp_dir().join("yard-inventory");
        warn!(error = %e, fallback = %fallback.display(), "no data directory, using temporary storage");
        fallback
    });
    open_local_storage_at(data_dir, config.storage_keys())
}

/// Open local storage at a custom directory
pub fn open_local_storage_at(data_dir: PathBuf, keys: StorageKeys) -> LocalStorage {
    LocalStorage::new(KeyValueStore::open(data_dir), keys)
}

/// Open the inventory store backed by local storage
pub fn open_inventory_store(config: &Config) -> InventoryStore<LocalStorage> {
    InventoryStore::open(open_local_storage(config))
}
