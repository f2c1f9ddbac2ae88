//! Local storage for the inventory and the theme preference

use yard_domain::model::{Inventory, Theme};
use yard_domain::repository::{InventoryRepository, PreferenceRepository};
use yard_types::{Error, StorageError};

use super::KeyValueStore;

/// Storage keys, taken from the application config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub inventory: String,
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            inventory: "yard_inventory".to_string(),
            theme: "theme_preference".to_string(),
        }
    }
}

/// File-based implementation of the inventory and preference repositories
#[derive(Debug, Clone)]
pub struct LocalStorage {
    store: KeyValueStore,
    keys: StorageKeys,
}

impl LocalStorage {
    pub fn new(store: KeyValueStore, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &KeyValueStore {
        &self.store
    }
}

impl InventoryRepository for LocalStorage {
    fn load_inventory(&self) -> Result<Option<Inventory>, Error> {
        let Some(raw) = self.store.get_item(&self.keys.inventory)? else {
            return Ok(None);
        };
        let inventory = serde_json::from_str(&raw).map_err(|e| StorageError::Malformed {
            key: self.keys.inventory.clone(),
            reason: e.to_string(),
        })?;
        Ok(Some(inventory))
    }

    fn save_inventory(&self, inventory: &Inventory) -> Result<(), Error> {
        let raw = serde_json::to_string(inventory)?;
        self.store.set_item(&self.keys.inventory, &raw)
    }
}

impl PreferenceRepository for LocalStorage {
    fn load_theme(&self) -> Result<Option<Theme>, Error> {
        let Some(raw) = self.store.get_item(&self.keys.theme)? else {
            return Ok(None);
        };
        Theme::parse(&raw).map(Some).ok_or_else(|| {
            StorageError::Malformed {
                key: self.keys.theme.clone(),
                reason: format!("unknown theme '{}'", raw.trim()),
            }
            .into()
        })
    }

    fn save_theme(&self, theme: Theme) -> Result<(), Error> {
        self.store.set_item(&self.keys.theme, theme.as_str())
    }
}
