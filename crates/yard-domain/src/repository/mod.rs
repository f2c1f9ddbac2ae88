//! Repository trait definitions for local persistence

use yard_types::Error;

use crate::model::{Inventory, Theme};

/// Durable storage for the inventory aggregate
pub trait InventoryRepository {
    /// Stored inventory, or None if nothing was saved yet
    fn load_inventory(&self) -> Result<Option<Inventory>, Error>;

    /// Replace the stored inventory
    fn save_inventory(&self, inventory: &Inventory) -> Result<(), Error>;
}

/// Durable storage for user preferences
pub trait PreferenceRepository {
    fn load_theme(&self) -> Result<Option<Theme>, Error>;

    fn save_theme(&self, theme: Theme) -> Result<(), Error>;
}
