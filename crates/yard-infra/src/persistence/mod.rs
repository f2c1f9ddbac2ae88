//! Persistence implementations
//!
//! File-based implementations of the repository traits.

mod key_value_store;
mod local_storage;

pub use key_value_store::KeyValueStore;
pub use local_storage::{LocalStorage, StorageKeys};
