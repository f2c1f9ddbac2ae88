//! Directory-backed string store: one file per key

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use yard_types::{Result, StorageError};

#[derive(Debug, Clone)]
pub struct KeyValueStore {
    dir: PathBuf,
}

impl KeyValueStore {
    /// Open the store. The directory is created on first write, so an
    /// unusable location only shows up as failed reads and writes.
    pub fn open(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Value for `key`, None if never written (or the directory does not exist yet)
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }
            .into()),
        }
    }

    /// Write through a temp file so a failed write never truncates the old value
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::Unavailable(format!("{}: {}", self.dir.display(), e)))?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let write_failed = |e: std::io::Error| StorageError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        };
        fs::write(&tmp, value).map_err(write_failed)?;
        fs::rename(&tmp, &path).map_err(write_failed)?;
        Ok(())
    }

    pub fn remove_item(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_get_missing_key() {
        let dir = tempdir().unwrap();
        let store = KeyValueStore::open(dir.path().to_path_buf());
        assert_eq!(store.get_item("nothing").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempdir().unwrap();
        let store = KeyValueStore::open(dir.path().join("nested"));
        store.set_item("theme", "dark").unwrap();
        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("dark"));
        store.set_item("theme", "light").unwrap();
        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_remove_item() {
        let dir = tempdir().unwrap();
        let store = KeyValueStore::open(dir.path().to_path_buf());
        store.set_item("k", "v").unwrap();
        store.remove_item("k").unwrap();
        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_directory_created_on_first_write() {
        let dir = tempdir().unwrap();
        let store = KeyValueStore::open(dir.path().join("a").join("b"));
        assert!(!store.dir().exists());
        assert_eq!(store.get_item("k").unwrap(), None);
        store.set_item("k", "v").unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_unusable_directory() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let store = KeyValueStore::open(blocker.join("data"));
        assert!(store.get_item("k").is_err());
        assert!(matches!(
            store.set_item("k", "v"),
            Err(yard_types::Error::Storage(StorageError::Unavailable(_)))
        ));
    }
}
