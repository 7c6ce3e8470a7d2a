//! In-memory local storage.

use std::collections::HashMap;

use mdd_application::ports::{KeyValueStorage, StorageError};
use parking_lot::RwLock;

/// Local storage that lives as long as the process.
///
/// Handy for tests and for clients that must not leave a session behind.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-filled with `items`.
    #[must_use]
    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: RwLock::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::with_items([("keep", "1")]);

        storage.set_item("k", "v").expect("set");
        assert_eq!(storage.get_item("k").expect("get").as_deref(), Some("v"));

        storage.remove_item("k").expect("remove");
        storage.remove_item("k").expect("remove twice");
        assert_eq!(storage.get_item("k").expect("get"), None);
        assert_eq!(storage.get_item("keep").expect("get").as_deref(), Some("1"));
    }
}
