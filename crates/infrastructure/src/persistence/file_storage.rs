//! File-backed local storage.
//!
//! Keeps every key in one JSON object file in the platform data directory:
//! - Linux: ~/.local/share/mdd/local_storage.json
//! - macOS: ~/Library/Application Support/mdd/local_storage.json
//! - Windows: %APPDATA%/mdd/local_storage.json

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use mdd_application::ports::{KeyValueStorage, StorageError};
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

const FILE_NAME: &str = "local_storage.json";

type Items = BTreeMap<String, String>;

/// Local storage persisted as a single JSON file.
///
/// The file is read once when opening; afterwards the in-memory copy is
/// authoritative and every write rewrites the file. A write that cannot be
/// persisted leaves the in-memory copy unchanged too.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: Mutex<Items>,
}

impl FileStorage {
    /// Returns the default storage file, if the platform has a data directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("mdd").join(FILE_NAME))
    }

    /// Opens the storage at `path`. A missing file is an empty storage.
    ///
    /// A file that is not a JSON object is moved aside to `<path>.corrupt`
    /// and the storage starts empty. Entries whose value is not a string
    /// are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let items = match fs::read(&path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Items::new(),
            Ok(bytes) => parse_items(&path, &bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Items::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), keys = items.len(), "opened local storage");
        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn update(&self, change: impl FnOnce(&mut Items)) -> Result<(), StorageError> {
        let mut items = self.items.lock();
        let mut next = items.clone();
        change(&mut next);
        if next != *items {
            self.persist(&next)?;
            *items = next;
        }
        Ok(())
    }

    fn persist(&self, items: &Items) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = to_json_stable_bytes(items)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, content)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

fn parse_items(path: &Path, bytes: &[u8]) -> Items {
    let raw: BTreeMap<String, serde_json::Value> = match from_json_bytes(bytes) {
        Ok(raw) => raw,
        Err(error) => {
            let quarantine = quarantine_path(path);
            warn!(path = %path.display(), %error, "local storage is unreadable, starting empty");
            if let Err(error) = fs::rename(path, &quarantine) {
                warn!(path = %quarantine.display(), %error, "failed to move unreadable storage aside");
            }
            return Items::new();
        }
    };

    raw.into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(value) => Some((key, value)),
            _ => {
                warn!(%key, "dropping non-string local storage entry");
                None
            }
        })
        .collect()
}

fn quarantine_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".corrupt");
    PathBuf::from(name)
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.update(|items| {
            items.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_path_is_under_mdd() {
        if let Some(path) = FileStorage::default_path() {
            assert!(path.ends_with("mdd/local_storage.json"));
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().expect("temp dir");
        let storage = FileStorage::open(dir.path().join("nested/store.json")).expect("open");

        assert_eq!(storage.get_item("session_info").expect("get"), None);
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested/store.json");

        let storage = FileStorage::open(&path).expect("open");
        storage.set_item("a", "1").expect("set");
        storage.set_item("b", "2").expect("set");
        storage.remove_item("a").expect("remove");
        drop(storage);

        let reopened = FileStorage::open(&path).expect("reopen");
        assert_eq!(reopened.get_item("a").expect("get"), None);
        assert_eq!(reopened.get_item("b").expect("get").as_deref(), Some("2"));
    }

    #[test]
    fn test_removing_absent_key_does_not_create_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("store.json");

        let storage = FileStorage::open(&path).expect("open");
        storage.remove_item("nothing").expect("remove");

        assert!(!path.exists());
    }

    #[test]
    fn test_unreadable_file_is_moved_aside() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("store.json");
        fs::write(&path, r#"{"session_info": "{\"tok"#).expect("write");

        let storage = FileStorage::open(&path).expect("open");

        assert_eq!(storage.get_item("session_info").expect("get"), None);
        assert!(!path.exists());
        assert!(dir.path().join("store.json.corrupt").exists());

        storage.set_item("a", "1").expect("set");
        let reopened = FileStorage::open(&path).expect("reopen");
        assert_eq!(reopened.get_item("a").expect("get").as_deref(), Some("1"));
    }

    #[test]
    fn test_non_object_file_starts_empty() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("store.json");
        fs::write(&path, "[\"not\", \"a map\"]").expect("write");

        let storage = FileStorage::open(&path).expect("open");

        assert_eq!(storage.get_item("not").expect("get"), None);
    }

    #[test]
    fn test_non_string_values_are_dropped() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("store.json");
        fs::write(
            &path,
            r#"{"session_info": {"token": "t", "id": 1}, "theme": "dark"}"#,
        )
        .expect("write");

        let storage = FileStorage::open(&path).expect("open");

        assert_eq!(storage.get_item("session_info").expect("get"), None);
        assert_eq!(storage.get_item("theme").expect("get").as_deref(), Some("dark"));
        assert!(path.exists());
    }

    #[test]
    fn test_blank_file_is_empty() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("store.json");
        fs::write(&path, "\n").expect("write");

        let storage = FileStorage::open(&path).expect("open");
        assert_eq!(storage.get_item("x").expect("get"), None);
    }
}
