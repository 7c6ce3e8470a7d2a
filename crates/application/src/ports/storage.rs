//! Local key/value storage port

use thiserror::Error;

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing medium could not be read or written.
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No location is available for the storage.
    #[error("storage location unavailable")]
    Unavailable,
}

/// Synchronous string key/value storage that survives process restarts.
///
/// This is the client's equivalent of browser local storage: small values,
/// local and synchronous, no expiry.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
