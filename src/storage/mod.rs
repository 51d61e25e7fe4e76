//! Storage - key-value persistence for serialized snapshots.
//!
//! Mirrors browser local storage: one string value per string key, read
//! returns the previous value or nothing, write replaces the value.

mod file;
mod in_memory;

use std::fmt;

/// Error type for key-value storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The in-process storage lock was poisoned.
    LockPoisoned(&'static str),
    /// Filesystem-level failure.
    Io { key: String, message: String },
    /// The key cannot be mapped to a storage location.
    InvalidKey(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned(operation) => {
                write!(f, "storage lock poisoned during {}", operation)
            }
            StorageError::Io { key, message } => {
                write!(f, "storage io error for key {}: {}", key, message)
            }
            StorageError::InvalidKey(key) => write!(f, "invalid storage key {:?}", key),
        }
    }
}

impl std::error::Error for StorageError {}

/// String key-value storage.
pub trait KeyValueStorage {
    /// Read the value stored under `key`. Returns None if nothing was written.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Returns true if one existed.
    fn remove_item(&self, key: &str) -> Result<bool, StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<bool, StorageError> {
        (**self).remove_item(key)
    }
}

pub use file::FileStorage;
pub use in_memory::InMemoryStorage;
