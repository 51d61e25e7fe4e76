use std::fmt;

use crate::command::CommandError;
use crate::storage::StorageError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Storage(StorageError),
    /// The command could not be folded into the current snapshot.
    Command(CommandError),
    /// The persisted value under `key` could not be parsed as a person list.
    MalformedSnapshot {
        key: String,
        message: String,
    },
    Serialize(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Storage(err) => write!(f, "storage error: {}", err),
            StoreError::Command(err) => write!(f, "command rejected: {}", err),
            StoreError::MalformedSnapshot { key, message } => write!(
                f,
                "persisted person list under {} is malformed: {}",
                key, message
            ),
            StoreError::Serialize(message) => {
                write!(f, "failed to serialize person list: {}", message)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Storage(err) => Some(err),
            StoreError::Command(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        StoreError::Storage(err)
    }
}

impl From<CommandError> for StoreError {
    fn from(err: CommandError) -> Self {
        StoreError::Command(err)
    }
}
