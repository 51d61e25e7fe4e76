//! FileStorage - one file per key inside a directory.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{KeyValueStorage, StorageError};

/// Directory-backed key-value storage.
///
/// Each key maps to `<dir>/<key>.json`. Keys must be non-empty and made of
/// ASCII letters, digits, `-`, `_` and `.`; anything else is rejected with
/// [`StorageError::InvalidKey`] so distinct keys never share a file. Writes go to a sibling temporary file
/// which is then renamed over the target, so a reader sees either the old or
/// the new value.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` as the storage root, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| io_error("<root>", e))?;
        Ok(FileStorage { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !is_valid_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

// No separators, so a key always names a file directly inside the directory.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

fn io_error(key: &str, err: io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        message: err.to_string(),
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let target = self.path_for(key)?;
        let tmp = target.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp).map_err(|e| io_error(key, e))?;
            file.write_all(value.as_bytes())
                .map_err(|e| io_error(key, e))?;
            file.sync_all().map_err(|e| io_error(key, e))?;
        }
        fs::rename(&tmp, &target).map_err(|e| io_error(key, e))
    }

    fn remove_item(&self, key: &str) -> Result<bool, StorageError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(key, e)),
        }
    }
}
