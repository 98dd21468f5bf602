//! Local key/value preference storage.
//!
//! A small synchronous store with string keys and string values, the same
//! shape as a browser's local storage. Values are opaque to the store.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::PreferenceError;

pub trait PreferenceStorage: Send + Sync {
    /// Value stored under `key`, or `None` if never set.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] if the backing store cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), PreferenceError>;

    /// # Errors
    ///
    /// Returns [`PreferenceError`] if the backing store cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), PreferenceError>;
}

/// Preferences kept as one JSON object in a file.
///
/// A missing file reads as empty. Writes replace the file atomically.
#[derive(Debug)]
pub struct FilePreferenceStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FilePreferenceStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| PreferenceError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|source| self.io_error(source))?;

        let json = serde_json::to_vec_pretty(items).map_err(|source| PreferenceError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        let mut tmp =
            tempfile::NamedTempFile::new_in(&parent).map_err(|source| self.io_error(source))?;
        tmp.write_all(&json).map_err(|source| self.io_error(source))?;
        tmp.persist(&self.path)
            .map_err(|error| self.io_error(error.error))?;
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStorage for FilePreferenceStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), PreferenceError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}

/// In-process preferences that vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferenceStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryPreferenceStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self
            .items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), PreferenceError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
