//! Key-value string stores
//!
//! The trip planner persists everything as text values under fixed keys.
//! `FileStore` keeps one file per key on disk; `MemoryStore` keeps values in
//! memory and backs tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TripError;

use super::file_io::{read_text, remove_file_if_exists, write_text_atomic};

/// A store mapping string keys to string values
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>, TripError>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<(), TripError>;

    /// Remove the value stored under `key`
    fn remove_item(&self, key: &str) -> Result<(), TripError>;
}

/// Keys become file names, so only a conservative character set is allowed
fn check_key(key: &str) -> Result<(), TripError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(TripError::Storage(format!("Invalid store key: '{}'", key)))
    }
}

/// Store keeping each key in `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// File backing a key
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, TripError> {
        check_key(key)?;
        read_text(self.path_for(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), TripError> {
        check_key(key)?;
        write_text_atomic(self.path_for(key), value)
    }

    fn remove_item(&self, key: &str) -> Result<(), TripError> {
        check_key(key)?;
        remove_file_if_exists(self.path_for(key))
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, TripError> {
        let data = self
            .data
            .read()
            .map_err(|e| TripError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), TripError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), TripError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.remove(key);
        Ok(())
    }
}
