//! Key-value persistence
//!
//! All app state is kept as JSON values under string keys, in a single
//! `defaults.json` file inside a shared directory so companion display
//! surfaces can read the same namespace:
//! ```text
//! {data_dir}/shared/defaults.json
//! ```
//! Raw trait methods report failures. The typed helpers in
//! [`KeyValueStoreExt`] never do: a missing or corrupt value reads as the
//! type's zero value, and a failed write is logged and dropped.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Durable string-keyed storage of JSON values
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<Value>>;
    fn write(&self, key: &str, value: Value) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Typed accessors over any [`KeyValueStore`]
pub trait KeyValueStoreExt {
    /// Decode an arbitrary record; absent or undecodable values read as `None`
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T>;
    /// Encode and store a record, logging (not returning) failures
    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T);

    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn set_string(&self, key: &str, value: &str) {
        self.set(key, value);
    }

    fn get_int(&self, key: &str) -> i64 {
        self.get(key).unwrap_or(0)
    }

    fn set_int(&self, key: &str, value: i64) {
        self.set(key, &value);
    }

    fn get_bool(&self, key: &str) -> bool {
        self.get(key).unwrap_or(false)
    }

    fn set_bool(&self, key: &str, value: bool) {
        self.set(key, &value);
    }

    fn get_date(&self, key: &str) -> Option<NaiveDate> {
        self.get(key)
    }

    fn set_date(&self, key: &str, value: NaiveDate) {
        self.set(key, &value);
    }

    fn get_string_list(&self, key: &str) -> Vec<String> {
        self.get(key).unwrap_or_default()
    }

    fn set_string_list(&self, key: &str, value: &[String]) {
        self.set(key, value);
    }

    /// Sets are persisted as sorted lists
    fn get_string_set(&self, key: &str) -> BTreeSet<String> {
        self.get_string_list(key).into_iter().collect()
    }

    fn set_string_set(&self, key: &str, value: &BTreeSet<String>) {
        self.set(key, value);
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = match self.read(key) {
            Ok(Some(value)) => value,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read '{}': {}", key, e);
                return None;
            }
        };

        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                log::warn!("Ignoring corrupt value for '{}': {}", key, e);
                None
            }
        }
    }

    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let result = serde_json::to_value(value)
            .map_err(StorageError::from)
            .and_then(|v| self.write(key, v));

        if let Err(e) = result {
            log::warn!("Failed to write '{}': {}", key, e);
        }
    }
}

/// Store backed by a single JSON object on disk
pub struct JsonFileStore {
    /// Directory holding `defaults.json` (e.g., ~/.local/share/devlingo/shared)
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("devlingo"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// Initialize the store directory
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    fn defaults_path(&self) -> PathBuf {
        self.dir.join("defaults.json")
    }

    fn load_all(&self) -> Result<BTreeMap<String, Value>> {
        let path = self.defaults_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&path)?;
        let values: BTreeMap<String, Value> = serde_json::from_str(&content)?;
        Ok(values)
    }

    /// Write through a temp file so a failed write leaves the previous state
    fn save_all(&self, values: &BTreeMap<String, Value>) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let tmp_path = self.dir.join("defaults.json.tmp");
        fs::write(&tmp_path, serde_json::to_string_pretty(values)?)?;
        fs::rename(&tmp_path, self.defaults_path())?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        let mut values = self.load_all()?;
        Ok(values.remove(key))
    }

    fn write(&self, key: &str, value: Value) -> Result<()> {
        // A corrupt file is replaced rather than blocking every write
        let mut values = self.load_all().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable store {:?}: {}", self.defaults_path(), e);
            BTreeMap::new()
        });
        values.insert(key.to_string(), value);
        self.save_all(&values)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.load_all()?;
        if values.remove(key).is_some() {
            self.save_all(&values)?;
        }
        Ok(())
    }
}

/// Volatile store for tests and previews
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: Value) -> Result<()> {
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
