//! Keyed JSON record stores.
//!
//! The storefront's client-persisted state lives in two stores: a
//! durable one (user records, the active session) and a session-scoped
//! one (the pending add and the cart). Each store keeps one JSON value
//! per key; a corrupted file or record is treated as absent.

use std::{
    fs, io,
    path::PathBuf,
    sync::{Mutex, PoisonError},
};

use mockall::automock;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised by record store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error")]
    Io(#[from] io::Error),

    #[error("storage serialization error")]
    Serde(#[from] serde_json::Error),
}

/// One JSON value per key.
#[automock]
pub trait RecordStore: Send + Sync {
    /// Reads the record under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Writes the record under `key`, replacing any previous value.
    fn put(&self, key: &str, value: Value) -> Result<(), StorageError>;

    /// Deletes the record under `key`; deleting a missing key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Record store backed by a single JSON file.
#[derive(Debug)]
pub struct FileRecordStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileRecordStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<Map<String, Value>, StorageError> {
        match fs::read(&self.path) {
            // An unreadable document counts as an empty store.
            Ok(bytes) => Ok(serde_json::from_slice(&bytes).unwrap_or_default()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Map::new()),
            Err(error) => Err(error.into()),
        }
    }

    fn save(&self, records: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let body = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, body)?;

        Ok(())
    }
}

impl RecordStore for FileRecordStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(self.load()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut records = self.load()?;
        records.insert(key.to_owned(), value);

        self.save(&records)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut records = self.load()?;

        if records.remove(key).is_some() {
            self.save(&records)?;
        }

        Ok(())
    }
}

/// In-memory twin of [`FileRecordStore`] for tests.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Mutex<Map<String, Value>>,
}

impl MemoryRecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryRecordStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(records.get(key).cloned())
    }

    fn put(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.insert(key.to_owned(), value);

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.remove(key);

        Ok(())
    }
}
