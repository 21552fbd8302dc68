//! Browser `localStorage` backend.
//!
//! The dataset is kept as one JSON array under a single key, appended by
//! read-modify-write. Every tab of the same origin shares the key, so two tabs
//! submitting at once can lose a record.

use vdm_core::error::Result;
use vdm_core::{Dataset, Store, StoreError, VisitRecord};

/// Default storage key.
pub const DEFAULT_KEY: &str = "vacation_data";

#[derive(Debug, Clone, PartialEq)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn storage() -> std::result::Result<web_sys::Storage, String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| "localStorage is not accessible".to_string())
    }

    fn read(&self) -> std::result::Result<Dataset, String> {
        let storage = Self::storage()?;
        let json = storage
            .get_item(&self.key)
            .map_err(|_| format!("failed to read '{}' from localStorage", self.key))?;
        match json {
            Some(json) => Dataset::from_json(&json).map_err(|e| format!("'{}': {}", self.key, e)),
            None => Ok(Dataset::new()),
        }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(DEFAULT_KEY)
    }
}

impl Store for LocalStorageStore {
    async fn load(&self) -> Result<Dataset> {
        let dataset = self.read().map_err(StoreError::Unavailable)?;
        log::info!(
            "Loaded {} entries from localStorage ({} malformed)",
            dataset.len(),
            dataset.malformed_count()
        );
        Ok(dataset)
    }

    async fn append(&self, record: &VisitRecord) -> Result<()> {
        let mut dataset = self.read().map_err(StoreError::Write)?;
        dataset.push(*record);
        let json = dataset
            .to_json()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Self::storage()
            .map_err(StoreError::Write)?
            .set_item(&self.key, &json)
            .map_err(|_| StoreError::Write(format!("failed to save '{}' to localStorage", self.key)))
    }
}
