//! Local JSON file backend.
//!
//! The file holds the whole dataset as one JSON array. Appends read the file,
//! push the record and write the array back, so two processes appending at
//! the same time can lose one of the records.

use std::fs;
use std::path::{Path, PathBuf};

use vdm_core::error::Result;
use vdm_core::{Dataset, Store, StoreError, VisitRecord};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store, creating the file with an empty array if it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Unavailable(format!("{}: {}", parent.display(), e))
                })?;
            }
            fs::write(&path, "[]")
                .map_err(|e| StoreError::Unavailable(format!("{}: {}", path.display(), e)))?;
            log::info!("Initialized empty dataset at {}", path.display());
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Dataset> {
        let text = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", self.path.display(), e)))?;
        Dataset::from_json(&text)
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", self.path.display(), e)))
    }
}

impl Store for JsonFileStore {
    async fn load(&self) -> Result<Dataset> {
        let dataset = self.read()?;
        log::info!(
            "Loaded {} entries from {} ({} malformed)",
            dataset.len(),
            self.path.display(),
            dataset.malformed_count()
        );
        Ok(dataset)
    }

    async fn append(&self, record: &VisitRecord) -> Result<()> {
        let mut dataset = self.read().map_err(|e| StoreError::Write(e.to_string()))?;
        dataset.push(*record);
        let json = dataset
            .to_json()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| StoreError::Write(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }
}
