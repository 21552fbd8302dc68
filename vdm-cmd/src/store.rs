//! Backend dispatch for the CLI.

use anyhow::Context;
use vdm_core::aggregate::{mode_counts, ModeCount};
use vdm_core::error::Result;
use vdm_core::{Dataset, MemoryStore, Store, StoreError, VisitRecord};
use vdm_db::Database;
use vdm_store::{HttpStore, JsonFileStore, StoreLocation};

pub enum CliStore {
    File(JsonFileStore),
    Http(HttpStore),
    Sqlite(Database),
    Memory(MemoryStore),
}

impl CliStore {
    /// Open the backend named by `location`, creating local files as needed.
    pub fn open(location: &str) -> anyhow::Result<Self> {
        let parsed: StoreLocation = location
            .parse()
            .with_context(|| format!("invalid store location '{}'", location))?;
        log::info!("Using store {}", parsed);

        let store = match parsed {
            StoreLocation::File(path) => CliStore::File(JsonFileStore::open(path)?),
            StoreLocation::Http { url, strategy } => CliStore::Http(HttpStore::new(url, strategy)),
            StoreLocation::Sqlite(path) => CliStore::Sqlite(Database::open(path)?),
            StoreLocation::Memory => CliStore::Memory(MemoryStore::new()),
        };
        Ok(store)
    }

    /// Travel mode counts; SQLite counts with `GROUP BY`, other backends in memory.
    pub async fn mode_counts(&self) -> Result<Vec<ModeCount>> {
        match self {
            CliStore::Sqlite(db) => db
                .query_mode_counts()
                .map_err(|e| StoreError::Unavailable(e.to_string())),
            _ => Ok(mode_counts(&self.load().await?)),
        }
    }
}

impl Store for CliStore {
    async fn load(&self) -> Result<Dataset> {
        match self {
            CliStore::File(store) => store.load().await,
            CliStore::Http(store) => store.load().await,
            CliStore::Sqlite(store) => store.load().await,
            CliStore::Memory(store) => store.load().await,
        }
    }

    async fn append(&self, record: &VisitRecord) -> Result<()> {
        match self {
            CliStore::File(store) => store.append(record).await,
            CliStore::Http(store) => store.append(record).await,
            CliStore::Sqlite(store) => store.append(record).await,
            CliStore::Memory(store) => store.append(record).await,
        }
    }
}
