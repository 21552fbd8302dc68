//! Backend selection for the web build.
//!
//! Only backends reachable from a browser are available: an HTTP endpoint,
//! `localStorage`, or an in-memory store. File and SQLite locations fall back
//! to `localStorage` with a warning.

use vdm_core::error::Result;
use vdm_core::{Dataset, MemoryStore, Store, VisitRecord};
use vdm_store::{HttpStore, StoreLocation};

use crate::local_store::LocalStorageStore;

#[derive(Debug, Clone)]
pub enum AppStore {
    Http(HttpStore),
    Local(LocalStorageStore),
    Memory(MemoryStore),
}

impl AppStore {
    /// Pick a backend from an optional location string; unset or blank means `localStorage`.
    pub fn from_location(location: Option<&str>) -> Self {
        let Some(location) = location.filter(|s| !s.trim().is_empty()) else {
            return AppStore::Local(LocalStorageStore::default());
        };

        match location.parse::<StoreLocation>() {
            Ok(StoreLocation::Http { url, strategy }) => AppStore::Http(HttpStore::new(url, strategy)),
            Ok(StoreLocation::Memory) => AppStore::Memory(MemoryStore::new()),
            Ok(other) => {
                log::warn!("{} is not reachable from the browser; using localStorage", other);
                AppStore::Local(LocalStorageStore::default())
            }
            Err(e) => {
                log::warn!("Invalid store location '{}': {}; using localStorage", location, e);
                AppStore::Local(LocalStorageStore::default())
            }
        }
    }

    /// Short description for the page footer.
    pub fn describe(&self) -> String {
        match self {
            AppStore::Http(store) => format!("remote endpoint {}", store.url()),
            AppStore::Local(store) => format!("browser storage ({})", store.key()),
            AppStore::Memory(_) => "this page only (not saved)".to_string(),
        }
    }
}

impl Store for AppStore {
    async fn load(&self) -> Result<Dataset> {
        match self {
            AppStore::Http(store) => store.load().await,
            AppStore::Local(store) => store.load().await,
            AppStore::Memory(store) => store.load().await,
        }
    }

    async fn append(&self, record: &VisitRecord) -> Result<()> {
        match self {
            AppStore::Http(store) => store.append(record).await,
            AppStore::Local(store) => store.append(record).await,
            AppStore::Memory(store) => store.append(record).await,
        }
    }
}
