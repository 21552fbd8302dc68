//! Persistence capability shared by every backend.
//!
//! Backends are interchangeable: a JSON file, a remote JSON endpoint, SQLite,
//! browser `localStorage`, or the in-process [`MemoryStore`] below. None of
//! them coordinate concurrent writers; two sessions appending at the same time
//! may lose one update on read-modify-write backends.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dataset::{Dataset, VisitRecord};
use crate::error::{Result, StoreError};

/// Load/append access to the persisted dataset.
///
/// Futures are not required to be `Send`: the web build runs on the browser's
/// single thread and native callers drive one interaction at a time.
#[allow(async_fn_in_trait)]
pub trait Store {
    /// Read the full dataset. Fails with [`StoreError::Unavailable`].
    async fn load(&self) -> Result<Dataset>;

    /// Persist one record. Fails with [`StoreError::Write`]; on failure the
    /// caller must not assume the record was stored.
    async fn append(&self, record: &VisitRecord) -> Result<()>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    dataset: Dataset,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-process store.
///
/// Cheaply cloneable (via `Rc`); clones share the same dataset. Read and write
/// failures can be switched on to exercise the degraded paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(dataset: Dataset) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().dataset = dataset;
        store
    }

    /// Make subsequent loads fail as an unreachable backend would.
    pub fn set_read_failure(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    /// Make subsequent appends fail as a rejecting backend would.
    pub fn set_write_failure(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Current contents, bypassing failure injection.
    pub fn snapshot(&self) -> Dataset {
        self.inner.borrow().dataset.clone()
    }
}

impl Store for MemoryStore {
    async fn load(&self) -> Result<Dataset> {
        let inner = self.inner.borrow();
        if inner.fail_reads {
            return Err(StoreError::Unavailable("memory store read disabled".into()));
        }
        Ok(inner.dataset.clone())
    }

    async fn append(&self, record: &VisitRecord) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StoreError::Write("memory store write disabled".into()));
        }
        inner.dataset.push(*record);
        Ok(())
    }
}
