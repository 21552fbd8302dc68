//! Persistence backends implementing [`vdm_core::Store`].
//!
//! - `file`: a local JSON array file, appended by read-modify-write
//! - `http` (feature `http`): a remote endpoint, appended by single-record or full-array POST
//! - `location`: parses a backend location string into a [`StoreLocation`]
//!
//! The SQLite backend lives in `vdm-db`; the browser `localStorage` backend
//! lives in `vdm-map-ui`.

pub mod file;
#[cfg(feature = "http")]
pub mod http;
pub mod location;

pub use file::JsonFileStore;
#[cfg(feature = "http")]
pub use http::HttpStore;
pub use location::{AppendStrategy, LocationError, StoreLocation};
pub use vdm_core::{MemoryStore, Store, StoreError};
