//! Core types and application logic for the vacation destination map.
//!
//! This crate provides:
//! - `location`, `travel_mode`, `dataset`: the record model and its lenient JSON decoding
//! - `store`: the backend-agnostic `Store` capability plus an in-memory implementation
//! - `session`: per-user pending selection and the submission flow
//! - `aggregate`: travel mode frequency counts
//! - `view`: a pure `render` from dataset + session to a `ViewModel`

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod location;
pub mod session;
pub mod store;
pub mod travel_mode;
pub mod view;

pub use dataset::{Dataset, VisitRecord};
pub use error::{StoreError, SubmitError, ValidationError};
pub use location::LocationPoint;
pub use session::{SessionContext, StatusMessage};
pub use store::{MemoryStore, Store};
pub use travel_mode::TravelMode;
pub use view::{render, ViewModel};
