//! SQLite database layer for visit records.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability; one interaction at a time
//! - File-backed (`Database::open`) or in-memory (`Database::open_in_memory`) SQLite via `rusqlite`
//! - Implements [`vdm_core::Store`], so it is interchangeable with the JSON and HTTP backends
//! - Travel mode counts are derived with `GROUP BY travel_mode`
//!
//! # Usage
//!
//! ```rust
//! use vdm_db::Database;
//!
//! let db = Database::open_in_memory().unwrap();
//! db.insert_visit(48.85, 2.35, "Flight").unwrap();
//!
//! let dataset = db.query_dataset().unwrap();
//! assert_eq!(dataset.valid_count(), 1);
//! let counts = db.query_mode_counts().unwrap();
//! assert_eq!(counts[0].count, 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod queries;
mod store;

use rusqlite::Connection;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// SQLite database holding visit records.
///
/// This struct is cheaply cloneable (via `Rc`); clones share one connection.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Open (or create) a database file with the schema applied.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        log::info!("Opened visit database at {}", path.as_ref().display());
        Self::from_connection(conn)
    }

    /// Create a new in-memory database with the schema applied.
    pub fn open_in_memory() -> anyhow::Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> anyhow::Result<Self> {
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
