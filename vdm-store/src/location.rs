//! Backend location strings.
//!
//! | Location                       | Backend                          |
//! |--------------------------------|----------------------------------|
//! | `http://…`, `https://…`        | HTTP, single-record POST         |
//! | `blob+http://…`, `blob+https://…` | HTTP, full-array POST         |
//! | `sqlite:<path>`                | SQLite database file             |
//! | `memory:`                      | in-process, not persisted        |
//! | `file:<path>` or a bare path   | JSON array file                  |

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// How an HTTP backend persists an appended record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppendStrategy {
    /// POST only the new record; the server appends it.
    #[default]
    SingleRecord,
    /// GET the array, append locally, POST the whole array back.
    /// Concurrent writers can overwrite each other.
    FullDataset,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreLocation {
    File(PathBuf),
    Http { url: String, strategy: AppendStrategy },
    Sqlite(PathBuf),
    Memory,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("Store location is empty")]
    Empty,

    #[error("Missing path in store location: {0}")]
    MissingPath(String),

    #[error("Unsupported store location scheme: {0}")]
    UnsupportedScheme(String),
}

impl FromStr for StoreLocation {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LocationError::Empty);
        }
        if s == "memory:" {
            return Ok(StoreLocation::Memory);
        }
        if let Some(path) = s.strip_prefix("sqlite:") {
            return non_empty_path(path, s).map(StoreLocation::Sqlite);
        }
        if let Some(url) = s.strip_prefix("blob+") {
            if is_http(url) {
                return Ok(StoreLocation::Http {
                    url: url.to_string(),
                    strategy: AppendStrategy::FullDataset,
                });
            }
            return Err(LocationError::UnsupportedScheme(s.to_string()));
        }
        if is_http(s) {
            return Ok(StoreLocation::Http {
                url: s.to_string(),
                strategy: AppendStrategy::SingleRecord,
            });
        }
        if let Some(path) = s.strip_prefix("file:") {
            return non_empty_path(path, s).map(StoreLocation::File);
        }
        if s.contains("://") {
            return Err(LocationError::UnsupportedScheme(s.to_string()));
        }
        Ok(StoreLocation::File(PathBuf::from(s)))
    }
}

fn is_http(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

fn non_empty_path(path: &str, original: &str) -> Result<PathBuf, LocationError> {
    if path.is_empty() {
        Err(LocationError::MissingPath(original.to_string()))
    } else {
        Ok(PathBuf::from(path))
    }
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreLocation::File(path) => write!(f, "file:{}", path.display()),
            StoreLocation::Http {
                url,
                strategy: AppendStrategy::SingleRecord,
            } => f.write_str(url),
            StoreLocation::Http {
                url,
                strategy: AppendStrategy::FullDataset,
            } => write!(f, "blob+{}", url),
            StoreLocation::Sqlite(path) => write!(f, "sqlite:{}", path.display()),
            StoreLocation::Memory => f.write_str("memory:"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_path_is_json_file() {
        assert_eq!(
            "vacation_data.json".parse::<StoreLocation>().unwrap(),
            StoreLocation::File(PathBuf::from("vacation_data.json"))
        );
        assert_eq!(
            "file:/tmp/data.json".parse::<StoreLocation>().unwrap(),
            StoreLocation::File(PathBuf::from("/tmp/data.json"))
        );
    }

    #[test]
    fn http_strategies() {
        assert_eq!(
            "https://api.example.com/visits".parse::<StoreLocation>().unwrap(),
            StoreLocation::Http {
                url: "https://api.example.com/visits".to_string(),
                strategy: AppendStrategy::SingleRecord,
            }
        );
        assert_eq!(
            "blob+https://blob.example.com/b/42".parse::<StoreLocation>().unwrap(),
            StoreLocation::Http {
                url: "https://blob.example.com/b/42".to_string(),
                strategy: AppendStrategy::FullDataset,
            }
        );
    }

    #[test]
    fn sqlite_and_memory() {
        assert_eq!(
            "sqlite:visits.db".parse::<StoreLocation>().unwrap(),
            StoreLocation::Sqlite(PathBuf::from("visits.db"))
        );
        assert_eq!("memory:".parse::<StoreLocation>().unwrap(), StoreLocation::Memory);
    }

    #[test]
    fn rejects_bad_locations() {
        assert_eq!("".parse::<StoreLocation>(), Err(LocationError::Empty));
        assert!(matches!(
            "sqlite:".parse::<StoreLocation>(),
            Err(LocationError::MissingPath(_))
        ));
        assert!(matches!(
            "ftp://example.com/x".parse::<StoreLocation>(),
            Err(LocationError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            "blob+ftp://example.com/x".parse::<StoreLocation>(),
            Err(LocationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn display_round_trips() {
        for s in ["blob+https://b.example.com/1", "sqlite:v.db", "memory:", "file:v.json"] {
            assert_eq!(s.parse::<StoreLocation>().unwrap().to_string(), s);
        }
    }
}
