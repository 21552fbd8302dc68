/// Error types for the vacation destination map
use thiserror::Error;

/// Input that cannot become part of a `VisitRecord`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Latitude outside [-90, 90]
    #[error("Latitude out of range [-90, 90]: {0}")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180]
    #[error("Longitude out of range [-180, 180]: {0}")]
    LongitudeOutOfRange(f64),

    /// NaN or infinite coordinate
    #[error("Coordinate is not a finite number")]
    NonFiniteCoordinate,

    /// Travel mode label not in the fixed list
    #[error("Unknown travel mode: {0}")]
    UnknownTravelMode(String),

    /// Submit attempted before a destination was clicked
    #[error("No destination selected")]
    NoPendingSelection,
}

/// Failure talking to a persistence backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Backend could not be reached or read (includes non-2xx and undecodable bodies)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Backend rejected the write or could not be reached
    #[error("Write failed: {0}")]
    Write(String),
}

/// Why a submission did not persist.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Type alias for Results using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;
