use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// A validated point on the map in decimal degrees.
///
/// Fields are private so every instance has passed range checks; this also
/// applies to points decoded from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct LocationPoint {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct RawPoint {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawPoint> for LocationPoint {
    type Error = ValidationError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        LocationPoint::new(raw.lat, raw.lng)
    }
}

impl LocationPoint {
    /// Create a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(lat: f64, lng: f64) -> Result<Self, ValidationError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(ValidationError::NonFiniteCoordinate);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(ValidationError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Create a point from a raw map click.
    ///
    /// Map widgets keep counting longitude past ±180 once the user pans across
    /// the antimeridian, so longitude is wrapped back into [-180, 180].
    /// Latitude is never wrapped.
    pub fn from_click(lat: f64, lng: f64) -> Result<Self, ValidationError> {
        if !lng.is_finite() {
            return Err(ValidationError::NonFiniteCoordinate);
        }
        let wrapped = if (-180.0..=180.0).contains(&lng) {
            lng
        } else {
            (lng + 180.0).rem_euclid(360.0) - 180.0
        };
        Self::new(lat, wrapped)
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for LocationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}
