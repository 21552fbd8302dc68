//! Visit records and the persisted dataset.
//!
//! The persisted format is a JSON array of
//! `{"destination": {"lat": f64, "lng": f64}, "travel_mode": "Flight|Car|Bike|Other"}`.
//!
//! A `Dataset` keeps every array element as raw JSON. Elements that do not
//! decode into a valid `VisitRecord` (missing field, unknown mode, coordinate
//! out of range) stay in the dataset so that read-modify-write backends never
//! drop them, but they are skipped by `records()` and therefore never reach
//! markers or counts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::location::LocationPoint;
use crate::travel_mode::TravelMode;

/// One submitted destination and how the visitor travels there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub destination: LocationPoint,
    pub travel_mode: TravelMode,
}

impl VisitRecord {
    pub fn new(destination: LocationPoint, travel_mode: TravelMode) -> Self {
        Self {
            destination,
            travel_mode,
        }
    }

    /// Decode a single raw entry, returning `None` for malformed entries.
    pub fn from_value(value: &Value) -> Option<Self> {
        VisitRecord::deserialize(value).ok()
    }

    /// Encode as a raw JSON entry in the persisted format.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "destination": {
                "lat": self.destination.lat(),
                "lng": self.destination.lng(),
            },
            "travel_mode": self.travel_mode.as_str(),
        })
    }
}

/// Ordered collection of persisted entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    entries: Vec<Value>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a JSON array. Blank input is an empty dataset; any other
    /// top-level shape is an error.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }
        let entries: Vec<Value> = serde_json::from_str(text)?;
        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<Value>) -> Self {
        Self { entries }
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = VisitRecord>,
    {
        Self {
            entries: records.into_iter().map(|r| r.to_value()).collect(),
        }
    }

    /// Encode the full array, malformed entries included.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    pub fn push(&mut self, record: VisitRecord) {
        self.entries.push(record.to_value());
    }

    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    /// Valid records in stored order.
    pub fn records(&self) -> impl Iterator<Item = VisitRecord> + '_ {
        self.entries.iter().filter_map(VisitRecord::from_value)
    }

    pub fn valid_count(&self) -> usize {
        self.records().count()
    }

    pub fn malformed_count(&self) -> usize {
        self.entries.len() - self.valid_count()
    }

    /// Number of raw entries, including malformed ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
