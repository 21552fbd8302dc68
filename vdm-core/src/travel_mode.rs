use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// How the visitor travels to the destination.
///
/// Serialized as its exact label (`"Flight"`, `"Car"`, `"Bike"`, `"Other"`).
/// Variant order is the selector order and the tie-break order for counts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum TravelMode {
    #[default]
    Flight,
    Car,
    Bike,
    Other,
}

impl TravelMode {
    /// All modes in selector order.
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Flight,
        TravelMode::Car,
        TravelMode::Bike,
        TravelMode::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Flight => "Flight",
            TravelMode::Car => "Car",
            TravelMode::Bike => "Bike",
            TravelMode::Other => "Other",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TravelMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownTravelMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_labels() {
        for mode in TravelMode::ALL {
            assert_eq!(mode.as_str().parse::<TravelMode>().unwrap(), mode);
        }
    }

    #[test]
    fn rejects_unknown_and_wrong_case() {
        assert!("Boat".parse::<TravelMode>().is_err());
        assert!("flight".parse::<TravelMode>().is_err());
    }

    #[test]
    fn serde_uses_label() {
        assert_eq!(serde_json::to_string(&TravelMode::Bike).unwrap(), "\"Bike\"");
        let mode: TravelMode = serde_json::from_str("\"Car\"").unwrap();
        assert_eq!(mode, TravelMode::Car);
    }
}
