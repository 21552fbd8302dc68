//! Travel mode frequency counts for the bar chart.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::Dataset;
use crate::travel_mode::TravelMode;

/// Number of valid records using one travel mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeCount {
    pub travel_mode: TravelMode,
    pub count: usize,
}

/// Count valid records per travel mode.
///
/// Modes with no records are omitted. Sorted by count descending, ties in
/// selector order.
pub fn mode_counts(dataset: &Dataset) -> Vec<ModeCount> {
    let mut counts: BTreeMap<TravelMode, usize> = BTreeMap::new();
    for record in dataset.records() {
        *counts.entry(record.travel_mode).or_default() += 1;
    }

    let mut result: Vec<ModeCount> = counts
        .into_iter()
        .map(|(travel_mode, count)| ModeCount { travel_mode, count })
        .collect();
    sort_counts(&mut result);
    result
}

/// Order used by every count producer (in-memory and SQL).
pub fn sort_counts(counts: &mut [ModeCount]) {
    counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.travel_mode.cmp(&b.travel_mode))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::VisitRecord;
    use crate::location::LocationPoint;
    use proptest::prelude::*;

    fn dataset(modes: &[TravelMode]) -> Dataset {
        Dataset::from_records(
            modes
                .iter()
                .map(|m| VisitRecord::new(LocationPoint::new(0.0, 0.0).unwrap(), *m)),
        )
    }

    #[test]
    fn empty_dataset_has_no_counts() {
        assert!(mode_counts(&Dataset::new()).is_empty());
    }

    #[test]
    fn counts_sorted_descending_with_selector_tie_break() {
        use TravelMode::*;
        let counts = mode_counts(&dataset(&[Other, Car, Bike, Car, Other, Flight]));
        assert_eq!(
            counts,
            vec![
                ModeCount { travel_mode: Car, count: 2 },
                ModeCount { travel_mode: Other, count: 2 },
                ModeCount { travel_mode: Flight, count: 1 },
                ModeCount { travel_mode: Bike, count: 1 },
            ]
        );
    }

    #[test]
    fn sum_equals_valid_records() {
        let mut data = dataset(&[TravelMode::Flight, TravelMode::Bike, TravelMode::Bike]);
        let mut entries = data.entries().to_vec();
        entries.push(serde_json::json!({"destination": {"lat": 1.0, "lng": 1.0}}));
        data = Dataset::from_entries(entries);

        let total: usize = mode_counts(&data).iter().map(|c| c.count).sum();
        assert_eq!(total, data.valid_count());
        assert_eq!(total, 3);
    }

    proptest! {
        /// `None` stands for an entry with no travel mode
        #[test]
        fn counts_match_mode_cardinality(
            entries in prop::collection::vec(
                prop::option::of(prop::sample::select(TravelMode::ALL.to_vec())),
                0..40,
            ),
        ) {
            let point = LocationPoint::new(0.0, 0.0).unwrap();
            let data = Dataset::from_entries(
                entries
                    .iter()
                    .map(|entry| match entry {
                        Some(mode) => VisitRecord::new(point, *mode).to_value(),
                        None => serde_json::json!({"destination": {"lat": 1.0, "lng": 1.0}}),
                    })
                    .collect(),
            );

            let counts = mode_counts(&data);
            let total: usize = counts.iter().map(|c| c.count).sum();
            prop_assert_eq!(total, data.valid_count());
            for mode in TravelMode::ALL {
                let expected = entries.iter().filter(|e| **e == Some(mode)).count();
                let actual = counts
                    .iter()
                    .find(|c| c.travel_mode == mode)
                    .map_or(0, |c| c.count);
                prop_assert_eq!(actual, expected);
            }
            prop_assert!(counts.iter().all(|c| c.count > 0));
            prop_assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
        }
    }
}
