//! Pure view model derived after every state transition.
//!
//! The UI re-renders the whole page from `render(&dataset, &session)`; there
//! is no incremental diffing.

use serde::Serialize;

use crate::aggregate::{mode_counts, ModeCount};
use crate::dataset::Dataset;
use crate::location::LocationPoint;
use crate::session::{SessionContext, StatusMessage};
use crate::travel_mode::TravelMode;

/// Literal shown in place of the chart when there is nothing to count.
pub const NO_DATA_TEXT: &str = "No data available.";

/// One map marker per valid record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub travel_mode: TravelMode,
    /// Marker label (the travel mode)
    pub label: String,
    /// Popup text, e.g. "Destination (Flight)"
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    NoData,
    Bars(Vec<ModeCount>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub markers: Vec<Marker>,
    pub selected: Option<LocationPoint>,
    /// "Destination Selected: lat, lng" while a click is pending
    pub selection_text: Option<String>,
    pub chart: ChartView,
    pub status: Option<StatusMessage>,
    /// Submit is only possible with a pending selection
    pub can_submit: bool,
    pub malformed_entries: usize,
}

pub fn render(dataset: &Dataset, session: &SessionContext) -> ViewModel {
    let markers: Vec<Marker> = dataset
        .records()
        .map(|record| Marker {
            lat: record.destination.lat(),
            lng: record.destination.lng(),
            travel_mode: record.travel_mode,
            label: record.travel_mode.to_string(),
            popup: format!("Destination ({})", record.travel_mode),
        })
        .collect();

    let counts = mode_counts(dataset);
    let chart = if counts.is_empty() {
        ChartView::NoData
    } else {
        ChartView::Bars(counts)
    };

    let selected = session.pending();
    ViewModel {
        markers,
        selected,
        selection_text: selected.map(|p| format!("Destination Selected: {}", p)),
        chart,
        status: session.status().cloned(),
        can_submit: selected.is_some(),
        malformed_entries: dataset.malformed_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::VisitRecord;
    use crate::store::MemoryStore;

    #[test]
    fn empty_dataset_shows_no_data() {
        let view = render(&Dataset::new(), &SessionContext::new());
        assert!(view.markers.is_empty());
        assert_eq!(view.chart, ChartView::NoData);
        assert!(!view.can_submit);
        assert_eq!(view.selection_text, None);
    }

    #[test]
    fn malformed_entry_is_skipped() {
        let dataset = Dataset::from_json(
            r#"[
                {"destination": {"lat": 48.85, "lng": 2.35}, "travel_mode": "Flight"},
                {"destination": {"lat": 40.71, "lng": -74.0}},
                {"destination": {"lat": 35.68, "lng": 139.69}, "travel_mode": "Other"}
            ]"#,
        )
        .unwrap();
        let view = render(&dataset, &SessionContext::new());

        assert_eq!(view.markers.len(), 2);
        assert_eq!(view.markers[0].label, "Flight");
        assert_eq!(view.markers[0].popup, "Destination (Flight)");
        assert_eq!(view.markers[1].travel_mode, TravelMode::Other);
        assert_eq!(view.malformed_entries, 1);
        match view.chart {
            ChartView::Bars(counts) => {
                assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 2)
            }
            ChartView::NoData => panic!("expected bars"),
        }
    }

    #[test]
    fn only_malformed_entries_shows_no_data() {
        let dataset = Dataset::from_json(r#"[{"travel_mode": "Car"}]"#).unwrap();
        let view = render(&dataset, &SessionContext::new());
        assert!(view.markers.is_empty());
        assert_eq!(view.chart, ChartView::NoData);
    }

    #[test]
    fn pending_selection_enables_submit() {
        let mut session = SessionContext::new();
        session.select(LocationPoint::new(48.85, 2.35).unwrap());
        let view = render(&Dataset::new(), &session);
        assert!(view.can_submit);
        assert_eq!(
            view.selection_text.as_deref(),
            Some("Destination Selected: 48.8500, 2.3500")
        );
    }

    #[tokio::test]
    async fn first_submission_shows_single_flight_bar() {
        let store = MemoryStore::new();
        let mut session = SessionContext::new();

        let dataset = session.refresh(&store).await;
        assert_eq!(render(&dataset, &session).chart, ChartView::NoData);

        session.select(LocationPoint::new(48.85, 2.35).unwrap());
        let dataset = session.submit(&store, TravelMode::Flight).await.unwrap();
        let view = render(&dataset, &session);

        assert_eq!(
            view.chart,
            ChartView::Bars(vec![ModeCount {
                travel_mode: TravelMode::Flight,
                count: 1
            }])
        );
        assert_eq!(view.markers.len(), 1);
        assert!(!view.can_submit);
        let first: Option<VisitRecord> = dataset.records().next();
        assert_eq!(first.map(|r| r.travel_mode), Some(TravelMode::Flight));
    }

    #[tokio::test]
    async fn unavailable_store_renders_zero_markers_with_warning() {
        let store = MemoryStore::new();
        store.set_read_failure(true);
        let mut session = SessionContext::new();

        let dataset = session.refresh(&store).await;
        let view = render(&dataset, &session);

        assert!(view.markers.is_empty());
        assert!(matches!(view.status, Some(StatusMessage::Warning(_))));
    }
}
