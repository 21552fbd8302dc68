//! Aggregate output: `counts` and `export`.

use std::path::Path;

use log::info;
use serde::Serialize;
use vdm_core::aggregate::ModeCount;
use vdm_core::view::NO_DATA_TEXT;
use vdm_core::{Dataset, Store};

use crate::store::CliStore;

/// One CSV row of the export.
#[derive(Debug, Serialize)]
struct ExportRow {
    lat: f64,
    lng: f64,
    travel_mode: &'static str,
}

pub async fn run_counts(store: &CliStore) -> anyhow::Result<()> {
    let counts = store.mode_counts().await?;
    for line in format_counts(&counts) {
        println!("{}", line);
    }
    Ok(())
}

pub async fn run_export(store: &CliStore, output: &str) -> anyhow::Result<()> {
    let dataset = store.load().await?;
    let written = write_csv(&dataset, output)?;
    info!("Exported {} records to {}", written, output);
    println!("Exported {} records to {}", written, output);
    Ok(())
}

/// Counts table, or the no-data message when nothing is recorded.
pub fn format_counts(counts: &[ModeCount]) -> Vec<String> {
    if counts.is_empty() {
        return vec![NO_DATA_TEXT.to_string()];
    }
    let mut lines = vec![format!("{:<8} {:>6}", "Mode", "Count")];
    lines.extend(
        counts
            .iter()
            .map(|c| format!("{:<8} {:>6}", c.travel_mode.as_str(), c.count)),
    );
    lines
}

/// Write valid records as `lat,lng,travel_mode` with a header row.
/// Returns the number of records written.
pub fn write_csv(dataset: &Dataset, output: impl AsRef<Path>) -> anyhow::Result<usize> {
    let mut writer = csv::Writer::from_path(output)?;
    let mut written = 0;
    for record in dataset.records() {
        writer.serialize(ExportRow {
            lat: record.destination.lat(),
            lng: record.destination.lng(),
            travel_mode: record.travel_mode.as_str(),
        })?;
        written += 1;
    }
    // Header only appears with the first row
    if written == 0 {
        writer.write_record(["lat", "lng", "travel_mode"])?;
    }
    writer.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempdir::TempDir;
    use vdm_core::aggregate::mode_counts;
    use vdm_core::TravelMode;

    fn sample() -> Dataset {
        Dataset::from_entries(vec![
            json!({"destination": {"lat": 48.85, "lng": 2.35}, "travel_mode": "Flight"}),
            json!({"destination": {"lat": 40.0, "lng": -74.0}, "travel_mode": "Car"}),
            json!("garbage"),
            json!({"destination": {"lat": 41.9, "lng": 12.5}, "travel_mode": "Flight"}),
        ])
    }

    #[test]
    fn counts_table_lists_modes_by_count() {
        let lines = format_counts(&mode_counts(&sample()));
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Mode"));
        assert!(lines[1].starts_with("Flight"));
        assert!(lines[1].ends_with('2'));
        assert!(lines[2].starts_with("Car"));
    }

    #[test]
    fn empty_counts_show_no_data() {
        assert_eq!(format_counts(&[]), vec!["No data available."]);
    }

    #[test]
    fn export_writes_header_and_valid_rows() {
        let dir = TempDir::new("vdm-export").unwrap();
        let path = dir.path().join("out.csv");

        let written = write_csv(&sample(), &path).unwrap();
        assert_eq!(written, 3);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "lat,lng,travel_mode");
        assert_eq!(lines[1], "48.85,2.35,Flight");
        assert_eq!(lines[2], "40.0,-74.0,Car");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn export_of_empty_dataset_has_header_only() {
        let dir = TempDir::new("vdm-export").unwrap();
        let path = dir.path().join("empty.csv");

        assert_eq!(write_csv(&Dataset::new(), &path).unwrap(), 0);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), "lat,lng,travel_mode");
    }

    #[tokio::test]
    async fn sqlite_counts_match_in_memory_counts() {
        let dir = TempDir::new("vdm-counts").unwrap();
        let location = format!("sqlite:{}", dir.path().join("visits.db").display());
        let store = CliStore::open(&location).unwrap();

        crate::records::run_add(&store, 1.0, 1.0, TravelMode::Bike).await.unwrap();
        crate::records::run_add(&store, 2.0, 2.0, TravelMode::Car).await.unwrap();
        crate::records::run_add(&store, 3.0, 3.0, TravelMode::Car).await.unwrap();

        let from_sql = store.mode_counts().await.unwrap();
        let from_dataset = mode_counts(&store.load().await.unwrap());
        assert_eq!(from_sql, from_dataset);
        assert_eq!(from_sql[0].travel_mode, TravelMode::Car);
        assert_eq!(from_sql[0].count, 2);
    }

    #[tokio::test]
    async fn memory_store_starts_empty() {
        let store = CliStore::open("memory:").unwrap();
        assert!(store.mode_counts().await.unwrap().is_empty());
    }
}
