//! Record-level commands: `init`, `list` and `add`.

use log::info;
use vdm_core::{Dataset, LocationPoint, Store, TravelMode, VisitRecord};

use crate::store::CliStore;

/// Make sure the store exists and is readable.
///
/// Opening a file or SQLite location already creates it; this confirms the
/// backend loads and reports how many entries it holds.
pub async fn run_init(store: &CliStore) -> anyhow::Result<()> {
    let dataset = store.load().await?;
    println!(
        "Store ready: {} entries ({} malformed)",
        dataset.len(),
        dataset.malformed_count()
    );
    Ok(())
}

pub async fn run_list(store: &CliStore) -> anyhow::Result<()> {
    let dataset = store.load().await?;
    for line in format_records(&dataset) {
        println!("{}", line);
    }
    let skipped = dataset.malformed_count();
    if skipped > 0 {
        info!("Skipped {} malformed entries", skipped);
        println!("({} malformed entries skipped)", skipped);
    }
    Ok(())
}

/// Validate and append one destination.
pub async fn run_add(
    store: &CliStore,
    lat: f64,
    lng: f64,
    mode: TravelMode,
) -> anyhow::Result<()> {
    let record = build_record(lat, lng, mode)?;
    store.append(&record).await?;
    println!("Added {} ({})", record.destination, record.travel_mode);
    Ok(())
}

/// Strict coordinates: unlike a map click, the longitude is not wrapped.
pub fn build_record(lat: f64, lng: f64, mode: TravelMode) -> anyhow::Result<VisitRecord> {
    let point = LocationPoint::new(lat, lng)?;
    Ok(VisitRecord::new(point, mode))
}

/// One numbered line per valid record, in stored order.
pub fn format_records(dataset: &Dataset) -> Vec<String> {
    if dataset.valid_count() == 0 {
        return vec!["No destinations recorded.".to_string()];
    }
    dataset
        .records()
        .enumerate()
        .map(|(i, r)| {
            let point = r.destination.to_string();
            format!("{:>4}. {:<22} {}", i + 1, point, r.travel_mode)
        })
        .collect()
}
