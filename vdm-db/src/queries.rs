//! Insert and query methods on [`Database`].

use rusqlite::params;
use rusqlite::types::Value as SqlValue;
use serde_json::{Map, Value};

use crate::Database;
use vdm_core::aggregate::{sort_counts, ModeCount};
use vdm_core::{Dataset, LocationPoint, TravelMode, VisitRecord};

impl Database {
    /// Insert a validated record, returning its row id.
    pub fn insert_record(&self, record: &VisitRecord) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        conn.execute(
            "INSERT INTO visits (lat, lng, travel_mode) VALUES (?1, ?2, ?3)",
            params![
                record.destination.lat(),
                record.destination.lng(),
                record.travel_mode.as_str()
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Validate raw values and insert them.
    pub fn insert_visit(&self, lat: f64, lng: f64, travel_mode: &str) -> anyhow::Result<i64> {
        let record = VisitRecord::new(LocationPoint::new(lat, lng)?, travel_mode.parse()?);
        self.insert_record(&record)
    }

    /// All rows in insertion order as raw dataset entries.
    ///
    /// SQLite does not enforce column types. A NULL or mistyped column omits
    /// that field, so the row decodes as a malformed entry and is skipped by
    /// markers and counts.
    pub fn query_dataset(&self) -> anyhow::Result<Dataset> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT lat, lng, travel_mode FROM visits ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, SqlValue>(0)?,
                row.get::<_, SqlValue>(1)?,
                row.get::<_, SqlValue>(2)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (lat, lng, travel_mode) = row?;
            entries.push(row_to_entry(
                sql_number(lat),
                sql_number(lng),
                sql_text(travel_mode),
            ));
        }
        let dataset = Dataset::from_entries(entries);
        log::info!(
            "Loaded {} visits, skipped {} malformed",
            dataset.valid_count(),
            dataset.malformed_count()
        );
        Ok(dataset)
    }

    /// Count valid records per travel mode.
    ///
    /// Same result and ordering as [`vdm_core::aggregate::mode_counts`] over
    /// [`Database::query_dataset`].
    pub fn query_mode_counts(&self) -> anyhow::Result<Vec<ModeCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT travel_mode, COUNT(*) FROM visits
             WHERE lat BETWEEN -90 AND 90 AND lng BETWEEN -180 AND 180
             GROUP BY travel_mode",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, SqlValue>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut counts = Vec::new();
        for row in rows {
            let (travel_mode, count) = row?;
            // Unknown or NULL modes are malformed rows
            let Some(travel_mode) = sql_text(travel_mode).and_then(|m| m.parse::<TravelMode>().ok())
            else {
                continue;
            };
            counts.push(ModeCount {
                travel_mode,
                count: usize::try_from(count)?,
            });
        }
        sort_counts(&mut counts);
        Ok(counts)
    }

    /// Total number of rows, malformed included.
    pub fn query_visit_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM visits", [], |row| row.get(0))?;
        Ok(usize::try_from(count)?)
    }
}

fn sql_number(value: SqlValue) -> Option<f64> {
    match value {
        SqlValue::Real(v) => Some(v),
        SqlValue::Integer(v) => Some(v as f64),
        _ => None,
    }
}

fn sql_text(value: SqlValue) -> Option<String> {
    match value {
        SqlValue::Text(s) => Some(s),
        _ => None,
    }
}

fn row_to_entry(lat: Option<f64>, lng: Option<f64>, travel_mode: Option<String>) -> Value {
    let mut entry = Map::new();
    if let (Some(lat), Some(lng)) = (lat, lng) {
        entry.insert(
            "destination".to_string(),
            serde_json::json!({ "lat": lat, "lng": lng }),
        );
    }
    if let Some(travel_mode) = travel_mode {
        entry.insert("travel_mode".to_string(), Value::String(travel_mode));
    }
    Value::Object(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vdm_core::aggregate::mode_counts;

    fn sample_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.insert_visit(48.85, 2.35, "Flight").unwrap();
        db.insert_visit(59.33, 18.07, "Car").unwrap();
        db.insert_visit(41.9, 12.5, "Car").unwrap();
        db.insert_visit(52.52, 13.4, "Bike").unwrap();
        db
    }

    fn insert_raw(db: &Database, lat: Option<f64>, lng: Option<f64>, mode: Option<&str>) {
        db.conn
            .borrow()
            .execute(
                "INSERT INTO visits (lat, lng, travel_mode) VALUES (?1, ?2, ?3)",
                params![lat, lng, mode],
            )
            .unwrap();
    }

    #[test]
    fn insert_visit_validates() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.insert_visit(91.0, 0.0, "Car").is_err());
        assert!(db.insert_visit(0.0, 0.0, "Boat").is_err());
        assert_eq!(db.query_visit_count().unwrap(), 0);
    }

    #[test]
    fn query_dataset_in_insertion_order() {
        let db = sample_db();
        let modes: Vec<TravelMode> = db
            .query_dataset()
            .unwrap()
            .records()
            .map(|r| r.travel_mode)
            .collect();
        assert_eq!(
            modes,
            vec![TravelMode::Flight, TravelMode::Car, TravelMode::Car, TravelMode::Bike]
        );
    }

    #[test]
    fn query_mode_counts_grouped_and_sorted() {
        let db = sample_db();
        let counts = db.query_mode_counts().unwrap();
        assert_eq!(counts[0], ModeCount { travel_mode: TravelMode::Car, count: 2 });
        assert_eq!(counts[1], ModeCount { travel_mode: TravelMode::Flight, count: 1 });
        assert_eq!(counts[2], ModeCount { travel_mode: TravelMode::Bike, count: 1 });
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let db = sample_db();
        insert_raw(&db, Some(10.0), Some(10.0), None);
        insert_raw(&db, None, Some(10.0), Some("Car"));
        insert_raw(&db, Some(10.0), Some(10.0), Some("Boat"));
        insert_raw(&db, Some(95.0), Some(10.0), Some("Flight"));

        let dataset = db.query_dataset().unwrap();
        assert_eq!(dataset.len(), 8);
        assert_eq!(dataset.valid_count(), 4);
        assert_eq!(db.query_visit_count().unwrap(), 8);
    }

    #[test]
    fn mistyped_columns_are_malformed_not_fatal() {
        let db = Database::open_in_memory().unwrap();
        db.insert_visit(48.85, 2.35, "Flight").unwrap();
        db.conn
            .borrow()
            .execute_batch(
                "INSERT INTO visits (lat, lng, travel_mode) VALUES ('north', 10.0, 'Car');
                 INSERT INTO visits (lat, lng, travel_mode) VALUES (10.0, 10.0, 42);
                 INSERT INTO visits (lat, lng, travel_mode) VALUES (10.0, X'00', 'Bike');
                 INSERT INTO visits (lat, lng, travel_mode) VALUES (12, 7, 'Car');",
            )
            .unwrap();

        let dataset = db.query_dataset().unwrap();
        assert_eq!(dataset.len(), 5);
        let modes: Vec<TravelMode> = dataset.records().map(|r| r.travel_mode).collect();
        assert_eq!(modes, vec![TravelMode::Flight, TravelMode::Car]);

        let counts = db.query_mode_counts().unwrap();
        assert_eq!(counts, mode_counts(&dataset));
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 2);
    }

    #[test]
    fn sql_counts_match_in_memory_counts() {
        let db = sample_db();
        insert_raw(&db, Some(10.0), Some(10.0), Some("Boat"));
        insert_raw(&db, Some(95.0), Some(10.0), Some("Flight"));
        insert_raw(&db, None, None, Some("Car"));

        let sql = db.query_mode_counts().unwrap();
        let memory = mode_counts(&db.query_dataset().unwrap());
        assert_eq!(sql, memory);
    }

    #[test]
    fn empty_database_has_no_counts() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.query_mode_counts().unwrap().is_empty());
    }
}
