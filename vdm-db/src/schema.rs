//! SQL schema definitions for the visit database.

/// Returns the full SQL schema as a single batch string.
///
/// - `visits` - one row per submitted record; `id` gives insertion order
///
/// Columns are nullable so rows written by other tools with missing values
/// load as malformed entries instead of failing the whole read.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS visits (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        lat REAL,
        lng REAL,
        travel_mode TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_visits_mode ON visits(travel_mode);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_applies_cleanly() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema()).unwrap();
    }
}
