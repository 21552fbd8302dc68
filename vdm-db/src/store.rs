use crate::Database;
use vdm_core::error::Result;
use vdm_core::{Dataset, Store, StoreError, VisitRecord};

impl Store for Database {
    async fn load(&self) -> Result<Dataset> {
        self.query_dataset()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn append(&self, record: &VisitRecord) -> Result<()> {
        self.insert_record(record)
            .map(|_| ())
            .map_err(|e| StoreError::Write(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vdm_core::{LocationPoint, SessionContext, TravelMode};

    #[tokio::test]
    async fn submission_flow_over_sqlite() {
        let db = Database::open_in_memory().unwrap();
        let mut session = SessionContext::new();
        let paris = LocationPoint::new(48.85, 2.35).unwrap();

        session.select(paris);
        session.submit(&db, TravelMode::Flight).await.unwrap();
        session.select(paris);
        let dataset = session.submit(&db, TravelMode::Car).await.unwrap();

        let records: Vec<VisitRecord> = dataset.records().collect();
        assert_eq!(
            records,
            vec![
                VisitRecord::new(paris, TravelMode::Flight),
                VisitRecord::new(paris, TravelMode::Car),
            ]
        );
    }

    #[tokio::test]
    async fn load_after_append() {
        let db = Database::open_in_memory().unwrap();
        let record = VisitRecord::new(LocationPoint::new(-33.9, 151.2).unwrap(), TravelMode::Other);
        db.append(&record).await.unwrap();
        assert_eq!(db.load().await.unwrap().records().next(), Some(record));
    }
}
