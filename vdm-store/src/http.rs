//! Remote JSON endpoint backend.
//!
//! `load` GETs the full array from the endpoint. `append` POSTs either the new
//! record alone or, for blob-style endpoints that only store a whole document,
//! the full updated array. Any transport failure or non-2xx status is reported
//! once; there is no retry.

use reqwest::Client;

use crate::location::AppendStrategy;
use vdm_core::error::Result;
use vdm_core::{Dataset, Store, StoreError, VisitRecord};

#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    url: String,
    strategy: AppendStrategy,
}

impl HttpStore {
    pub fn new(url: impl Into<String>, strategy: AppendStrategy) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            strategy,
        }
    }

    /// Use a preconfigured client (timeouts, proxy settings, headers).
    pub fn with_client(client: Client, url: impl Into<String>, strategy: AppendStrategy) -> Self {
        Self {
            client,
            url: url.into(),
            strategy,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn strategy(&self) -> AppendStrategy {
        self.strategy
    }

    async fn post_json<T: serde::Serialize + ?Sized>(&self, body: &T) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(body)
            .send()
            .await
            .map_err(|e| StoreError::Write(format!("{}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("POST {} rejected: {}", self.url, status);
            return Err(StoreError::Write(format!("{} returned {}", self.url, status)));
        }
        Ok(())
    }
}

impl Store for HttpStore {
    async fn load(&self) -> Result<Dataset> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {} failed: {}", self.url, status);
            return Err(StoreError::Unavailable(format!(
                "{} returned {}",
                self.url, status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", self.url, e)))?;
        let dataset = Dataset::from_json(&body)
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", self.url, e)))?;
        log::info!(
            "Fetched {} entries from {} ({} malformed)",
            dataset.len(),
            self.url,
            dataset.malformed_count()
        );
        Ok(dataset)
    }

    async fn append(&self, record: &VisitRecord) -> Result<()> {
        match self.strategy {
            AppendStrategy::SingleRecord => self.post_json(record).await,
            AppendStrategy::FullDataset => {
                let mut dataset = self
                    .load()
                    .await
                    .map_err(|e| StoreError::Write(e.to_string()))?;
                dataset.push(*record);
                self.post_json(dataset.entries()).await
            }
        }
    }
}
