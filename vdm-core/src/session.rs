//! Per-user session state and the submission flow.
//!
//! A `SessionContext` is owned by one interactive session and passed into
//! each operation; nothing here is process-global.

use crate::dataset::{Dataset, VisitRecord};
use crate::error::{SubmitError, ValidationError};
use crate::location::LocationPoint;
use crate::store::Store;
use crate::travel_mode::TravelMode;

/// Message shown after a submission succeeds.
pub const SUCCESS_TEXT: &str = "Thank you for your input!";

/// User-visible outcome of the last interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusMessage {
    Success(String),
    Warning(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Success(s) | StatusMessage::Warning(s) | StatusMessage::Error(s) => s,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    pending: Option<LocationPoint>,
    status: Option<StatusMessage>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The clicked point awaiting a travel mode, if any.
    pub fn pending(&self) -> Option<LocationPoint> {
        self.pending
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Record a map click. Replaces any earlier pending point without asking.
    pub fn select(&mut self, point: LocationPoint) {
        log::debug!("Selected destination {}", point);
        self.pending = Some(point);
        self.status = None;
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Load the dataset, degrading to empty with a warning when the backend
    /// cannot be read. A successful load clears a stale warning.
    pub async fn refresh<S: Store>(&mut self, store: &S) -> Dataset {
        match store.load().await {
            Ok(dataset) => {
                if matches!(self.status, Some(StatusMessage::Warning(_))) {
                    self.status = None;
                }
                let malformed = dataset.malformed_count();
                if malformed > 0 {
                    log::info!("Skipping {} malformed entries", malformed);
                }
                dataset
            }
            Err(e) => {
                log::warn!("Failed to load destinations: {}", e);
                self.status = Some(StatusMessage::Warning(format!(
                    "Could not load destinations ({}). Showing an empty map.",
                    e
                )));
                Dataset::new()
            }
        }
    }

    /// Bind the pending point to `mode` and append it to `store`.
    ///
    /// On success the pending point is cleared and a freshly reloaded dataset
    /// is returned. On failure the pending point is kept so the user can retry
    /// without clicking again, and nothing is written when no point is pending.
    pub async fn submit<S: Store>(
        &mut self,
        store: &S,
        mode: TravelMode,
    ) -> Result<Dataset, SubmitError> {
        let Some(point) = self.pending else {
            self.status = Some(StatusMessage::Warning(
                "Click on the map to select your destination first.".to_string(),
            ));
            return Err(ValidationError::NoPendingSelection.into());
        };

        let record = VisitRecord::new(point, mode);
        if let Err(e) = store.append(&record).await {
            log::error!("Failed to save destination {} ({}): {}", point, mode, e);
            self.status = Some(StatusMessage::Error(format!(
                "Could not save your destination: {}",
                e
            )));
            return Err(e.into());
        }

        log::info!("Saved destination {} ({})", point, mode);
        self.pending = None;
        self.status = None;
        let dataset = self.refresh(store).await;

        // The record is saved even when the reload fails
        let text = match self.status.take() {
            Some(StatusMessage::Warning(reload)) => format!("{} {}", SUCCESS_TEXT, reload),
            _ => SUCCESS_TEXT.to_string(),
        };
        self.status = Some(StatusMessage::Success(text));
        Ok(dataset)
    }
}
