//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use vdm_core::{Dataset, SessionContext, TravelMode};

/// Shared application state for the map page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Last dataset loaded from the store (empty if the load failed)
    pub dataset: Signal<Dataset>,
    /// Pending selection and last status for this browser session
    pub session: Signal<SessionContext>,
    /// Travel mode currently chosen in the selector
    pub travel_mode: Signal<TravelMode>,
    /// Whether the initial load is still running
    pub loading: Signal<bool>,
    /// Whether a submission is in flight; map clicks are ignored meanwhile
    pub busy: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(Dataset::new()),
            session: Signal::new(SessionContext::new()),
            travel_mode: Signal::new(TravelMode::default()),
            loading: Signal::new(true),
            busy: Signal::new(false),
        }
    }

    /// Whether user input should be accepted right now.
    pub fn accepts_input(&self) -> bool {
        !*self.loading.peek() && !*self.busy.peek()
    }

    /// Mark a submission as in flight. Returns false, changing nothing, while
    /// loading or while another submission runs.
    pub fn try_begin_submit(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.busy.set(true);
        true
    }

    pub fn finish_submit(&mut self) {
        self.busy.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
