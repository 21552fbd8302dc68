//! Summer Vacation Destination Map
//!
//! A visitor clicks a destination on the world map, picks how they travel
//! there, and submits. Every submission is appended to a shared dataset; the
//! page shows one marker per submission and a bar chart of travel modes.
//!
//! Data flow:
//! 1. On mount the dataset is loaded from the store chosen by `VDM_STORE_URL`
//!    at build time (unset means browser `localStorage`). A failed load shows
//!    a warning over an empty map.
//! 2. Map clicks arrive from Leaflet through a JS closure and a channel, and
//!    become the session's pending selection.
//! 3. Submit appends the pending point with the selected travel mode, then
//!    reloads the dataset. A failed write keeps the selection for a retry.
//! 4. After every change the whole view is re-derived with `vdm_core::render`
//!    and pushed to the Leaflet map and the D3 bar chart.

use dioxus::prelude::*;
use futures::channel::mpsc;
use futures::StreamExt;
use vdm_core::view::ChartView;
use vdm_core::{render, LocationPoint};
use vdm_map_ui::app_store::AppStore;
use vdm_map_ui::components::{
    LoadingSpinner, MapContainer, ModeCountsChart, ModeSelector, PageHeader, SelectionSummary,
    StatusBanner, SubmitButton,
};
use vdm_map_ui::js_bridge;
use vdm_map_ui::state::AppState;

/// Backend location baked in at build time.
const STORE_URL: Option<&str> = option_env!("VDM_STORE_URL");

/// Widget container DOM element IDs.
const MAP_ID: &str = "destination-map";
const CHART_ID: &str = "travel-mode-chart";

const TITLE: &str = "Summer Vacation Destination Map";
const INTRO: &str = "Welcome to the Summer Vacation Destination Map! \
    Please click on the map to select your destination and enter your mode of travel. \
    Your input will help us create an aggregated map of vacation destinations and travel modes.";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("vacation-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let store = use_context_provider(|| AppStore::from_location(STORE_URL));

    // Initial load and map click bridge, once per mount
    let mount_store = store.clone();
    use_hook(move || {
        js_bridge::init_widgets();

        let (tx, mut rx) = mpsc::unbounded::<(f64, f64)>();
        js_bridge::register_map_click_handler(move |lat, lng| {
            let _ = tx.unbounded_send((lat, lng));
        });
        spawn(async move {
            while let Some((lat, lng)) = rx.next().await {
                on_map_click(state, lat, lng);
            }
        });

        log::info!("Using {}", mount_store.describe());
        spawn(async move {
            reload(state, &mount_store).await;
        });
    });

    // Push the derived view to the map and chart after every change
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let view = render(&state.dataset.read(), &state.session.read());

        let markers_json = serde_json::to_string(&view.markers).unwrap_or_default();
        let pending_json = serde_json::to_string(&view.selected).unwrap_or_default();
        js_bridge::render_map(MAP_ID, &markers_json, &pending_json);

        if let ChartView::Bars(counts) = &view.chart {
            let data_json = serde_json::to_string(counts).unwrap_or_default();
            let config_json = serde_json::to_string(&serde_json::json!({
                "xAxisLabel": "Travel Mode",
                "yAxisLabel": "Count",
                "barColor": "#0BA29D",
                "height": 300,
            }))
            .unwrap_or_default();
            js_bridge::render_bar_chart(CHART_ID, &data_json, &config_json);
        }
    });

    let submit_store = store.clone();
    let on_submit = move |_: ()| {
        // Claimed before spawning so a second click is rejected immediately
        if !state.try_begin_submit() {
            return;
        }
        let store = submit_store.clone();
        spawn(async move {
            let mode = *state.travel_mode.peek();
            let mut session = state.session.peek().clone();
            match session.submit(&store, mode).await {
                Ok(dataset) => state.dataset.set(dataset),
                Err(e) => log::warn!("Submission not saved: {}", e),
            }
            state.session.set(session);
            state.finish_submit();
        });
    };

    let view = render(&state.dataset.read(), &state.session.read());
    let loading = (state.loading)();
    let busy = (state.busy)();
    let backend = store.describe();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader {
                title: TITLE.to_string(),
                description: INTRO.to_string(),
            }

            if let Some(status) = view.status.clone() {
                StatusBanner { status }
            }

            div {
                style: "display: flex; gap: 24px; flex-wrap: wrap; align-items: flex-start;",

                // Map, selection and submission
                div {
                    style: "flex: 2; min-width: 320px;",
                    MapContainer {
                        id: MAP_ID.to_string(),
                        loading,
                    }
                    if let Some(text) = view.selection_text.clone() {
                        SelectionSummary { text }
                    } else if !loading {
                        p {
                            style: "margin: 8px 0; color: #666;",
                            "Click on the map to select your destination."
                        }
                    }
                    ModeSelector {}
                    SubmitButton {
                        disabled: !view.can_submit,
                        busy,
                        onclick: on_submit,
                    }
                }

                // Travel mode counts
                div {
                    style: "flex: 1; min-width: 240px;",
                    h3 {
                        style: "margin: 0 0 8px 0; font-size: 18px;",
                        "Travel Mode Counts"
                    }
                    if loading {
                        LoadingSpinner {}
                    } else {
                        ModeCountsChart {
                            id: CHART_ID.to_string(),
                            chart: view.chart.clone(),
                        }
                    }
                }
            }

            div {
                style: "margin-top: 16px; padding: 8px 12px; background: #F5F5F5; border-radius: 4px; font-size: 12px; color: #616161; border: 1px solid #E0E0E0;",
                "Destinations are saved to {backend}."
                if view.malformed_entries > 0 {
                    " {view.malformed_entries} stored entries could not be shown."
                }
            }
        }
    }
}

/// Turn a raw map click into the pending selection.
fn on_map_click(mut state: AppState, lat: f64, lng: f64) {
    if !state.accepts_input() {
        log::debug!("Ignoring map click while busy");
        return;
    }
    match LocationPoint::from_click(lat, lng) {
        Ok(point) => state.session.write().select(point),
        Err(e) => log::warn!("Ignoring map click: {}", e),
    }
}

/// Load the dataset into state, degrading to empty with a warning on failure.
async fn reload(mut state: AppState, store: &AppStore) {
    let mut session = state.session.peek().clone();
    let dataset = session.refresh(store).await;
    state.session.set(session);
    state.dataset.set(dataset);
    state.loading.set(false);
}
