//! Dropdown selector for the travel mode.

use crate::state::AppState;
use dioxus::prelude::*;
use vdm_core::TravelMode;

/// Travel mode dropdown with the four fixed options.
/// Reads and updates `travel_mode` in AppState.
#[component]
pub fn ModeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.travel_mode)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<TravelMode>() {
        Ok(mode) => state.travel_mode.set(mode),
        Err(e) => log::warn!("Ignoring travel mode selection: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "travel-mode-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select your mode of travel: "
            }
            select {
                id: "travel-mode-select",
                onchange: on_change,
                for mode in TravelMode::ALL {
                    option {
                        value: "{mode}",
                        selected: mode == selected,
                        "{mode}"
                    }
                }
            }
        }
    }
}
