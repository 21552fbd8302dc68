//! Map container the Leaflet widget renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id Leaflet attaches to
    pub id: String,
    /// Whether the dataset is still loading
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 500)]
    pub height: u32,
}

/// A fixed-height div for the map with a loading overlay.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "height: {}px; width: 100%; border-radius: 4px; border: 1px solid #E0E0E0; cursor: crosshair;",
        props.height
    );

    rsx! {
        div {
            style: "position: relative; width: 100%;",
            div {
                id: "{props.id}",
                style: "{style}",
            }
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666; z-index: 1000;",
                    "Loading map..."
                }
            }
        }
    }
}
