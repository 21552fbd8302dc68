//! Reusable Dioxus RSX components for the vacation destination map.

mod loading_spinner;
mod map_container;
mod mode_counts_chart;
mod mode_selector;
mod page_header;
mod selection_summary;
mod status_banner;
mod submit_button;

pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use mode_counts_chart::ModeCountsChart;
pub use mode_selector::ModeSelector;
pub use page_header::PageHeader;
pub use selection_summary::SelectionSummary;
pub use status_banner::StatusBanner;
pub use submit_button::SubmitButton;
