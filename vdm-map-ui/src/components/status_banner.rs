//! Status area for the outcome of the last interaction.

use dioxus::prelude::*;
use vdm_core::StatusMessage;

#[derive(Props, Clone, PartialEq)]
pub struct StatusBannerProps {
    pub status: StatusMessage,
}

/// Success, warning or error message in a styled box.
#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    let (prefix, style) = match &props.status {
        StatusMessage::Success(_) => (
            "",
            "background: #E8F5E9; color: #2E7D32; border: 1px solid #A5D6A7;",
        ),
        StatusMessage::Warning(_) => (
            "Warning: ",
            "background: #FFF8E1; color: #8D6E00; border: 1px solid #FFE082;",
        ),
        StatusMessage::Error(_) => (
            "Error: ",
            "background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A;",
        ),
    };
    let text = props.status.text().to_string();

    rsx! {
        div {
            role: "status",
            style: "padding: 12px 16px; margin: 8px 0; border-radius: 4px; {style}",
            if !prefix.is_empty() {
                strong { "{prefix}" }
            }
            "{text}"
        }
    }
}
