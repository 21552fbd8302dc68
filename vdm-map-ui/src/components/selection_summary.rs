use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SelectionSummaryProps {
    pub text: String,
}

/// Shows the clicked point awaiting a travel mode.
#[component]
pub fn SelectionSummary(props: SelectionSummaryProps) -> Element {
    rsx! {
        p {
            style: "margin: 8px 0; font-weight: bold; color: #1565C0;",
            "{props.text}"
        }
    }
}
