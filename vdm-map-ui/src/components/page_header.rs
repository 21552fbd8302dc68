//! Page title with the welcome text.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub description: String,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        header {
            style: "margin-bottom: 16px;",
            h1 {
                style: "margin: 0 0 8px 0; font-size: 28px; color: #2c3e50;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 0; font-size: 14px; color: #555; max-width: 760px;",
                    "{props.description}"
                }
            }
        }
    }
}
