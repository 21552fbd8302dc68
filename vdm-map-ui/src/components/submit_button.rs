//! Submit control for the pending selection.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SubmitButtonProps {
    /// True while no destination is selected
    pub disabled: bool,
    /// True while a submission is in flight
    #[props(default = false)]
    pub busy: bool,
    pub onclick: EventHandler<()>,
}

#[component]
pub fn SubmitButton(props: SubmitButtonProps) -> Element {
    let inactive = props.disabled || props.busy;
    let onclick = props.onclick;
    let label = if props.busy { "Submitting..." } else { "Submit" };
    let cursor = if inactive { "not-allowed" } else { "pointer" };
    let title = if props.disabled {
        "Click on the map to select your destination"
    } else {
        ""
    };

    rsx! {
        button {
            r#type: "button",
            disabled: inactive,
            style: "padding: 8px 20px; border: none; border-radius: 4px; background: #0BA29D; color: white; font-weight: bold; cursor: {cursor};",
            title: "{title}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
