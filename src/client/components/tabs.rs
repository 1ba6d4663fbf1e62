use dioxus::prelude::*;

#[component]
pub fn TabButton(label: &'static str, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let class = if active { "tab tab-active" } else { "tab" };

    rsx!(
        button {
            class: "{class}",
            role: "tab",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    )
}
