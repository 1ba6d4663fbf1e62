use dioxus::prelude::*;

#[component]
pub fn StatCard(label: String, value: String) -> Element {
    rsx!(
        div { class: "stat bg-base-200 rounded-box text-center",
            div { class: "stat-value", "{value}" }
            div { class: "stat-title", "{label}" }
        }
    )
}
