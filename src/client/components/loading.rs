use dioxus::prelude::*;

#[component]
pub fn Loading() -> Element {
    rsx!(
        div { class: "flex justify-center items-center p-12",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}
