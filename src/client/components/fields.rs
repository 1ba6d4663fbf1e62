use dioxus::prelude::*;

#[component]
pub fn TextField(label: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx!(
        label { class: "flex flex-col gap-1",
            span { class: "label", "{label}" }
            input {
                class: "input input-bordered w-full",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    )
}

#[component]
pub fn TextArea(label: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx!(
        label { class: "flex flex-col gap-1",
            span { class: "label", "{label}" }
            textarea {
                class: "textarea textarea-bordered w-full",
                rows: 3,
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    )
}

/// A labelled read-only value, with a dash when unset
#[component]
pub fn Detail(label: String, #[props(!optional)] value: Option<String>) -> Element {
    let value = value.unwrap_or_else(|| "-".to_string());

    rsx!(
        div {
            dt { class: "text-sm opacity-70", "{label}" }
            dd { "{value}" }
        }
    )
}
