use dioxus::prelude::*;

/// Content area below the fixed navbar, with an optional heading
#[component]
pub fn Page(
    class: Option<&'static str>,
    title: Option<String>,
    subtitle: Option<String>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or("");

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-4 {class}",
            div { class: "w-full max-w-[1440px] mx-auto flex flex-col gap-4 p-2",
                if let Some(title) = title {
                    div {
                        h1 { class: "text-2xl font-bold", "{title}" }
                        if let Some(subtitle) = subtitle {
                            p { class: "opacity-70", "{subtitle}" }
                        }
                    }
                }
                {children}
            }
        }
    )
}
