use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaGraduationCap;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn BrandTitle() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2",
                Icon {
                    width: 24,
                    height: 24,
                    icon: FaGraduationCap
                }
                p { class: "text-xl",
                    "Career Center"
                }
            }
        }
    )
}
