use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::BrandTitle,
    router::Route,
    store::{SessionState, SessionStorage},
};

/// Top bar shared by every route
#[component]
pub fn Navbar() -> Element {
    let mut session = use_context::<Signal<SessionState>>();
    let storage = use_context::<Rc<dyn SessionStorage>>();
    let navigator = navigator();

    let user = session.read().user().cloned();

    let logout = move |_| {
        if let Err(e) = session.write().logout(storage.as_ref()) {
            tracing::error!(error = %e, "Failed to clear persisted session");
        }
        navigator.push(Route::Home {});
    };

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                BrandTitle {}
            }
            div {
                class: "navbar-center hidden md:flex",
                ul { class: "menu menu-horizontal gap-1",
                    li { Link { to: Route::Vacancies {}, "Vacancies" } }
                    if user.is_some() {
                        li { Link { to: Route::Dashboard {}, "Dashboard" } }
                        li { Link { to: Route::Chat {}, "Chat" } }
                        li { Link { to: Route::Analytics {}, "Analytics" } }
                    }
                }
            }
            div {
                class: "navbar-end gap-2",
                if let Some(user) = user {
                    div { class: "flex flex-col items-end text-sm",
                        p { class: "font-semibold", "{user.full_name}" }
                        if let Some(user_type) = user.user_type {
                            p { class: "text-xs opacity-70", "{user_type.label()}" }
                        }
                    }
                    button {
                        class: "btn btn-outline flex gap-2",
                        onclick: logout,
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaRightFromBracket
                        }
                        "Logout"
                    }
                } else {
                    Link { to: Route::Login {}, class: "btn btn-ghost", "Login" }
                    Link { to: Route::Register {}, class: "btn btn-primary", "Register" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
