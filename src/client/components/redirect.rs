use dioxus::prelude::*;

use crate::client::router::Route;

/// Replaces the current history entry with `to` once mounted
#[component]
pub fn Redirect(to: Route) -> Element {
    let navigator = navigator();

    use_effect(move || {
        navigator.replace(to.clone());
    });

    rsx!()
}
