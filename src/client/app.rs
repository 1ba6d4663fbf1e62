use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ReqwasmTransport, Transport},
        router::Route,
        store::{browser_storage, SessionState},
    },
    config::ClientConfig,
};

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_BROWSER_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    use_context_provider(|| match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid client configuration, using defaults");
            ClientConfig::default()
        }
    });
    let storage = use_context_provider(browser_storage);
    use_context_provider(|| Rc::new(ReqwasmTransport) as Rc<dyn Transport>);
    use_context_provider(|| Signal::new(SessionState::restore(storage.as_ref())));

    rsx! {
        document::Stylesheet { href: DAISYUI_CSS }
        document::Script { src: TAILWIND_BROWSER_JS }
        Router::<Route> {}
    }
}
