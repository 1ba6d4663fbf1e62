use std::rc::Rc;

use dioxus::prelude::*;

use crate::{
    client::{
        api::{ApiClient, Transport},
        store::SessionState,
    },
    config::ClientConfig,
};

/// API client for the current session, built from the app's context.
pub fn use_api() -> ApiClient {
    let session = use_context::<Signal<SessionState>>();
    let config = use_context::<ClientConfig>();
    let transport = use_context::<Rc<dyn Transport>>();

    let token = session.read().token().map(str::to_string);

    ApiClient::new(transport, &config.api_url, token)
}
