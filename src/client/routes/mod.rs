//! Route components.
//!
//! Each route only names its [`Screen`]; [`RouteView`] applies session gating and
//! picks the view to render.

pub mod analytics;
pub mod chat;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
pub mod vacancies;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{components::RouteView, router::Screen};

pub use analytics::AnalyticsView;
pub use chat::ChatView;
pub use home::HomeView;
pub use login::LoginView;
pub use register::RegisterView;
pub use vacancies::VacanciesView;

#[component]
pub fn Home() -> Element {
    rsx!(RouteView { screen: Screen::Home })
}

#[component]
pub fn Login() -> Element {
    rsx!(RouteView { screen: Screen::Login })
}

#[component]
pub fn Register() -> Element {
    rsx!(RouteView { screen: Screen::Register })
}

#[component]
pub fn Dashboard() -> Element {
    rsx!(RouteView { screen: Screen::Dashboard })
}

#[component]
pub fn Vacancies() -> Element {
    rsx!(RouteView { screen: Screen::Vacancies })
}

#[component]
pub fn Chat() -> Element {
    rsx!(RouteView { screen: Screen::Chat })
}

#[component]
pub fn Analytics() -> Element {
    rsx!(RouteView { screen: Screen::Analytics })
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "Unknown path, sending home");

    rsx!(RouteView { screen: Screen::Unknown })
}
