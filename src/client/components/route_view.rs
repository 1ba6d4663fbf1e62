use dioxus::prelude::*;

use crate::client::{
    components::Redirect,
    router::{dispatch, Dispatch, Screen, View},
    routes::{
        dashboard::{CompanyDashboard, ModeratorDashboard, StudentDashboard, UniversityDashboard},
        AnalyticsView, ChatView, HomeView, LoginView, RegisterView, VacanciesView,
    },
    store::SessionState,
};

/// Runs session gating for a screen and renders the outcome
#[component]
pub fn RouteView(screen: Screen) -> Element {
    let session = use_context::<Signal<SessionState>>();
    let user = session.read().user().cloned();

    match dispatch(screen, user.as_ref()) {
        Dispatch::Redirect(target) => rsx!(Redirect { to: target.route() }),
        Dispatch::Render(view) => match view {
            View::Home(user) => rsx!(HomeView { user }),
            View::Vacancies(user) => rsx!(VacanciesView { user }),
            View::Login => rsx!(LoginView {}),
            View::Register => rsx!(RegisterView {}),
            View::StudentDashboard(user) => rsx!(StudentDashboard { user }),
            View::CompanyDashboard(user) => rsx!(CompanyDashboard { user }),
            View::UniversityDashboard(user) => rsx!(UniversityDashboard { user }),
            View::ModeratorDashboard(user) => rsx!(ModeratorDashboard { user }),
            View::Chat(user) => rsx!(ChatView { user }),
            View::Analytics(user) => rsx!(AnalyticsView { user }),
        },
    }
}
