//! URL routes and role dispatch.
//!
//! Every route component hands its [`Screen`] to [`dispatch`] together with the
//! signed-in user, and renders whatever it decides. Keeping that decision a pure
//! function lets the gating rules be tested without a DOM.

use dioxus::prelude::*;

use crate::{
    client::{
        components::Navbar,
        routes::{Analytics, Chat, Dashboard, Home, Login, NotFound, Register, Vacancies},
    },
    model::user::{UserDto, UserType},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/dashboard")]
    Dashboard {},

    #[route("/vacancies")]
    Vacancies {},

    #[route("/chat")]
    Chat {},

    #[route("/analytics")]
    Analytics {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// The screen a route asks for, before session gating
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Login,
    Register,
    Dashboard,
    Vacancies,
    Chat,
    Analytics,
    Unknown,
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Self::Home | Self::Unknown => Route::Home {},
            Self::Login => Route::Login {},
            Self::Register => Route::Register {},
            Self::Dashboard => Route::Dashboard {},
            Self::Vacancies => Route::Vacancies {},
            Self::Chat => Route::Chat {},
            Self::Analytics => Route::Analytics {},
        }
    }
}

impl From<&Route> for Screen {
    fn from(route: &Route) -> Self {
        match route {
            Route::Home {} => Self::Home,
            Route::Login {} => Self::Login,
            Route::Register {} => Self::Register,
            Route::Dashboard {} => Self::Dashboard,
            Route::Vacancies {} => Self::Vacancies,
            Route::Chat {} => Self::Chat,
            Route::Analytics {} => Self::Analytics,
            Route::NotFound { .. } => Self::Unknown,
        }
    }
}

/// What to put on screen once gating has run
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Home(Option<UserDto>),
    Vacancies(Option<UserDto>),
    Login,
    Register,
    StudentDashboard(UserDto),
    CompanyDashboard(UserDto),
    UniversityDashboard(UserDto),
    ModeratorDashboard(UserDto),
    Chat(UserDto),
    Analytics(UserDto),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Dispatch {
    Render(View),
    Redirect(Screen),
}

/// Decides what a screen shows for the given session user.
///
/// - unknown paths go home
/// - signed-in users skip the login and registration forms
/// - gated screens send signed-out users to login
/// - the dashboard picks a view by role, with unrecognized or missing roles sent home
pub fn dispatch(screen: Screen, user: Option<&UserDto>) -> Dispatch {
    let user = user.cloned();

    match (screen, user) {
        (Screen::Unknown, _) => Dispatch::Redirect(Screen::Home),
        (Screen::Home, user) => Dispatch::Render(View::Home(user)),
        (Screen::Vacancies, user) => Dispatch::Render(View::Vacancies(user)),

        (Screen::Login | Screen::Register, Some(_)) => Dispatch::Redirect(Screen::Dashboard),
        (Screen::Login, None) => Dispatch::Render(View::Login),
        (Screen::Register, None) => Dispatch::Render(View::Register),

        (Screen::Dashboard | Screen::Chat | Screen::Analytics, None) => {
            Dispatch::Redirect(Screen::Login)
        }
        (Screen::Chat, Some(user)) => Dispatch::Render(View::Chat(user)),
        (Screen::Analytics, Some(user)) => Dispatch::Render(View::Analytics(user)),
        (Screen::Dashboard, Some(user)) => match user.user_type {
            Some(UserType::Student) => Dispatch::Render(View::StudentDashboard(user)),
            Some(UserType::Company) => Dispatch::Render(View::CompanyDashboard(user)),
            Some(UserType::University) => Dispatch::Render(View::UniversityDashboard(user)),
            Some(UserType::Moderator) => Dispatch::Render(View::ModeratorDashboard(user)),
            Some(UserType::Other) | None => Dispatch::Redirect(Screen::Home),
        },
    }
}
