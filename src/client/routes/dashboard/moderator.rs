use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaTrash, FaXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Loading, Page, StatCard, TabButton},
        state::moderator::{
            ModeratorAction, ModeratorData, ModeratorTab, UserFilter, VacancyFilter, USER_ROLES,
            VACANCY_STATUSES,
        },
        util::{dialog, time::format_date, use_api},
    },
    model::{
        id::Id,
        user::{UserDto, UserType},
    },
};

#[component]
pub fn ModeratorDashboard(user: UserDto) -> Element {
    let api = use_api();
    let mut tab = use_signal(ModeratorTab::default);
    let mut user_filter = use_signal(UserFilter::default);
    let mut vacancy_filter = use_signal(VacancyFilter::default);
    let mut pending_action = use_signal(|| false);

    let load_api = api.clone();
    let mut data = use_resource(move || {
        let api = load_api.clone();
        async move { ModeratorData::load(&api).await }
    });

    let moderate = use_callback(move |(action, vacancy_id): (ModeratorAction, Id)| {
        if pending_action() || !dialog::confirm(action.confirm_prompt()) {
            return;
        }
        pending_action.set(true);

        let api = api.clone();
        spawn(async move {
            match action.run(&api, &vacancy_id).await {
                Ok(()) => {
                    tracing::info!(vacancy_id = %vacancy_id, action = ?action, "Vacancy moderated");
                    data.restart();
                }
                Err(e) => {
                    tracing::error!(vacancy_id = %vacancy_id, action = ?action, error = %e, "Moderation failed");
                    dialog::alert(action.failure_message());
                }
            }
            pending_action.set(false);
        });
    });

    rsx!(
        Title { "Moderator dashboard | Career Center" }
        Page { title: "Welcome, {user.full_name}", subtitle: "Moderator dashboard",
            div { role: "tablist", class: "tabs tabs-boxed w-fit",
                for option in ModeratorTab::ALL {
                    TabButton {
                        key: "{option.label()}",
                        label: option.label(),
                        active: tab() == option,
                        onclick: move |_| tab.set(option),
                    }
                }
            }
            match &*data.read() {
                None => rsx!(Loading {}),
                Some(dashboard) => match tab() {
                    ModeratorTab::Analytics => rsx!(
                        if let Some(analytics) = dashboard.analytics.clone() {
                            div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                                StatCard {
                                    label: "Users",
                                    value: analytics.total_users.unwrap_or(dashboard.users.len() as u64).to_string(),
                                }
                                StatCard {
                                    label: "Vacancies",
                                    value: analytics.total_vacancies.unwrap_or(dashboard.vacancies.len() as u64).to_string(),
                                }
                                StatCard { label: "Universities", value: "{dashboard.universities.len()}" }
                                StatCard {
                                    label: "Pending vacancies",
                                    value: analytics.vacancies_with_status("pending").to_string(),
                                }
                            }
                            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                                div { class: "card bg-base-200",
                                    div { class: "card-body",
                                        h2 { class: "card-title", "Users by role" }
                                        table { class: "table table-sm",
                                            tbody {
                                                for role in USER_ROLES {
                                                    tr { key: "{role.as_str()}",
                                                        td { "{role.label()}" }
                                                        td { "{analytics.users_of_type(role.as_str())}" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                                div { class: "card bg-base-200",
                                    div { class: "card-body",
                                        h2 { class: "card-title", "Vacancies by status" }
                                        table { class: "table table-sm",
                                            tbody {
                                                for status in VACANCY_STATUSES {
                                                    tr { key: "{status}",
                                                        td { "{status}" }
                                                        td { "{analytics.vacancies_with_status(status)}" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        } else {
                            p { class: "opacity-70", "Analytics are not available" }
                        }
                    ),
                    ModeratorTab::Users => rsx!(
                        div { class: "flex flex-wrap gap-2",
                            input {
                                class: "input input-bordered",
                                placeholder: "Search by name or email",
                                value: "{user_filter.read().search}",
                                oninput: move |evt| user_filter.write().search = evt.value(),
                            }
                            select {
                                class: "select select-bordered",
                                onchange: move |evt| user_filter.write().user_type = UserType::parse(&evt.value()),
                                option { value: "", "All roles" }
                                for role in USER_ROLES {
                                    option { key: "{role.as_str()}", value: role.as_str(), "{role.label()}" }
                                }
                            }
                        }
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Role" }
                                    th { "Registered" }
                                }
                            }
                            tbody {
                                for listed in user_filter().apply(&dashboard.users) {
                                    tr { key: "{listed.id}",
                                        td { "{listed.full_name}" }
                                        td { "{listed.email}" }
                                        td { {listed.user_type.map(|role| role.label()).unwrap_or("-")} }
                                        td { {listed.created_at.as_deref().map(format_date).unwrap_or_default()} }
                                    }
                                }
                            }
                        }
                    ),
                    ModeratorTab::Vacancies => rsx!(
                        div { class: "flex flex-wrap gap-2",
                            input {
                                class: "input input-bordered",
                                placeholder: "Search by title or company",
                                value: "{vacancy_filter.read().search}",
                                oninput: move |evt| vacancy_filter.write().search = evt.value(),
                            }
                            select {
                                class: "select select-bordered",
                                onchange: move |evt| {
                                    let status = evt.value();
                                    vacancy_filter.write().status = (!status.is_empty()).then_some(status);
                                },
                                option { value: "", "All statuses" }
                                for status in VACANCY_STATUSES {
                                    option { key: "{status}", value: status, "{status}" }
                                }
                            }
                        }
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Title" }
                                    th { "Company" }
                                    th { "Status" }
                                    th {}
                                }
                            }
                            tbody {
                                for vacancy in vacancy_filter().apply(&dashboard.vacancies) {
                                    tr { key: "{vacancy.id}",
                                        td { "{vacancy.title}" }
                                        td { {vacancy.company_name().unwrap_or("-").to_string()} }
                                        td {
                                            span { class: "badge", "{vacancy.status_or_pending()}" }
                                        }
                                        td { class: "flex gap-1 justify-end",
                                            button {
                                                class: "btn btn-success btn-xs",
                                                title: "Approve",
                                                disabled: pending_action(),
                                                onclick: {
                                                    let vacancy_id = vacancy.id.clone();
                                                    move |_| moderate.call((ModeratorAction::Approve, vacancy_id.clone()))
                                                },
                                                Icon { width: 12, height: 12, icon: FaCheck }
                                            }
                                            button {
                                                class: "btn btn-warning btn-xs",
                                                title: "Reject",
                                                disabled: pending_action(),
                                                onclick: {
                                                    let vacancy_id = vacancy.id.clone();
                                                    move |_| moderate.call((ModeratorAction::Reject, vacancy_id.clone()))
                                                },
                                                Icon { width: 12, height: 12, icon: FaXmark }
                                            }
                                            button {
                                                class: "btn btn-error btn-xs",
                                                title: "Delete",
                                                disabled: pending_action(),
                                                onclick: {
                                                    let vacancy_id = vacancy.id.clone();
                                                    move |_| moderate.call((ModeratorAction::Delete, vacancy_id.clone()))
                                                },
                                                Icon { width: 12, height: 12, icon: FaTrash }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    ),
                },
            }
        }
    )
}
