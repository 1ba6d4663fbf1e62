use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPen;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Detail, Loading, Page, StatCard, TabButton, TextArea, TextField},
        state::university::{
            save_university_profile, UniversityData, UniversityProfileForm, UniversityTab,
        },
        util::{dialog, use_api},
    },
    model::{id::Id, profile::UniversityProfileDto, user::UserDto},
};

#[component]
pub fn UniversityDashboard(user: UserDto) -> Element {
    let api = use_api();
    let mut tab = use_signal(UniversityTab::default);

    let university_id = user.id.clone();
    let mut data = use_resource(move || {
        let api = api.clone();
        let university_id = university_id.clone();
        async move { UniversityData::load(&api, &university_id).await }
    });

    rsx!(
        Title { "University dashboard | Career Center" }
        Page { title: "Welcome, {user.full_name}", subtitle: "University dashboard",
            div { role: "tablist", class: "tabs tabs-boxed w-fit",
                for option in UniversityTab::ALL {
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
                    UniversityTab::Profile => rsx!(
                        UniversityProfileCard {
                            university_id: user.id.clone(),
                            profile: dashboard.profile.clone(),
                            on_saved: move |_| data.restart(),
                        }
                    ),
                    UniversityTab::Internships => rsx!(
                        if dashboard.internships.is_empty() {
                            p { class: "opacity-70", "No internships available right now" }
                        } else {
                            table { class: "table",
                                thead {
                                    tr {
                                        th { "Title" }
                                        th { "Company" }
                                        th { "Location" }
                                    }
                                }
                                tbody {
                                    for internship in dashboard.internships.iter() {
                                        tr { key: "{internship.id}",
                                            td { "{internship.title}" }
                                            td { {internship.company_name().unwrap_or("-").to_string()} }
                                            td { {internship.location.clone().unwrap_or_default()} }
                                        }
                                    }
                                }
                            }
                        }
                    ),
                    UniversityTab::Analytics => rsx!(
                        div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                            StatCard {
                                label: "Available internships",
                                value: "{dashboard.internships.len()}",
                            }
                        }
                    ),
                },
            }
        }
    )
}

#[component]
fn UniversityProfileCard(
    university_id: Id,
    #[props(!optional)] profile: Option<UniversityProfileDto>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut editing = use_signal(|| false);
    let mut form = use_signal(UniversityProfileForm::default);
    let mut saving = use_signal(|| false);

    let exists = profile.is_some();
    let edit_profile = profile.clone();
    let start_editing = move |_| {
        form.set(UniversityProfileForm::from_profile(edit_profile.as_ref()));
        editing.set(true);
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        saving.set(true);

        let api = api.clone();
        let university_id = university_id.clone();
        let values = form();
        spawn(async move {
            match save_university_profile(&api, &university_id, exists, &values).await {
                Ok(_) => {
                    editing.set(false);
                    on_saved.call(());
                }
                Err(e) => {
                    tracing::error!(user_id = %university_id, error = %e, "Failed to save university profile");
                    dialog::alert(&e.message("Failed to save profile"));
                }
            }
            saving.set(false);
        });
    };

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body",
                div { class: "flex justify-between items-center",
                    h2 { class: "card-title", "University profile" }
                    if !editing() {
                        button { class: "btn btn-sm", onclick: start_editing,
                            Icon { width: 14, height: 14, icon: FaPen }
                            if exists { "Edit" } else { "Fill in profile" }
                        }
                    }
                }
                if editing() {
                    form { class: "grid grid-cols-1 md:grid-cols-2 gap-3", onsubmit,
                        TextField {
                            label: "University name",
                            value: form.read().university_name.clone(),
                            oninput: move |value| form.write().university_name = value,
                        }
                        TextField {
                            label: "Website",
                            value: form.read().website.clone(),
                            oninput: move |value| form.write().website = value,
                        }
                        TextField {
                            label: "Contact email",
                            value: form.read().contact_email.clone(),
                            oninput: move |value| form.write().contact_email = value,
                        }
                        div { class: "md:col-span-2",
                            TextArea {
                                label: "Description",
                                value: form.read().description.clone(),
                                oninput: move |value| form.write().description = value,
                            }
                        }
                        div { class: "md:col-span-2 flex justify-end gap-2",
                            button {
                                class: "btn",
                                r#type: "button",
                                onclick: move |_| editing.set(false),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: saving(),
                                "Save"
                            }
                        }
                    }
                } else if let Some(profile) = profile {
                    dl { class: "grid grid-cols-1 md:grid-cols-2 gap-2",
                        Detail { label: "University name", value: Some(profile.university_name.clone()) }
                        Detail { label: "Website", value: profile.website.clone() }
                        Detail { label: "Contact email", value: profile.contact_email.clone() }
                        Detail { label: "Description", value: profile.description.clone() }
                    }
                } else {
                    p { class: "opacity-70", "Your university profile is empty" }
                }
            }
        }
    )
}
