use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaPlus};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Detail, Loading, Modal, Page, TabButton, TextArea, TextField},
        router::Route,
        state::student::{
            save_resume, save_student_profile, ResumeForm, StudentData, StudentProfileForm,
            StudentTab,
        },
        util::{dialog, time::format_timestamp, use_api},
    },
    model::{id::Id, profile::StudentProfileDto, resume::ResumeDto, user::UserDto},
};

#[component]
pub fn StudentDashboard(user: UserDto) -> Element {
    let api = use_api();
    let mut tab = use_signal(StudentTab::default);
    // `Some(None)` while creating a resume, `Some(Some(resume))` while editing one
    let mut resume_editor = use_signal(|| None::<Option<ResumeDto>>);

    let student_id = user.id.clone();
    let mut data = use_resource(move || {
        let api = api.clone();
        let student_id = student_id.clone();
        async move { StudentData::load(&api, &student_id).await }
    });

    rsx!(
        Title { "Student dashboard | Career Center" }
        Page { title: "Welcome, {user.full_name}", subtitle: "Student dashboard",
            div { role: "tablist", class: "tabs tabs-boxed w-fit",
                for option in StudentTab::ALL {
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
                    StudentTab::Profile => rsx!(
                        StudentProfileCard {
                            student_id: user.id.clone(),
                            profile: dashboard.profile.clone(),
                            on_saved: move |_| data.restart(),
                        }
                    ),
                    StudentTab::Resumes => rsx!(
                        div { class: "flex justify-end",
                            button {
                                class: "btn btn-primary btn-sm",
                                onclick: move |_| resume_editor.set(Some(None)),
                                Icon { width: 14, height: 14, icon: FaPlus }
                                "New resume"
                            }
                        }
                        if dashboard.resumes.is_empty() {
                            p { class: "opacity-70", "You have no resumes yet" }
                        }
                        div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                            for resume in dashboard.resumes.iter() {
                                ResumeCard {
                                    key: "{resume.id}",
                                    resume: resume.clone(),
                                    on_edit: move |resume| resume_editor.set(Some(Some(resume))),
                                }
                            }
                        }
                    ),
                    StudentTab::Appointments => rsx!(
                        if dashboard.appointments.is_empty() {
                            p { class: "opacity-70", "No appointments scheduled" }
                        } else {
                            table { class: "table",
                                thead {
                                    tr {
                                        th { "Type" }
                                        th { "Date" }
                                        th { "Status" }
                                        th { "Notes" }
                                    }
                                }
                                tbody {
                                    for appointment in dashboard.appointments.iter() {
                                        tr { key: "{appointment.id}",
                                            td { "{appointment.type_label()}" }
                                            td {
                                                {appointment.appointment_date.as_deref().map(format_timestamp).unwrap_or_default()}
                                            }
                                            td { {appointment.status.clone().unwrap_or_default()} }
                                            td { {appointment.notes.clone().unwrap_or_default()} }
                                        }
                                    }
                                }
                            }
                        }
                    ),
                    StudentTab::Vacancies => rsx!(
                        if dashboard.vacancies.is_empty() {
                            p { class: "opacity-70", "No vacancies available" }
                        }
                        ul { class: "list bg-base-200 rounded-box",
                            for vacancy in dashboard.vacancies.iter() {
                                li { key: "{vacancy.id}", class: "list-row",
                                    div {
                                        div { class: "font-semibold", "{vacancy.title}" }
                                        div { class: "text-sm opacity-70",
                                            {vacancy.company_name().unwrap_or_default()}
                                        }
                                    }
                                    if vacancy.is_internship {
                                        span { class: "badge badge-secondary", "Internship" }
                                    }
                                }
                            }
                        }
                        Link { to: Route::Vacancies {}, class: "btn btn-link",
                            "Browse all vacancies"
                        }
                    ),
                },
            }
        }
        if let Some(editing) = resume_editor() {
            ResumeEditor {
                student_id: user.id.clone(),
                editing,
                on_close: move |_| resume_editor.set(None),
                on_saved: move |_| {
                    resume_editor.set(None);
                    data.restart();
                },
            }
        }
    )
}

#[component]
fn StudentProfileCard(
    student_id: Id,
    #[props(!optional)] profile: Option<StudentProfileDto>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut editing = use_signal(|| false);
    let mut form = use_signal(|| StudentProfileForm::from_profile(None));
    let mut saving = use_signal(|| false);

    let exists = profile.is_some();
    let edit_profile = profile.clone();
    let start_editing = move |_| {
        form.set(StudentProfileForm::from_profile(edit_profile.as_ref()));
        editing.set(true);
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        saving.set(true);

        let api = api.clone();
        let student_id = student_id.clone();
        let values = form();
        spawn(async move {
            match save_student_profile(&api, &student_id, exists, &values).await {
                Ok(_) => {
                    editing.set(false);
                    on_saved.call(());
                }
                Err(e) => {
                    tracing::error!(user_id = %student_id, error = %e, "Failed to save student profile");
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
                    h2 { class: "card-title", "Profile" }
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
                            label: "University",
                            value: form.read().university.clone(),
                            oninput: move |value| form.write().university = value,
                        }
                        TextField {
                            label: "Major",
                            value: form.read().major.clone(),
                            oninput: move |value| form.write().major = value,
                        }
                        TextField {
                            label: "Graduation year",
                            value: form.read().graduation_year.clone(),
                            oninput: move |value| form.write().graduation_year = value,
                        }
                        TextField {
                            label: "Skills (comma separated)",
                            value: form.read().skills.clone(),
                            oninput: move |value| form.write().skills = value,
                        }
                        label { class: "md:col-span-2 flex flex-col gap-1",
                            span { class: "label", "About me" }
                            textarea {
                                class: "textarea textarea-bordered w-full",
                                rows: 3,
                                value: "{form.read().bio}",
                                oninput: move |evt| form.write().bio = evt.value(),
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
                        Detail { label: "University", value: profile.university.clone() }
                        Detail { label: "Major", value: profile.major.clone() }
                        Detail {
                            label: "Graduation year",
                            value: profile.graduation_year.map(|year| year.to_string()),
                        }
                        Detail {
                            label: "Skills",
                            value: (!profile.skills.is_empty()).then(|| profile.skills.join(", ")),
                        }
                        Detail { label: "About me", value: profile.bio.clone() }
                    }
                } else {
                    p { class: "opacity-70", "Your profile is empty" }
                }
            }
        }
    )
}

#[component]
fn ResumeCard(resume: ResumeDto, on_edit: EventHandler<ResumeDto>) -> Element {
    let edited = resume.clone();

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body gap-2",
                div { class: "flex justify-between items-start",
                    h3 { class: "card-title", "{resume.title}" }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| on_edit.call(edited.clone()),
                        Icon { width: 14, height: 14, icon: FaPen }
                    }
                }
                if !resume.skills.is_empty() {
                    div { class: "flex flex-wrap gap-1",
                        for skill in resume.skills.iter() {
                            span { key: "{skill}", class: "badge badge-outline", "{skill}" }
                        }
                    }
                }
                if let Some(education) = resume.education.clone() {
                    p { class: "text-sm", span { class: "font-semibold", "Education: " } "{education}" }
                }
                if let Some(experience) = resume.experience.clone() {
                    p { class: "text-sm", span { class: "font-semibold", "Experience: " } "{experience}" }
                }
                if !resume.languages.is_empty() {
                    p { class: "text-sm",
                        span { class: "font-semibold", "Languages: " }
                        {resume.languages.join(", ")}
                    }
                }
            }
        }
    )
}

/// Resume create/edit dialog
#[component]
fn ResumeEditor(
    student_id: Id,
    #[props(!optional)] editing: Option<ResumeDto>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_api();
    let initial = editing.as_ref().map(ResumeForm::from_resume).unwrap_or_default();
    let mut form = use_signal(move || initial);
    let mut saving = use_signal(|| false);

    let resume_id = editing.as_ref().map(|resume| resume.id.clone());
    let title = if resume_id.is_some() { "Edit resume" } else { "New resume" }.to_string();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        saving.set(true);

        let api = api.clone();
        let student_id = student_id.clone();
        let resume_id = resume_id.clone();
        let values = form();
        spawn(async move {
            match save_resume(&api, &student_id, resume_id.as_ref(), &values).await {
                Ok(_) => on_saved.call(()),
                Err(e) => {
                    tracing::error!(user_id = %student_id, error = %e, "Failed to save resume");
                    dialog::alert(&e.message("Failed to save resume"));
                }
            }
            saving.set(false);
        });
    };

    rsx!(
        Modal { title, on_close: move |_| on_close.call(()),
            form { class: "flex flex-col gap-3", onsubmit,
                TextField {
                    label: "Title",
                    value: form.read().title.clone(),
                    oninput: move |value| form.write().title = value,
                }
                TextArea {
                    label: "Education",
                    value: form.read().education.clone(),
                    oninput: move |value| form.write().education = value,
                }
                TextArea {
                    label: "Experience",
                    value: form.read().experience.clone(),
                    oninput: move |value| form.write().experience = value,
                }
                TextField {
                    label: "Skills (comma separated)",
                    value: form.read().skills.clone(),
                    oninput: move |value| form.write().skills = value,
                }
                TextField {
                    label: "Languages (comma separated)",
                    value: form.read().languages.clone(),
                    oninput: move |value| form.write().languages = value,
                }
                TextArea {
                    label: "Achievements",
                    value: form.read().achievements.clone(),
                    oninput: move |value| form.write().achievements = value,
                }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
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
        }
    )
}
