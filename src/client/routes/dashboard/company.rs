use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaPen, FaPlus, FaWandMagicSparkles};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Detail, Loading, Modal, Page, TabButton, TextArea, TextField},
        state::{
            company::{
                create_vacancy, generate_all_summaries, save_company_profile, CandidateSearchForm,
                CompanyData, CompanyProfileForm, CompanyTab, ResponseFilter, VacancyForm,
            },
            loaded,
        },
        util::{dialog, use_api},
    },
    model::{
        candidate::CandidateDto,
        id::Id,
        profile::CompanyProfileDto,
        touch::VacancyTouchDto,
        user::UserDto,
        vacancy::EmploymentType,
    },
};

#[component]
pub fn CompanyDashboard(user: UserDto) -> Element {
    let api = use_api();
    let mut tab = use_signal(CompanyTab::default);
    let mut creating = use_signal(|| false);
    let mut selected = use_signal(|| None::<Id>);

    let company_id = user.id.clone();
    let mut data = use_resource(move || {
        let api = api.clone();
        let company_id = company_id.clone();
        async move { CompanyData::load(&api, &company_id).await }
    });

    rsx!(
        Title { "Company dashboard | Career Center" }
        Page { title: "Welcome, {user.full_name}", subtitle: "Company dashboard",
            div { role: "tablist", class: "tabs tabs-boxed w-fit",
                for option in CompanyTab::ALL {
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
                    CompanyTab::Profile => rsx!(
                        CompanyProfileCard {
                            company_id: user.id.clone(),
                            profile: dashboard.profile.clone(),
                            on_saved: move |_| data.restart(),
                        }
                    ),
                    CompanyTab::Vacancies => rsx!(
                        div { class: "flex justify-end",
                            button {
                                class: "btn btn-primary btn-sm",
                                onclick: move |_| creating.set(true),
                                Icon { width: 14, height: 14, icon: FaPlus }
                                "New vacancy"
                            }
                        }
                        if dashboard.vacancies.is_empty() {
                            p { class: "opacity-70", "You have not posted any vacancies yet" }
                        } else {
                            table { class: "table",
                                thead {
                                    tr {
                                        th { "Title" }
                                        th { "Type" }
                                        th { "Status" }
                                        th { "Responses" }
                                    }
                                }
                                tbody {
                                    for vacancy in dashboard.vacancies.iter() {
                                        tr {
                                            key: "{vacancy.id}",
                                            class: "hover cursor-pointer",
                                            onclick: {
                                                let vacancy_id = vacancy.id.clone();
                                                move |_| selected.set(Some(vacancy_id.clone()))
                                            },
                                            td { "{vacancy.title}" }
                                            td { "{vacancy.employment_type}" }
                                            td { "{vacancy.status_or_pending()}" }
                                            td { {vacancy.response_count.unwrap_or(0).to_string()} }
                                        }
                                    }
                                }
                            }
                        }
                    ),
                    CompanyTab::Candidates => rsx!(CandidateSearch {}),
                    CompanyTab::Responses => rsx!(CompanyResponses {}),
                },
            }
        }
        if creating() {
            NewVacancy {
                company_id: user.id.clone(),
                on_close: move |_| creating.set(false),
                on_saved: move |_| {
                    creating.set(false);
                    data.restart();
                },
            }
        }
        if let Some(vacancy_id) = selected() {
            VacancyDetail { vacancy_id, on_close: move |_| selected.set(None) }
        }
    )
}

#[component]
fn CompanyProfileCard(
    company_id: Id,
    #[props(!optional)] profile: Option<CompanyProfileDto>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut editing = use_signal(|| false);
    let mut form = use_signal(CompanyProfileForm::default);
    let mut saving = use_signal(|| false);

    let exists = profile.is_some();
    let edit_profile = profile.clone();
    let start_editing = move |_| {
        form.set(CompanyProfileForm::from_profile(edit_profile.as_ref()));
        editing.set(true);
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        saving.set(true);

        let api = api.clone();
        let company_id = company_id.clone();
        let values = form();
        spawn(async move {
            match save_company_profile(&api, &company_id, exists, &values).await {
                Ok(_) => {
                    editing.set(false);
                    on_saved.call(());
                }
                Err(e) => {
                    tracing::error!(user_id = %company_id, error = %e, "Failed to save company profile");
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
                    h2 { class: "card-title", "Company profile" }
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
                            label: "Company name",
                            value: form.read().company_name.clone(),
                            oninput: move |value| form.write().company_name = value,
                        }
                        TextField {
                            label: "Industry",
                            value: form.read().industry.clone(),
                            oninput: move |value| form.write().industry = value,
                        }
                        TextField {
                            label: "Website",
                            value: form.read().website.clone(),
                            oninput: move |value| form.write().website = value,
                        }
                        TextField {
                            label: "Company size",
                            value: form.read().size.clone(),
                            oninput: move |value| form.write().size = value,
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
                        Detail { label: "Company name", value: Some(profile.company_name.clone()) }
                        Detail { label: "Industry", value: profile.industry.clone() }
                        Detail { label: "Website", value: profile.website.clone() }
                        Detail { label: "Company size", value: profile.size.clone() }
                        Detail { label: "Description", value: profile.description.clone() }
                    }
                } else {
                    p { class: "opacity-70", "Your company profile is empty" }
                }
            }
        }
    )
}

#[component]
fn NewVacancy(company_id: Id, on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let api = use_api();
    let mut form = use_signal(VacancyForm::default);
    let mut saving = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        saving.set(true);

        let api = api.clone();
        let company_id = company_id.clone();
        let values = form();
        spawn(async move {
            match create_vacancy(&api, &company_id, &values).await {
                Ok(created) => {
                    if let Some(text) = created.feedback_message.and_then(|f| f.popup_text()) {
                        dialog::alert(&text);
                    }
                    on_saved.call(());
                }
                Err(e) => {
                    tracing::error!(user_id = %company_id, error = %e, "Failed to create vacancy");
                    dialog::alert(&e.message("Failed to create vacancy"));
                }
            }
            saving.set(false);
        });
    };

    rsx!(
        Modal { title: "New vacancy", on_close: move |_| on_close.call(()),
            form { class: "flex flex-col gap-3", onsubmit,
                TextField {
                    label: "Title",
                    value: form.read().title.clone(),
                    oninput: move |value| form.write().title = value,
                }
                TextArea {
                    label: "Description",
                    value: form.read().description.clone(),
                    oninput: move |value| form.write().description = value,
                }
                TextArea {
                    label: "Requirements",
                    value: form.read().requirements.clone(),
                    oninput: move |value| form.write().requirements = value,
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-3",
                    TextField {
                        label: "Salary range",
                        value: form.read().salary_range.clone(),
                        oninput: move |value| form.write().salary_range = value,
                    }
                    TextField {
                        label: "Location",
                        value: form.read().location.clone(),
                        oninput: move |value| form.write().location = value,
                    }
                }
                label { class: "flex flex-col gap-1",
                    span { class: "label", "Employment type" }
                    select {
                        class: "select select-bordered w-full",
                        onchange: move |evt| {
                            if let Some(kind) = EmploymentType::parse(&evt.value()) {
                                form.write().employment_type = kind;
                            }
                        },
                        for kind in EmploymentType::ALL {
                            option {
                                key: "{kind.as_str()}",
                                value: kind.as_str(),
                                selected: form.read().employment_type == kind,
                                "{kind.label()}"
                            }
                        }
                    }
                }
                label { class: "label cursor-pointer justify-start gap-2",
                    input {
                        r#type: "checkbox",
                        class: "checkbox",
                        checked: form.read().is_internship,
                        onchange: move |evt| form.write().is_internship = evt.checked(),
                    }
                    "This is an internship"
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
                        "Create"
                    }
                }
            }
        }
    )
}

/// A vacancy with its responses, rating filters, and bulk summary generation
#[component]
fn VacancyDetail(vacancy_id: Id, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let mut min_motivation = use_signal(String::new);
    let mut min_criteria = use_signal(String::new);
    let mut generating = use_signal(|| false);

    let detail_api = api.clone();
    let detail_id = vacancy_id.clone();
    let mut detail = use_resource(move || {
        let api = detail_api.clone();
        let vacancy_id = detail_id.clone();
        async move { loaded(api.vacancy_with_responses(&vacancy_id).await, "vacancy detail") }
    });

    let generate = move |_| {
        if generating() {
            return;
        }
        let touches = match &*detail.read() {
            Some(Some(detail)) => detail.vacancy_touch.clone(),
            _ => return,
        };
        if touches.is_empty() {
            dialog::alert("There are no responses to analyse");
            return;
        }
        if !dialog::confirm(&format!(
            "Generate AI summaries for {} responses?",
            touches.len()
        )) {
            return;
        }
        generating.set(true);

        let api = api.clone();
        let vacancy_id = vacancy_id.clone();
        spawn(async move {
            match generate_all_summaries(&api, &touches).await {
                Ok(count) => {
                    tracing::info!(vacancy_id = %vacancy_id, count, "Generated response summaries");
                    dialog::alert(&format!("Generated {} summaries", count));
                }
                Err(e) => dialog::alert(&e.message("Failed to generate summaries")),
            }
            detail.restart();
            generating.set(false);
        });
    };

    let filter = ResponseFilter::from_inputs(&min_motivation.read(), &min_criteria.read());

    rsx!(
        Modal { title: "Vacancy", on_close: move |_| on_close.call(()),
            match &*detail.read() {
                None => rsx!(Loading {}),
                Some(None) => rsx!(p { class: "opacity-70", "Vacancy could not be loaded" }),
                Some(Some(detail)) => rsx!(
                    h3 { class: "text-xl font-bold", "{detail.vacancy.title}" }
                    p { class: "whitespace-pre-line", "{detail.vacancy.description}" }
                    div { class: "divider", "Responses ({detail.vacancy_touch.len()})" }
                    div { class: "flex flex-wrap items-end gap-2",
                        label { class: "flex flex-col gap-1",
                            span { class: "label text-sm", "Min. motivation" }
                            input {
                                class: "input input-bordered input-sm w-32",
                                r#type: "number",
                                min: 0,
                                max: 100,
                                value: "{min_motivation}",
                                oninput: move |evt| min_motivation.set(evt.value()),
                            }
                        }
                        label { class: "flex flex-col gap-1",
                            span { class: "label text-sm", "Min. criteria match" }
                            input {
                                class: "input input-bordered input-sm w-32",
                                r#type: "number",
                                min: 0,
                                max: 100,
                                value: "{min_criteria}",
                                oninput: move |evt| min_criteria.set(evt.value()),
                            }
                        }
                        button {
                            class: "btn btn-secondary btn-sm ml-auto",
                            disabled: generating(),
                            onclick: generate,
                            Icon { width: 14, height: 14, icon: FaWandMagicSparkles }
                            if generating() { "Generating..." } else { "Generate AI summaries" }
                        }
                    }
                    div { class: "flex flex-col gap-2 mt-2",
                        for touch in filter.apply(&detail.vacancy_touch) {
                            ResponseCard { key: "{touch.id}", touch: touch.clone(), show_vacancy: false }
                        }
                    }
                ),
            }
        }
    )
}

#[component]
fn ResponseCard(touch: VacancyTouchDto, show_vacancy: bool) -> Element {
    let student = touch.student_name().unwrap_or("Unknown student").to_string();
    let email = touch.student_email().map(str::to_string);
    let vacancy = touch.vacancy_title().filter(|_| show_vacancy).map(str::to_string);
    let motivation = touch
        .motivation_rating
        .map(|rating| rating.to_string())
        .unwrap_or_else(|| "-".to_string());
    let criteria = touch
        .meets_criteria_rating
        .map(|rating| rating.to_string())
        .unwrap_or_else(|| "-".to_string());

    rsx!(
        div { class: "card bg-base-100 border border-base-300",
            div { class: "card-body p-4 gap-1",
                div { class: "flex justify-between flex-wrap gap-2",
                    div {
                        span { class: "font-semibold", "{student}" }
                        if let Some(email) = email {
                            span { class: "opacity-70 ml-2 text-sm", "{email}" }
                        }
                    }
                    div { class: "flex gap-2",
                        span { class: "badge", "Motivation: {motivation}" }
                        span { class: "badge", "Criteria: {criteria}" }
                    }
                }
                if let Some(vacancy) = vacancy {
                    p { class: "text-sm", "Vacancy: {vacancy}" }
                }
                if let Some(resume) = touch.resumes.as_ref() {
                    p { class: "text-sm", "Resume: {resume.title}" }
                }
                if let Some(info) = touch.additional_info.clone() {
                    p { class: "text-sm italic", "{info}" }
                }
                if let Some(summary) = touch.ai_summary.clone() {
                    div { class: "alert alert-info text-sm mt-1", "{summary}" }
                }
            }
        }
    )
}

#[component]
fn CandidateSearch() -> Element {
    let api = use_api();
    let mut form = use_signal(CandidateSearchForm::default);
    let mut results = use_signal(|| None::<Vec<CandidateDto>>);
    let mut searching = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let search = match form.read().to_search() {
            Ok(search) => search,
            Err(e) => {
                dialog::alert(&e.to_string());
                return;
            }
        };
        searching.set(true);

        let api = api.clone();
        spawn(async move {
            match api.search_candidates(&search).await {
                Ok(found) => results.set(Some(found)),
                Err(e) => {
                    tracing::error!(error = %e, "Candidate search failed");
                    dialog::alert("Candidate search failed");
                }
            }
            searching.set(false);
        });
    };

    rsx!(
        div { class: "card bg-base-200",
            form { class: "card-body grid grid-cols-1 md:grid-cols-3 gap-3", onsubmit,
                TextField {
                    label: "Skills",
                    value: form.read().skills.clone(),
                    oninput: move |value| form.write().skills = value,
                }
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
                    label: "Graduating from",
                    value: form.read().grad_year_from.clone(),
                    oninput: move |value| form.write().grad_year_from = value,
                }
                TextField {
                    label: "Graduating until",
                    value: form.read().grad_year_to.clone(),
                    oninput: move |value| form.write().grad_year_to = value,
                }
                button {
                    class: "btn btn-primary self-end",
                    r#type: "submit",
                    disabled: searching(),
                    Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                    "Search"
                }
            }
        }
        match results() {
            None => rsx!(),
            Some(found) if found.is_empty() => rsx!(p { class: "opacity-70", "No candidates found" }),
            Some(found) => rsx!(
                table { class: "table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "University" }
                            th { "Major" }
                            th { "Graduation" }
                            th { "Skills" }
                            th {}
                        }
                    }
                    tbody {
                        for candidate in found {
                            tr { key: "{candidate.id}",
                                td { {candidate.full_name().unwrap_or("-").to_string()} }
                                td { {candidate.university.clone().unwrap_or_default()} }
                                td { {candidate.major.clone().unwrap_or_default()} }
                                td {
                                    {candidate.graduation_year.map(|year| year.to_string()).unwrap_or_default()}
                                }
                                td { {candidate.skills.join(", ")} }
                                td {
                                    if candidate.has_responded() {
                                        span { class: "badge badge-success", "Responded" }
                                    }
                                }
                            }
                        }
                    }
                }
            ),
        }
    )
}

/// Every response to the company's vacancies, loaded when the tab is opened
#[component]
fn CompanyResponses() -> Element {
    let api = use_api();
    let responses = use_resource(move || {
        let api = api.clone();
        async move { loaded(api.company_responses().await, "company responses").unwrap_or_default() }
    });

    rsx!(
        match &*responses.read() {
            None => rsx!(Loading {}),
            Some(list) if list.is_empty() => rsx!(p { class: "opacity-70", "No responses yet" }),
            Some(list) => rsx!(
                div { class: "flex flex-col gap-2",
                    for touch in list.iter() {
                        ResponseCard { key: "{touch.id}", touch: touch.clone(), show_vacancy: true }
                    }
                }
            ),
        }
    )
}
