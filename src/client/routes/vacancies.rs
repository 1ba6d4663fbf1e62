use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBriefcase, FaLocationDot, FaMagnifyingGlass, FaMoneyBill};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Loading, Modal, Page},
        state::{
            loaded,
            vacancies::{search, submit_response, ResponseForm, VacancyFilters},
        },
        util::{dialog, use_api},
    },
    model::{
        id::Id,
        user::{UserDto, UserType},
        vacancy::{EmploymentType, VacancyDto},
    },
};

#[component]
pub fn VacanciesView(#[props(!optional)] user: Option<UserDto>) -> Element {
    let api = use_api();
    let mut filters = use_signal(VacancyFilters::default);
    let mut query = use_signal(String::new);
    let mut responding_to = use_signal(|| None::<Id>);
    let mut response_form = use_signal(ResponseForm::default);
    let mut submitting = use_signal(|| false);

    let student = user
        .as_ref()
        .filter(|user| user.user_type == Some(UserType::Student))
        .cloned();

    let listing_api = api.clone();
    let vacancies = use_resource(move || {
        let api = listing_api.clone();
        let listing = filters().query();
        async move { loaded(api.vacancies(&listing).await, "vacancies").unwrap_or_default() }
    });

    let resumes_api = api.clone();
    let resumes_student = student.clone();
    let resumes = use_resource(move || {
        let api = resumes_api.clone();
        let student = resumes_student.clone();
        async move {
            match student {
                Some(student) => loaded(api.student_resumes(&student.id).await, "resumes")
                    .unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let submit_student = student.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let (Some(student), Some(vacancy_id)) = (submit_student.clone(), responding_to()) else {
            return;
        };
        if submitting() {
            return;
        }
        submitting.set(true);

        let api = api.clone();
        let form = response_form.read().clone();
        spawn(async move {
            match submit_response(&api, &form, &vacancy_id, &student.id).await {
                Ok(created) => {
                    responding_to.set(None);
                    let text = created
                        .feedback_message
                        .and_then(|feedback| feedback.popup_text())
                        .unwrap_or_else(|| "Your response has been sent!".to_string());
                    dialog::alert(&text);
                }
                Err(e) => {
                    tracing::error!(vacancy_id = %vacancy_id, error = %e, "Failed to submit response");
                    dialog::alert(&e.message("Could not send your response. Please try again."));
                }
            }
            submitting.set(false);
        });
    };

    let mut open_response = move |vacancy_id: Id| {
        let resumes = resumes.read().clone().unwrap_or_default();
        response_form.set(ResponseForm::new(&resumes));
        responding_to.set(Some(vacancy_id));
    };

    let student_resumes = resumes.read().clone().unwrap_or_default();
    let can_respond = student.is_some();

    rsx!(
        Title { "Vacancies | Career Center" }
        Page {
            title: "Vacancies and internships",
            subtitle: "Find the right job or internship",
            div { class: "card bg-base-200",
                div { class: "card-body grid grid-cols-1 md:grid-cols-3 gap-2",
                    label { class: "input input-bordered flex items-center gap-2",
                        Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                        input {
                            class: "grow",
                            placeholder: "Search by title or description",
                            value: "{query}",
                            oninput: move |evt| query.set(evt.value()),
                        }
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| filters.write().employment_type = EmploymentType::parse(&evt.value()),
                        option { value: "", "All employment types" }
                        for kind in EmploymentType::ALL {
                            option { key: "{kind.as_str()}", value: kind.as_str(), "{kind.label()}" }
                        }
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| filters.write().is_internship = evt.value().parse::<bool>().ok(),
                        option { value: "", "Jobs and internships" }
                        option { value: "true", "Internships only" }
                        option { value: "false", "Jobs only" }
                    }
                }
            }
            match &*vacancies.read() {
                None => rsx!(Loading {}),
                Some(all) => {
                    let found = search(all, &query.read());
                    if found.is_empty() {
                        rsx!(p { class: "text-center opacity-70 p-8", "No vacancies found" })
                    } else {
                        rsx!(
                            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                                for vacancy in found {
                                    VacancyCard {
                                        key: "{vacancy.id}",
                                        vacancy: vacancy.clone(),
                                        can_respond,
                                        on_respond: move |id| open_response(id),
                                    }
                                }
                            }
                        )
                    }
                }
            }
        }
        if responding_to().is_some() {
            Modal {
                title: "Respond to vacancy",
                on_close: move |_| responding_to.set(None),
                form { class: "flex flex-col gap-3", onsubmit,
                    label { class: "label", "Resume" }
                    if student_resumes.is_empty() {
                        p { class: "alert alert-warning",
                            "You have no resumes yet. Create one on your dashboard first."
                        }
                    } else {
                        select {
                            class: "select select-bordered w-full",
                            onchange: move |evt| {
                                let value = evt.value();
                                response_form.write().resume_id = (!value.is_empty()).then(|| Id::from(value));
                            },
                            for resume in student_resumes.iter() {
                                option {
                                    key: "{resume.id}",
                                    value: "{resume.id}",
                                    selected: response_form.read().resume_id.as_ref() == Some(&resume.id),
                                    "{resume.title}"
                                }
                            }
                        }
                    }
                    label { class: "label", "Cover note (optional)" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: 4,
                        value: "{response_form.read().additional_info}",
                        oninput: move |evt| response_form.write().additional_info = evt.value(),
                    }
                    div { class: "modal-action",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| responding_to.set(None),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting(),
                            "Send response"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn VacancyCard(vacancy: VacancyDto, can_respond: bool, on_respond: EventHandler<Id>) -> Element {
    let kind = EmploymentType::parse(&vacancy.employment_type)
        .map(|kind| kind.label())
        .unwrap_or(vacancy.employment_type.as_str())
        .to_string();
    let vacancy_id = vacancy.id.clone();

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body gap-2",
                div { class: "flex justify-between items-start gap-2",
                    h2 { class: "card-title", "{vacancy.title}" }
                    if vacancy.is_internship {
                        span { class: "badge badge-secondary", "Internship" }
                    }
                }
                if let Some(company) = vacancy.company_name() {
                    p { class: "font-semibold opacity-80", "{company}" }
                }
                p { class: "line-clamp-3", "{vacancy.description}" }
                ul { class: "flex flex-wrap gap-4 text-sm opacity-80",
                    li { class: "flex items-center gap-1",
                        Icon { width: 14, height: 14, icon: FaBriefcase }
                        "{kind}"
                    }
                    if let Some(location) = vacancy.location.clone() {
                        li { class: "flex items-center gap-1",
                            Icon { width: 14, height: 14, icon: FaLocationDot }
                            "{location}"
                        }
                    }
                    if let Some(salary) = vacancy.salary_range.clone() {
                        li { class: "flex items-center gap-1",
                            Icon { width: 14, height: 14, icon: FaMoneyBill }
                            "{salary}"
                        }
                    }
                }
                if let Some(requirements) = vacancy.requirements.clone() {
                    p { class: "text-sm", span { class: "font-semibold", "Requirements: " } "{requirements}" }
                }
                if can_respond {
                    div { class: "card-actions justify-end",
                        button {
                            class: "btn btn-primary btn-sm",
                            onclick: move |_| on_respond.call(vacancy_id.clone()),
                            "Respond"
                        }
                    }
                }
            }
        }
    )
}
