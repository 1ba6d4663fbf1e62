use std::rc::Rc;

use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleExclamation, FaUserPlus};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::Page,
        router::Route,
        state::auth::{self, RegisterForm, REGISTER_FAILED},
        store::{SessionState, SessionStorage},
        util::use_api,
    },
    model::user::UserType,
};

#[component]
pub fn RegisterView() -> Element {
    let api = use_api();
    let storage = use_context::<Rc<dyn SessionStorage>>();
    let mut session = use_context::<Signal<SessionState>>();
    let navigator = navigator();

    let mut form = use_signal(RegisterForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);
        error.set(None);

        let api = api.clone();
        let storage = storage.clone();
        let account = form.read().clone();
        spawn(async move {
            match auth::sign_up(&api, storage.as_ref(), &account).await {
                Ok(signed_in) => {
                    session.set(signed_in);
                    navigator.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Registration failed");
                    error.set(Some(e.message(REGISTER_FAILED)));
                }
            }
            submitting.set(false);
        });
    };

    let is_company = form.read().is_company();

    rsx!(
        Title { "Register | Career Center" }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-md mx-auto",
                form {
                    class: "card-body flex flex-col gap-3",
                    onsubmit,
                    h2 { class: "card-title flex gap-2",
                        Icon { width: 20, height: 20, icon: FaUserPlus }
                        "Create an account"
                    }
                    if let Some(message) = error() {
                        div { class: "alert alert-error",
                            Icon { width: 16, height: 16, icon: FaCircleExclamation }
                            span { "{message}" }
                        }
                    }
                    label { class: "label", "I am a" }
                    div { class: "join w-full",
                        for user_type in UserType::REGISTRABLE {
                            button {
                                key: "{user_type.as_str()}",
                                r#type: "button",
                                class: if form.read().user_type == user_type { "btn join-item btn-primary flex-1" } else { "btn join-item flex-1" },
                                onclick: move |_| form.write().user_type = user_type,
                                "{user_type.label()}"
                            }
                        }
                    }
                    label { class: "label", "Full name" }
                    input {
                        class: "input input-bordered w-full",
                        required: true,
                        value: "{form.read().full_name}",
                        oninput: move |evt| form.write().full_name = evt.value(),
                    }
                    if is_company {
                        label { class: "label", "Company name" }
                        input {
                            class: "input input-bordered w-full",
                            required: true,
                            value: "{form.read().company_name}",
                            oninput: move |evt| form.write().company_name = evt.value(),
                        }
                        label { class: "label", "INN" }
                        input {
                            class: "input input-bordered w-full",
                            required: true,
                            value: "{form.read().inn}",
                            oninput: move |evt| form.write().inn = evt.value(),
                        }
                        label { class: "label", "Company website (optional)" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "url",
                            value: "{form.read().company_website}",
                            oninput: move |evt| form.write().company_website = evt.value(),
                        }
                    }
                    label { class: "label", "Email" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "email",
                        required: true,
                        value: "{form.read().email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                    label { class: "label", "Password" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        required: true,
                        value: "{form.read().password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                    button {
                        class: "btn btn-primary mt-2",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Creating account..." } else { "Register" }
                    }
                    p { class: "text-sm text-center",
                        "Already registered? "
                        Link { to: Route::Login {}, class: "link", "Sign in" }
                    }
                }
            }
        }
    )
}
