use std::rc::Rc;

use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleExclamation, FaRightToBracket};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::Page,
    router::Route,
    state::auth::{self, LoginForm, LOGIN_FAILED},
    store::{SessionState, SessionStorage},
    util::use_api,
};

#[component]
pub fn LoginView() -> Element {
    let api = use_api();
    let storage = use_context::<Rc<dyn SessionStorage>>();
    let mut session = use_context::<Signal<SessionState>>();
    let navigator = navigator();

    let mut form = use_signal(LoginForm::default);
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
        let credentials = form.read().clone();
        spawn(async move {
            match auth::sign_in(&api, storage.as_ref(), &credentials).await {
                Ok(signed_in) => {
                    session.set(signed_in);
                    navigator.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Login failed");
                    error.set(Some(e.message(LOGIN_FAILED)));
                }
            }
            submitting.set(false);
        });
    };

    rsx!(
        Title { "Login | Career Center" }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96 mx-auto",
                form {
                    class: "card-body flex flex-col gap-3",
                    onsubmit,
                    h2 { class: "card-title flex gap-2",
                        Icon { width: 20, height: 20, icon: FaRightToBracket }
                        "Sign in"
                    }
                    if let Some(message) = error() {
                        div { class: "alert alert-error",
                            Icon { width: 16, height: 16, icon: FaCircleExclamation }
                            span { "{message}" }
                        }
                    }
                    label { class: "label", "Email" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "email",
                        required: true,
                        value: "{form.read().email}",
                        oninput: move |evt| {
                            form.write().email = evt.value();
                            error.set(None);
                        },
                    }
                    label { class: "label", "Password" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        required: true,
                        value: "{form.read().password}",
                        oninput: move |evt| {
                            form.write().password = evt.value();
                            error.set(None);
                        },
                    }
                    button {
                        class: "btn btn-primary mt-2",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign in" }
                    }
                    p { class: "text-sm text-center",
                        "No account yet? "
                        Link { to: Route::Register {}, class: "link", "Register" }
                    }
                }
            }
        }
    )
}
