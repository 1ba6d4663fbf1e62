use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPaperPlane;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Loading, Page},
        error::{ActionError, FormError},
        state::{
            chat::{load_messages, send_message},
            loaded,
        },
        util::{dialog, time::format_timestamp, use_api},
    },
    config::ClientConfig,
    model::user::UserDto,
};

#[component]
pub fn ChatView(user: UserDto) -> Element {
    let api = use_api();
    let limit = use_context::<ClientConfig>().chat_limit;
    let mut input = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let load_api = api.clone();
    let user_id = user.id.clone();
    let mut messages = use_resource(move || {
        let api = load_api.clone();
        let user_id = user_id.clone();
        async move {
            loaded(load_messages(&api, &user_id, limit).await, "chat messages").unwrap_or_default()
        }
    });

    let sender_id = user.id.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }
        sending.set(true);

        let api = api.clone();
        let sender_id = sender_id.clone();
        let text = input();
        spawn(async move {
            match send_message(&api, &sender_id, &text).await {
                Ok(()) => {
                    input.set(String::new());
                    messages.restart();
                }
                Err(ActionError::Form(FormError::EmptyMessage)) => {}
                Err(e) => {
                    tracing::error!(user_id = %sender_id, error = %e, "Failed to send chat message");
                    dialog::alert("Failed to send message");
                }
            }
            sending.set(false);
        });
    };

    rsx!(
        Title { "Chat | Career Center" }
        Page { title: "Chat",
            div { class: "card bg-base-200",
                div { class: "card-body",
                    div { class: "flex flex-col gap-1 h-[60vh] overflow-y-auto",
                        match &*messages.read() {
                            None => rsx!(Loading {}),
                            Some(list) if list.is_empty() => rsx!(
                                p { class: "text-center opacity-70 m-auto", "No messages yet" }
                            ),
                            Some(list) => rsx!(
                                for (index, message) in list.iter().enumerate() {
                                    div {
                                        key: "{index}",
                                        class: if message.sender_id == user.id { "chat chat-end" } else { "chat chat-start" },
                                        div { class: "chat-bubble", "{message.message}" }
                                        if let Some(sent_at) = message.created_at.as_deref() {
                                            div { class: "chat-footer opacity-60 text-xs",
                                                "{format_timestamp(sent_at)}"
                                            }
                                        }
                                    }
                                }
                            ),
                        }
                    }
                    form { class: "flex gap-2 mt-2", onsubmit,
                        input {
                            class: "input input-bordered w-full",
                            placeholder: "Write a message...",
                            value: "{input}",
                            oninput: move |evt| input.set(evt.value()),
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: sending(),
                            Icon { width: 16, height: 16, icon: FaPaperPlane }
                        }
                    }
                }
            }
        }
    )
}
