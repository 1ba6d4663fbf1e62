use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPaperPlane, FaRobot};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::Modal,
        state::assistant::{self, Speaker, Turn},
        util::use_api,
    },
    model::user::UserDto,
};

/// AI assistant dialog opened from the home page
#[component]
pub fn AiChat(#[props(!optional)] user: Option<UserDto>, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let mut transcript = use_signal(assistant::transcript);
    let mut input = use_signal(String::new);
    let mut waiting = use_signal(|| false);

    let send = use_callback(move |_: ()| {
        if waiting() {
            return;
        }
        let Some(turn) = Turn::user(&input.read()) else {
            return;
        };
        let question = turn.content.clone();
        transcript.write().push(turn);
        input.set(String::new());
        waiting.set(true);

        let api = api.clone();
        let user = user.clone();
        spawn(async move {
            let answer = assistant::reply(&api, user.as_ref(), &question).await;
            transcript.write().push(answer);
            waiting.set(false);
        });
    });

    rsx!(
        Modal {
            title: "AI assistant",
            on_close: move |_| on_close.call(()),
            div { class: "flex flex-col gap-2 h-96 overflow-y-auto mb-4",
                for (index, turn) in transcript.read().iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if turn.speaker == Speaker::User { "chat chat-end" } else { "chat chat-start" },
                        if turn.speaker == Speaker::Assistant {
                            div { class: "chat-image",
                                Icon {
                                    width: 20,
                                    height: 20,
                                    icon: FaRobot
                                }
                            }
                        }
                        div { class: "chat-bubble", "{turn.content}" }
                        if let Some(action) = turn.action.clone() {
                            div { class: "chat-footer opacity-70", "Suggested: {action}" }
                        }
                    }
                }
                if waiting() {
                    span { class: "loading loading-dots loading-sm" }
                }
            }
            div { class: "flex gap-2",
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Ask a question...",
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            send.call(());
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    disabled: waiting() || input.read().trim().is_empty(),
                    onclick: move |_| send.call(()),
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaPaperPlane
                    }
                }
            }
        }
    )
}
