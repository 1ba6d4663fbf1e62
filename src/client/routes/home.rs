use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowRight, FaBriefcase, FaBuilding, FaChartLine, FaComments, FaGraduationCap, FaSchool,
    FaWandMagicSparkles,
};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{AiChat, Page},
        router::Route,
    },
    model::user::UserDto,
};

#[component]
pub fn HomeView(#[props(!optional)] user: Option<UserDto>) -> Element {
    let mut show_assistant = use_signal(|| false);
    let signed_in = user.is_some();

    rsx!(
        Title { "Career Center" }
        Meta {
            name: "description",
            content: "One platform for students, companies, and universities: vacancies, internships, and career growth."
        }
        Page { class: "flex flex-col items-center",
            div { class: "hero bg-base-200 rounded-box py-12",
                div { class: "hero-content text-center",
                    div { class: "max-w-2xl flex flex-col gap-4",
                        h1 { class: "text-4xl font-bold", "Career Center" }
                        p {
                            "One platform for students, companies, and universities. Find vacancies and internships and grow your career."
                        }
                        div { class: "flex flex-wrap justify-center gap-2",
                            if signed_in {
                                Link { to: Route::Dashboard {}, class: "btn btn-primary",
                                    "Go to dashboard"
                                    Icon { width: 16, height: 16, icon: FaArrowRight }
                                }
                            } else {
                                Link { to: Route::Register {}, class: "btn btn-primary",
                                    "Get started"
                                    Icon { width: 16, height: 16, icon: FaArrowRight }
                                }
                                Link { to: Route::Vacancies {}, class: "btn btn-outline",
                                    "Browse vacancies"
                                }
                            }
                            button {
                                class: "btn btn-secondary flex gap-2",
                                onclick: move |_| show_assistant.set(true),
                                Icon { width: 16, height: 16, icon: FaWandMagicSparkles }
                                "Ask the AI assistant"
                            }
                        }
                    }
                }
            }
            ul { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                Feature {
                    title: "For students",
                    text: "Build a profile and resumes, respond to vacancies, and track appointments.",
                    Icon { width: 28, height: 28, icon: FaGraduationCap }
                }
                Feature {
                    title: "For companies",
                    text: "Publish vacancies, search candidates, and review responses with AI summaries.",
                    Icon { width: 28, height: 28, icon: FaBuilding }
                }
                Feature {
                    title: "For universities",
                    text: "Keep a university profile and follow the internships open to your students.",
                    Icon { width: 28, height: 28, icon: FaSchool }
                }
                Feature {
                    title: "Vacancies",
                    text: "Full-time, part-time, contract roles and internships in one catalogue.",
                    Icon { width: 28, height: 28, icon: FaBriefcase }
                }
                Feature {
                    title: "Community chat",
                    text: "Talk to everyone on the platform in the group chat.",
                    Icon { width: 28, height: 28, icon: FaComments }
                }
                Feature {
                    title: "Analytics",
                    text: "Follow vacancies, registrations, and the most active companies.",
                    Icon { width: 28, height: 28, icon: FaChartLine }
                }
            }
        }
        if show_assistant() {
            AiChat {
                user: user.clone(),
                on_close: move |_| show_assistant.set(false),
            }
        }
    )
}

#[component]
fn Feature(title: &'static str, text: &'static str, children: Element) -> Element {
    rsx!(
        li { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                {children}
                h2 { class: "card-title", "{title}" }
                p { "{text}" }
            }
        }
    )
}
