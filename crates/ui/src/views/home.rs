use dioxus::prelude::*;
use dioxus_router::use_navigator;

use coach_core::Severity;
use coach_core::model::{SUBJECTS, Subject};
use services::Notifier;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::notice::{NotificationStack, push_notice};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let clock = ctx.clock();
    let mut picker = use_signal(|| ctx.new_picker());
    let notifier = use_signal(Notifier::new);
    let mut open_subject = use_signal(|| None::<&'static Subject>);

    let on_coach_click = use_callback(move |()| {
        let text = picker.write().coach_message().to_string();
        push_notice(notifier, clock, text, Severity::Info);
    });

    let subject_circles = SUBJECTS.iter().map(|subject| {
        rsx! {
            button {
                class: "subject-circle",
                style: "--accent: {subject.accent}",
                r#type: "button",
                onclick: move |_| open_subject.set(Some(subject)),
                span { class: "subject-icon", "{subject.icon}" }
                span { class: "subject-name", "{subject.name}" }
            }
        }
    });

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "What do you want to learn today?" }
                p { class: "view-subtitle", "Pick a subject to see its topics." }
            }
            div { class: "subject-grid",
                {subject_circles}
            }

            button {
                class: "coach-avatar",
                r#type: "button",
                title: "Your learning coach",
                onclick: move |_| on_coach_click.call(()),
                "\u{1f989}"
            }

            if let Some(subject) = open_subject() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| open_subject.set(None),
                    div {
                        class: "modal topic-modal",
                        onclick: move |evt| evt.stop_propagation(),
                        header { class: "topic-modal-header",
                            h3 { class: "topic-modal-title",
                                "{subject.icon} {subject.name}"
                            }
                            button {
                                class: "modal-close",
                                r#type: "button",
                                onclick: move |_| open_subject.set(None),
                                "\u{d7}"
                            }
                        }
                        div { class: "topic-list",
                            for topic in subject.topics {
                                button {
                                    class: if topic.linked {
                                        "topic-card topic-card--linked"
                                    } else {
                                        "topic-card"
                                    },
                                    r#type: "button",
                                    onclick: move |_| {
                                        if topic.linked {
                                            let _ = navigator.push(Route::Circle {});
                                        } else {
                                            push_notice(
                                                notifier,
                                                clock,
                                                format!("{} is coming soon.", topic.name),
                                                Severity::Warning,
                                            );
                                        }
                                    },
                                    h4 { class: "topic-name", "{topic.name}" }
                                    p { class: "topic-description", "{topic.description}" }
                                    if topic.linked {
                                        span { class: "topic-badge", "Start learning" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            NotificationStack { notifier, clock }
        }
    }
}
