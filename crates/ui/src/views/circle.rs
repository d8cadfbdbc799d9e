use std::time::Duration;

use dioxus::prelude::Key;
use dioxus::prelude::*;

use coach_core::effects::{ENCOURAGEMENT_DELAY_MS, WELCOME_DELAY_MS};
use coach_core::model::{SectionId, section_content};
use coach_core::{Clock, Effect};
use services::{Notifier, TutorialService};

use crate::context::AppContext;
use crate::views::notice::{NotificationStack, push_notice};
use crate::views::quiz::QuizPanel;
use crate::vm::{map_calculator, map_progress, map_section_nav};

/// Lets the tutorial's deferred messages land as toasts once they are due.
fn drain_after(
    mut tutorial: Signal<TutorialService>,
    notifier: Signal<Notifier>,
    clock: Clock,
    delay_ms: i64,
) {
    spawn(async move {
        tokio::time::sleep(Duration::from_millis(delay_ms as u64)).await;
        for effect in tutorial.write().drain_due_effects() {
            if let Effect::ShowMessage { text, severity } = effect {
                push_notice(notifier, clock, text, severity);
            }
        }
    });
}

#[component]
pub fn CircleView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let mut tutorial = use_signal(|| ctx.new_tutorial());
    let notifier = use_signal(Notifier::new);
    let mut radius_input = use_signal(String::new);

    use_effect(move || {
        tutorial.write().schedule_welcome();
        drain_after(tutorial, notifier, clock, WELCOME_DELAY_MS);
    });

    let advance = use_callback(move |target: SectionId| {
        tutorial.write().advance_to(target);
        drain_after(tutorial, notifier, clock, ENCOURAGEMENT_DELAY_MS);
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if let Key::Character(value) = evt.data.key() {
            match value.as_str() {
                "n" => {
                    evt.prevent_default();
                    let next = tutorial.read().current().next();
                    if let Some(next) = next {
                        advance.call(next);
                    }
                }
                "p" => {
                    evt.prevent_default();
                    let _ = tutorial.write().back();
                }
                _ => {}
            }
        }
    });

    let current = tutorial.read().current();
    let progress = tutorial.read().progress();
    let markers = map_progress(&progress);
    let nav = map_section_nav(current);
    let content = section_content(current);

    let marker_items = markers.into_iter().map(|card| {
        rsx! {
            button {
                class: card.state.class(),
                r#type: "button",
                onclick: move |_| tutorial.write().go_to(card.id),
                span { class: "progress-step", "{card.step}" }
                span { class: "progress-label", "{card.title}" }
            }
        }
    });

    rsx! {
        div {
            class: "page circle-page",
            id: "circle-root",
            tabindex: "0",
            onkeydown: on_key,
            header { class: "view-header",
                h2 { class: "view-title", "Getting to Know Circles" }
                p { class: "view-subtitle",
                    "Work through each section, then test yourself in the practice."
                }
            }
            nav { class: "progress-bar",
                {marker_items}
            }

            section { class: "section-card",
                h3 { class: "section-title", "{content.id.title()}" }
                p { class: "section-lede", "{content.lede}" }
                ul { class: "section-points",
                    for point in content.points {
                        li { "{point}" }
                    }
                }

                if current == SectionId::Interactive {
                    RadiusCalculator { radius_input }
                }

                if current == SectionId::Quiz {
                    QuizPanel {
                        notifier,
                        clock,
                        on_exit: move |section| tutorial.write().go_to(section),
                    }
                }
            }

            div { class: "section-nav",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: nav.prev.is_none(),
                    onclick: move |_| {
                        let _ = tutorial.write().back();
                    },
                    "\u{2190} {nav.prev_label}"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: nav.next.is_none(),
                    onclick: move |_| {
                        if let Some(next) = nav.next {
                            advance.call(next);
                        }
                    },
                    "{nav.next_label} \u{2192}"
                }
            }

            NotificationStack { notifier, clock }
        }
    }
}

/// The "try it yourself" radius calculator in the interactive section.
#[component]
fn RadiusCalculator(radius_input: Signal<String>) -> Element {
    let mut radius_input = radius_input;
    let calc = map_calculator(&radius_input.read());
    rsx! {
        div { class: "calculator",
            label { class: "calculator-label", r#for: "radius-input",
                "Radius (cm)"
            }
            input {
                id: "radius-input",
                class: "calculator-input",
                r#type: "number",
                min: "0",
                step: "0.1",
                placeholder: "e.g. 5",
                value: "{radius_input()}",
                oninput: move |evt| radius_input.set(evt.value()),
            }
            dl { class: "calculator-results",
                dt { "Diameter" }
                dd { "{calc.diameter}" }
                dt { "Circumference" }
                dd { "{calc.circumference}" }
                dt { "Area" }
                dd { "{calc.area}" }
            }
        }
    }
}
