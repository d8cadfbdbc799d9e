use std::time::Duration;

use dioxus::prelude::Key;
use dioxus::prelude::*;

use coach_core::effects::{COMPLETION_DELAY_MS, REVEAL_DELAY_MS};
use coach_core::model::{AnswerChoice, SectionId};
use coach_core::quiz::{AdvanceOutcome, SelectOutcome};
use coach_core::{Clock, Effect, Severity};
use services::Notifier;

use crate::context::AppContext;
use crate::views::notice::push_notice;
use crate::vm::{map_question, map_results};

/// The embedded practice quiz shown inside the final tutorial section.
#[component]
pub fn QuizPanel(
    notifier: Signal<Notifier>,
    clock: Clock,
    on_exit: EventHandler<SectionId>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut quiz = use_signal(|| ctx.new_quiz());
    let mut revealed = use_signal(|| false);
    let mut celebrating = use_signal(|| false);

    let select = use_callback(move |choice: AnswerChoice| {
        let outcome = quiz.write().select_answer(choice);
        if matches!(outcome, SelectOutcome::Recorded { .. }) {
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(REVEAL_DELAY_MS as u64)).await;
                let effects = quiz.write().drain_due_effects();
                if effects
                    .iter()
                    .any(|effect| matches!(effect, Effect::RevealAnswer { .. }))
                {
                    revealed.set(true);
                }
            });
        }
    });

    let next = use_callback(move |()| {
        let outcome = quiz.write().next_question();
        revealed.set(false);
        if let AdvanceOutcome::Completed { tier, .. } = outcome
            && tier.is_passing()
        {
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(COMPLETION_DELAY_MS as u64)).await;
                let effects = quiz.write().drain_due_effects();
                if effects.contains(&Effect::ShowCompletion) {
                    celebrating.set(true);
                    push_notice(
                        notifier,
                        clock,
                        "Circle course completed!".to_string(),
                        Severity::Success,
                    );
                }
            });
        }
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if let Key::Character(value) = evt.data.key()
            && let Ok(number) = value.parse::<usize>()
            && let Some(choice) = number.checked_sub(1).and_then(AnswerChoice::from_index)
        {
            evt.prevent_default();
            select.call(choice);
        }
    });

    let started = quiz.read().is_started();
    let total = quiz.read().total_questions();
    let results = map_results(&quiz.read());
    let question = map_question(&quiz.read(), revealed());

    rsx! {
        div {
            class: "quiz-panel",
            id: "quiz-root",
            tabindex: "0",
            onkeydown: on_key,

            if !started {
                div { class: "quiz-start",
                    h4 { class: "quiz-start-title", "Practice What You Learned" }
                    p { class: "quiz-start-hint",
                        "{total} questions, 20 points each. You need 60 to pass."
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| quiz.write().start(),
                        "Start Practice"
                    }
                }
            } else if let Some(results) = results {
                div { class: "quiz-results",
                    h4 { class: "quiz-results-title", "{results.title}" }
                    p { class: "quiz-results-score",
                        "{results.score} / {results.max_score} points"
                    }
                    p { class: "quiz-results-message", "{results.message}" }
                    div { class: "quiz-results-actions",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                celebrating.set(false);
                                revealed.set(false);
                                quiz.write().retake();
                            },
                            "Try Again"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                let section = quiz.read().exit_section();
                                on_exit.call(section);
                            },
                            "Back to Interactive Practice"
                        }
                    }
                }
                if celebrating() {
                    div {
                        class: "celebration-overlay",
                        onclick: move |_| celebrating.set(false),
                        div { class: "celebration",
                            span { class: "celebration-icon", "\u{1f389}" }
                            h4 { "Course complete!" }
                            p { "You passed the circle practice. Well done!" }
                        }
                    }
                }
            } else if let Some(question) = question {
                div { class: "quiz-question",
                    header { class: "quiz-question-header",
                        span { class: "quiz-question-number",
                            "Question {question.number} of {question.total}"
                        }
                        div { class: "quiz-progress-track",
                            div {
                                class: "quiz-progress-fill",
                                style: "width: {question.progress_pct}%",
                            }
                        }
                    }
                    p { class: "quiz-prompt", "{question.prompt}" }
                    div { class: "quiz-options",
                        for option in question.options {
                            button {
                                class: option.state.class(),
                                r#type: "button",
                                disabled: option.disabled,
                                onclick: move |_| select.call(option.choice),
                                span { class: "answer-label", "{option.choice.label()}" }
                                span { class: "answer-text", "{option.text}" }
                            }
                        }
                    }
                    if let Some(explanation) = question.explanation {
                        p { class: "quiz-explanation", "{explanation}" }
                    }
                    button {
                        class: "btn btn-primary quiz-next",
                        r#type: "button",
                        disabled: !question.next_enabled,
                        onclick: move |_| next.call(()),
                        "Next \u{2192}"
                    }
                }
            }
        }
    }
}
