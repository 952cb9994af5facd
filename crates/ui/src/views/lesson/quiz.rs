use dioxus::prelude::*;

use lesson_core::quiz::AdvanceOutcome;
use services::session::LessonSession;

use crate::views::scripts::fire_celebration;
use crate::vm::{OptionState, QuizVm};

#[derive(Props, Clone, PartialEq)]
pub struct QuizPanelProps {
    pub quiz: QuizVm,
    pub session: Signal<Option<LessonSession>>,
}

/// One question at a time with reveal-on-select, then a results card.
///
/// The celebration fires exactly when the engine reports the completion
/// transition with a perfect score; re-renders of the results card can
/// never replay it.
#[component]
pub fn QuizPanel(props: QuizPanelProps) -> Element {
    let mut session = props.session;

    match props.quiz {
        QuizVm::Question(question) => {
            let revealed = question.revealed;
            let options = question.options.iter().map(|option| {
                let index = option.index;
                let state_class = match option.state {
                    OptionState::Neutral => "quiz-option",
                    OptionState::Correct => "quiz-option quiz-option--correct",
                    OptionState::Incorrect => "quiz-option quiz-option--incorrect",
                };
                rsx! {
                    button {
                        class: state_class,
                        r#type: "button",
                        disabled: revealed,
                        onclick: move |_| {
                            if let Some(session) = session.write().as_mut() {
                                session.quiz_mut().select_answer(index);
                            }
                        },
                        span { class: "quiz-option-letter", "{option.letter}" }
                        span { class: "quiz-option-text", "{option.text}" }
                    }
                }
            });

            rsx! {
                section { class: "quiz-panel",
                    header { class: "quiz-header",
                        span { class: "quiz-counter", "{question.counter}" }
                        div { class: "quiz-progress",
                            div {
                                class: "quiz-progress-fill",
                                style: "width: {question.progress_percent}%",
                            }
                        }
                    }
                    p { class: "quiz-question", "{question.question}" }
                    div { class: "quiz-options", {options} }
                    if question.revealed {
                        div {
                            class: if question.answered_correctly { "quiz-feedback quiz-feedback--correct" } else { "quiz-feedback quiz-feedback--incorrect" },
                            p { class: "quiz-feedback-line", "{question.feedback}" }
                            p { class: "quiz-explanation", "{question.explanation}" }
                        }
                        button {
                            class: "btn btn-primary quiz-next",
                            r#type: "button",
                            onclick: move |_| {
                                let outcome = session
                                    .write()
                                    .as_mut()
                                    .map(|session| session.quiz_mut().advance());
                                if matches!(outcome, Some(AdvanceOutcome::Completed { perfect: true })) {
                                    spawn(async move {
                                        fire_celebration().await;
                                    });
                                }
                            },
                            "{question.next_label}"
                        }
                    }
                }
            }
        }
        QuizVm::Result(result) => rsx! {
            section { class: "quiz-panel quiz-results",
                div { class: "quiz-score-circle", span { "{result.score}" } }
                h3 { class: "quiz-result-heading", "{result.heading}" }
                p { class: "quiz-result-summary", "{result.summary}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        if let Some(session) = session.write().as_mut() {
                            session.restart_quiz();
                        }
                    },
                    "Try Again"
                }
            }
        },
    }
}
