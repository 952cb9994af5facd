use dioxus::prelude::*;

use services::session::LessonSession;

use crate::views::widgets::{CodeBlock, InlinePlayground};
use crate::vm::ChallengeVm;

#[derive(Props, Clone, PartialEq)]
pub struct ChallengesPanelProps {
    pub challenges: Vec<ChallengeVm>,
    pub session: Signal<Option<LessonSession>>,
}

/// Challenge list: inline editor, hints, a single-selection solution
/// reveal, and a one-way completion ratchet.
#[component]
pub fn ChallengesPanel(props: ChallengesPanelProps) -> Element {
    let mut session = props.session;

    let challenges = props.challenges.iter().map(|challenge| {
        let index = challenge.index;
        let solution = challenge.solution.clone();
        rsx! {
            section { class: if challenge.completed { "challenge challenge--completed" } else { "challenge" },
                header { class: "challenge-header",
                    h3 { class: "challenge-heading", "{challenge.heading}" }
                    if challenge.completed {
                        span { class: "challenge-done", "Completed ✓" }
                    }
                }
                p { class: "challenge-description", "{challenge.description}" }
                InlinePlayground {
                    code: challenge.editor_code.clone(),
                    dirty: challenge.editor_dirty,
                    on_change: move |code: String| {
                        if let Some(session) = session.write().as_mut()
                            && let Some(editor) = session.editor_mut(index)
                        {
                            editor.set_code(code);
                        }
                    },
                    on_reset: move |()| {
                        if let Some(session) = session.write().as_mut()
                            && let Some(editor) = session.editor_mut(index)
                        {
                            editor.reset();
                        }
                    },
                }
                if !challenge.hints.is_empty() {
                    div { class: "challenge-hints",
                        h4 { "Hints" }
                        ul {
                            for hint in challenge.hints.iter() {
                                li { "💡 {hint}" }
                            }
                        }
                    }
                }
                div { class: "challenge-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            if let Some(session) = session.write().as_mut() {
                                session.challenges_mut().toggle_solution(index);
                            }
                        },
                        if challenge.solution_open { "Hide Solution" } else { "Show Solution" }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: challenge.completed,
                        onclick: move |_| {
                            if let Some(session) = session.write().as_mut() {
                                session.challenges_mut().mark_completed(index);
                            }
                        },
                        if challenge.completed { "Done" } else { "Mark as Complete" }
                    }
                }
                if challenge.solution_open {
                    div { class: "challenge-solution",
                        h4 { "Solution" }
                        CodeBlock { code: solution }
                    }
                }
            }
        }
    });

    rsx! {
        section { class: "challenges-panel",
            if props.challenges.is_empty() {
                p { class: "panel-empty", "This lesson has no challenges yet." }
            } else {
                {challenges}
            }
        }
    }
}
