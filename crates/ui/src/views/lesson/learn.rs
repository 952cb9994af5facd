use dioxus::prelude::*;

use services::session::LessonSession;

use crate::views::widgets::CodeBlock;
use crate::vm::StepVm;

#[derive(Props, Clone, PartialEq)]
pub struct LearnPanelProps {
    pub introduction_html: String,
    pub objectives: Vec<String>,
    pub steps: Vec<StepVm>,
    pub key_takeaways: Vec<String>,
    pub session: Signal<Option<LessonSession>>,
}

/// Introduction, objectives, the step accordion, and key takeaways.
#[component]
pub fn LearnPanel(props: LearnPanelProps) -> Element {
    let mut session = props.session;

    let steps = props.steps.iter().map(|step| {
        let index = step.index;
        let explanation = step.explanation_html.clone();
        let code = step.code.clone();
        rsx! {
            div { class: if step.expanded { "step step--expanded" } else { "step" },
                button {
                    class: "step-header",
                    r#type: "button",
                    onclick: move |_| {
                        if let Some(session) = session.write().as_mut() {
                            session.toggle_step(index);
                        }
                    },
                    span { class: "step-number", "{index + 1}" }
                    span { class: "step-title", "{step.title}" }
                    span { class: "step-chevron", if step.expanded { "▾" } else { "▸" } }
                }
                if step.expanded {
                    div { class: "step-body",
                        div { class: "step-explanation", dangerous_inner_html: "{explanation}" }
                        if let Some(code) = code {
                            CodeBlock { code }
                        }
                    }
                }
            }
        }
    });

    rsx! {
        section { class: "learn-panel",
            div { class: "lesson-introduction", dangerous_inner_html: "{props.introduction_html}" }
            if !props.objectives.is_empty() {
                div { class: "learning-objectives",
                    h3 { "What you'll learn" }
                    ul {
                        for objective in props.objectives.iter() {
                            li { "{objective}" }
                        }
                    }
                }
            }
            div { class: "steps", {steps} }
            if !props.key_takeaways.is_empty() {
                div { class: "key-takeaways",
                    h3 { "Key Takeaways" }
                    ul {
                        for takeaway in props.key_takeaways.iter() {
                            li { "{takeaway}" }
                        }
                    }
                }
            }
        }
    }
}
