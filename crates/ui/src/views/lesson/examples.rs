use dioxus::prelude::*;

use services::preview::PreviewMode;
use services::session::LessonSession;

use crate::views::widgets::LivePreview;
use crate::vm::ExampleVm;

#[derive(Props, Clone, PartialEq)]
pub struct ExamplesPanelProps {
    pub examples: Vec<ExampleVm>,
    pub session: Signal<Option<LessonSession>>,
}

#[component]
pub fn ExamplesPanel(props: ExamplesPanelProps) -> Element {
    let mut session = props.session;

    let examples = props.examples.iter().map(|example| {
        let index = example.index;
        rsx! {
            section { class: "example",
                h3 { class: "example-title", "{example.title}" }
                p { class: "example-description", "{example.description}" }
                LivePreview {
                    code: example.code.clone(),
                    markup: example.markup.clone(),
                    mode: example.mode,
                    has_before: example.has_before,
                    show_before: example.show_before,
                    on_set_mode: move |mode: PreviewMode| {
                        if let Some(session) = session.write().as_mut()
                            && let Some(pane) = session.preview_mut(index)
                        {
                            pane.set_mode(mode);
                        }
                    },
                    on_toggle_before: move |()| {
                        if let Some(session) = session.write().as_mut()
                            && let Some(pane) = session.preview_mut(index)
                        {
                            pane.toggle_before_after();
                        }
                    },
                }
            }
        }
    });

    rsx! {
        section { class: "examples-panel",
            if props.examples.is_empty() {
                p { class: "panel-empty", "This lesson has no examples yet." }
            } else {
                {examples}
            }
        }
    }
}
