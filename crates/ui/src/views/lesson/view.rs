use dioxus::prelude::*;
use dioxus_router::Link;

use lesson_core::model::LessonId;
use services::session::{LessonSession, LessonTab};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{LessonVm, map_lesson};

use super::challenges::ChallengesPanel;
use super::examples::ExamplesPanel;
use super::learn::LearnPanel;
use super::quiz::QuizPanel;

/// The tabbed lesson detail view.
///
/// All session state lives in one signal; leaving the route drops the
/// session, so reopening a lesson always starts from defaults.
#[component]
pub fn LessonView(lesson_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let lessons = ctx.lessons();
    let mut session: Signal<Option<LessonSession>> = use_signal(|| {
        LessonId::new(&lesson_id)
            .ok()
            .and_then(|id| lessons.open_lesson(&id))
    });

    let vm: Option<LessonVm> = session.read().as_ref().map(map_lesson);
    let Some(vm) = vm else {
        let message = ViewError::UnknownLesson.message();
        return rsx! {
            div { class: "page lesson-page",
                p { class: "view-error", "{message}" }
                Link { class: "btn btn-secondary", to: Route::Lessons {}, "Back to Lessons" }
            }
        };
    };

    let tabs = vm.tabs.iter().map(|tab| {
        let target = tab.tab;
        let badge = tab.badge.clone();
        rsx! {
            button {
                class: if tab.active { "lesson-tab lesson-tab--active" } else { "lesson-tab" },
                r#type: "button",
                onclick: move |_| {
                    if let Some(session) = session.write().as_mut() {
                        session.select_tab(target);
                    }
                },
                "{tab.label}"
                if let Some(badge) = badge {
                    span { class: "lesson-tab-badge", "{badge}" }
                }
            }
        }
    });

    rsx! {
        div { class: "page lesson-page",
            Link { class: "lesson-back", to: Route::Lessons {}, "← Back to Lessons" }
            header { class: "view-header",
                h2 { class: "view-title", "{vm.title}" }
                span { class: "session-started", "Started {vm.started_label}" }
            }
            nav { class: "lesson-tabs", {tabs} }
            match vm.active_tab {
                LessonTab::Learn => rsx! {
                    LearnPanel {
                        introduction_html: vm.introduction_html.clone(),
                        objectives: vm.objectives.clone(),
                        steps: vm.steps.clone(),
                        key_takeaways: vm.key_takeaways.clone(),
                        session,
                    }
                },
                LessonTab::Examples => rsx! {
                    ExamplesPanel { examples: vm.examples.clone(), session }
                },
                LessonTab::Challenges => rsx! {
                    ChallengesPanel { challenges: vm.challenges.clone(), session }
                },
                LessonTab::Quiz => rsx! {
                    QuizPanel { quiz: vm.quiz.clone(), session }
                },
            }
        }
    }
}
