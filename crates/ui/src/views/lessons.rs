use dioxus::prelude::*;
use dioxus_router::use_navigator;

use lesson_core::model::Category;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{LessonCardVm, map_lesson_card};

#[component]
pub fn LessonsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut filter = use_signal(|| None::<Category>);

    let cards: Vec<LessonCardVm> = ctx
        .lessons()
        .list_lessons()
        .iter()
        .map(map_lesson_card)
        .collect();

    let visible: Vec<LessonCardVm> = cards
        .iter()
        .filter(|card| filter().is_none_or(|category| card.category == category))
        .cloned()
        .collect();

    let category_tabs = Category::ALL.iter().map(|&category| {
        rsx! {
            button {
                class: if filter() == Some(category) { "category-tab category-tab--active" } else { "category-tab" },
                r#type: "button",
                onclick: move |_| filter.set(Some(category)),
                "{category.label()}"
            }
        }
    });

    let lesson_cards = visible.iter().map(|card| {
        let nav = navigator;
        let lesson_id = card.id.clone();
        rsx! {
            button {
                class: "lesson-card",
                r#type: "button",
                onclick: move |_| {
                    let _ = nav.push(Route::Lesson { lesson_id: lesson_id.clone() });
                },
                div { class: "lesson-card-top",
                    span { class: "lesson-card-category", "{card.category_label}" }
                    span { class: "lesson-card-duration", "{card.duration_label}" }
                }
                h3 { class: "lesson-card-title", "{card.title}" }
                p { class: "lesson-card-description", "{card.description}" }
                span { class: "lesson-card-difficulty", "{card.difficulty_label}" }
            }
        }
    });

    rsx! {
        div { class: "page lessons-page",
            header { class: "view-header",
                h2 { class: "view-title", "Lessons" }
                p { class: "view-subtitle", "Pick a topic and work through it at your own pace." }
            }
            div { class: "category-tabs",
                button {
                    class: if filter().is_none() { "category-tab category-tab--active" } else { "category-tab" },
                    r#type: "button",
                    onclick: move |_| filter.set(None),
                    "All"
                }
                {category_tabs}
            }
            if visible.is_empty() {
                p { class: "lessons-empty", "No lessons in this category yet." }
            } else {
                div { class: "lessons-grid",
                    {lesson_cards}
                }
            }
        }
    }
}
