use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let lesson_count = ctx.lessons().lesson_count();

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h2 { class: "hero-title", "Learn utility-first CSS by doing" }
                p { class: "hero-subtitle",
                    "Interactive lessons, live previews, coding challenges, and quizzes. "
                    "No setup, no build step."
                }
                div { class: "hero-actions",
                    Link { class: "btn btn-primary", to: Route::Lessons {}, "Browse {lesson_count} Lessons" }
                    Link { class: "btn btn-secondary", to: Route::Playground {}, "Open Playground" }
                }
            }
            section { class: "home-features",
                div { class: "feature-card",
                    h3 { "Step-by-step lessons" }
                    p { "Expandable explanations with real code for every concept." }
                }
                div { class: "feature-card",
                    h3 { "Live previews" }
                    p { "Flip between rendered output and raw markup, before and after." }
                }
                div { class: "feature-card",
                    h3 { "Challenges & quizzes" }
                    p { "Write the utilities yourself, then check your understanding." }
                }
            }
        }
    }
}
