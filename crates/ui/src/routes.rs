use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, LessonView, LessonsView, PlaygroundView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/lessons", LessonsView)] Lessons {},
        #[route("/lessons/:lesson_id", LessonView)] Lesson { lesson_id: String },
        #[route("/playground", PlaygroundView)] Playground {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "site-header",
            h1 { class: "site-logo", "Utility CSS Academy" }
            nav { class: "site-nav",
                ul {
                    li { Link { to: Route::Home {}, "Home" } }
                    li { Link { to: Route::Lessons {}, "Lessons" } }
                    li { Link { to: Route::Playground {}, "Playground" } }
                }
            }
        }
    }
}
