use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use lesson_core::time::fixed_clock;
use services::LessonService;

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, LessonView, LessonsView, PlaygroundView};

#[derive(Clone)]
struct TestApp {
    lessons: Arc<LessonService>,
}

impl UiApp for TestApp {
    fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Lessons,
    Lesson(String),
    Playground,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Lessons => rsx! { LessonsView {} },
        ViewKind::Lesson(lesson_id) => rsx! { LessonView { lesson_id } },
        ViewKind::Playground => rsx! { PlaygroundView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub lessons: Arc<LessonService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let lessons = Arc::new(LessonService::new(
        Arc::new(content::builtin_pack()),
        fixed_clock(),
    ));

    let app = Arc::new(TestApp {
        lessons: Arc::clone(&lessons),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, lessons }
}
