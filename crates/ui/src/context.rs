use std::sync::Arc;

use services::LessonService;

/// What the composition root must supply to the UI layer.
pub trait UiApp: Send + Sync {
    fn lessons(&self) -> Arc<LessonService>;
}

#[derive(Clone)]
pub struct AppContext {
    lessons: Arc<LessonService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            lessons: app.lessons(),
        }
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
