use std::path::Path;
use std::sync::Arc;

use tracing::info;

use content::{builtin_pack, load_pack_from_path};

use crate::Clock;
use crate::error::AppServicesError;
use crate::lesson_service::LessonService;

/// Assembles app-facing services over a loaded lesson pack.
#[derive(Clone)]
pub struct AppServices {
    lessons: Arc<LessonService>,
}

impl AppServices {
    /// Build services from the lesson pack embedded in the binary.
    #[must_use]
    pub fn builtin(clock: Clock) -> Self {
        let store = builtin_pack();
        info!(lessons = store.len(), "loaded embedded lesson pack");
        Self {
            lessons: Arc::new(LessonService::new(Arc::new(store), clock)),
        }
    }

    /// Build services from a lesson pack file.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the pack cannot be read or parsed.
    pub fn from_pack_path(path: &Path, clock: Clock) -> Result<Self, AppServicesError> {
        let store = load_pack_from_path(path)?;
        info!(lessons = store.len(), path = %path.display(), "loaded lesson pack");
        Ok(Self {
            lessons: Arc::new(LessonService::new(Arc::new(store), clock)),
        })
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }
}
