use std::sync::Arc;

use tracing::{debug, info};

use content::LessonRepository;
use lesson_core::model::{LessonId, LessonMeta};

use crate::Clock;
use crate::session::LessonSession;

//
// ─── LESSON SERVICE ────────────────────────────────────────────────────────────
//

/// Opens lessons and lists the catalog on top of a lesson repository.
#[derive(Clone)]
pub struct LessonService {
    repo: Arc<dyn LessonRepository>,
    clock: Clock,
}

impl LessonService {
    #[must_use]
    pub fn new(repo: Arc<dyn LessonRepository>, clock: Clock) -> Self {
        Self { repo, clock }
    }

    /// Starts a fresh session for the given lesson.
    ///
    /// Returns `None` for an unknown id; the caller decides how to render
    /// the absence.
    #[must_use]
    pub fn open_lesson(&self, id: &LessonId) -> Option<LessonSession> {
        let Some(record) = self.repo.get_lesson(id) else {
            debug!(lesson = %id, "lesson not found");
            return None;
        };
        info!(lesson = %id, title = %record.title, "opening lesson");
        Some(LessonSession::new(id.clone(), record, self.clock.now()))
    }

    #[must_use]
    pub fn get_meta(&self, id: &LessonId) -> Option<LessonMeta> {
        self.repo.get_meta(id)
    }

    /// The catalog in authored order, for the lessons grid.
    #[must_use]
    pub fn list_lessons(&self) -> Vec<LessonMeta> {
        self.repo.list_lessons()
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.repo.list_lessons().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::{LessonStore, builtin_pack};
    use lesson_core::time::fixed_clock;

    fn service(store: LessonStore) -> LessonService {
        LessonService::new(Arc::new(store), fixed_clock())
    }

    #[test]
    fn opening_a_known_lesson_yields_a_fresh_session() {
        let service = service(builtin_pack());
        let id = LessonId::new("flexbox").unwrap();

        let session = service.open_lesson(&id).unwrap();
        assert_eq!(session.lesson_id(), &id);
        assert_eq!(session.content().title, "Flexbox Layout");
        assert!(session.is_step_expanded(0));
    }

    #[test]
    fn opening_an_unknown_lesson_is_none() {
        let service = service(builtin_pack());
        let id = LessonId::new("does-not-exist").unwrap();
        assert!(service.open_lesson(&id).is_none());
    }

    #[test]
    fn reopening_discards_previous_progress() {
        let service = service(builtin_pack());
        let id = LessonId::new("spacing").unwrap();

        let mut first = service.open_lesson(&id).unwrap();
        first.quiz_mut().select_answer(1);
        first.challenges_mut().mark_completed(0);
        drop(first);

        let second = service.open_lesson(&id).unwrap();
        assert_eq!(second.quiz().score(), 0);
        assert!(!second.challenges().is_completed(0));
    }

    #[test]
    fn catalog_lists_in_authored_order() {
        let service = service(builtin_pack());
        let ids: Vec<String> = service
            .list_lessons()
            .into_iter()
            .map(|meta| meta.id.to_string())
            .collect();
        assert_eq!(ids, ["utility-classes", "spacing", "flexbox"]);
        assert_eq!(service.lesson_count(), 3);
    }
}
