use std::collections::HashMap;
use std::sync::Arc;

use lesson_core::model::{LessonContent, LessonId, LessonMeta};

/// Read-only source of lesson content.
///
/// Lookups are synchronous: content is loaded once at startup and never
/// changes afterwards, so records can be shared freely across sessions.
/// An unknown id is a valid `None`, not an error.
pub trait LessonRepository: Send + Sync {
    /// Fetch the full content record for a lesson.
    fn get_lesson(&self, id: &LessonId) -> Option<Arc<LessonContent>>;

    /// Fetch the grid metadata for a lesson.
    fn get_meta(&self, id: &LessonId) -> Option<LessonMeta>;

    /// All lessons in authored order.
    fn list_lessons(&self) -> Vec<LessonMeta>;
}

#[derive(Debug)]
struct LessonEntry {
    meta: LessonMeta,
    content: Arc<LessonContent>,
}

/// In-memory lesson collection, the backing store for loaded packs.
#[derive(Debug, Default)]
pub struct LessonStore {
    lessons: HashMap<LessonId, LessonEntry>,
    order: Vec<LessonId>,
}

impl LessonStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a lesson; returns false (and leaves the store unchanged) if
    /// the id is already present.
    pub fn insert(&mut self, meta: LessonMeta, content: LessonContent) -> bool {
        let id = meta.id.clone();
        if self.lessons.contains_key(&id) {
            return false;
        }
        self.order.push(id.clone());
        self.lessons.insert(
            id,
            LessonEntry {
                meta,
                content: Arc::new(content),
            },
        );
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl LessonRepository for LessonStore {
    fn get_lesson(&self, id: &LessonId) -> Option<Arc<LessonContent>> {
        self.lessons.get(id).map(|entry| Arc::clone(&entry.content))
    }

    fn get_meta(&self, id: &LessonId) -> Option<LessonMeta> {
        self.lessons.get(id).map(|entry| entry.meta.clone())
    }

    fn list_lessons(&self) -> Vec<LessonMeta> {
        self.order
            .iter()
            .filter_map(|id| self.lessons.get(id))
            .map(|entry| entry.meta.clone())
            .collect()
    }
}
