use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use lesson_core::model::{LessonContent, LessonMeta};

use crate::repository::LessonStore;

/// Errors surfaced while loading a lesson pack.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PackError {
    #[error("failed to read lesson pack: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse lesson pack: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate lesson id: {id}")]
    DuplicateLesson { id: String },
}

/// One lesson in a pack file: grid metadata plus the full content record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackLesson {
    pub meta: LessonMeta,
    pub content: LessonContent,
}

/// A set of lessons as authored on disk.
///
/// Authored order is display order for the lessons grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPack {
    pub lessons: Vec<PackLesson>,
}

impl LessonPack {
    /// Turns the pack into a lookup store, reporting content defects.
    ///
    /// Defects are authoring problems, tolerated at runtime, so they are
    /// logged here once and the lesson still loads. A duplicate id is the
    /// one shape that does fail: it would silently shadow a lesson.
    ///
    /// # Errors
    ///
    /// Returns `PackError::DuplicateLesson` if two lessons share an id.
    pub fn into_store(self) -> Result<LessonStore, PackError> {
        let mut store = LessonStore::new();
        for lesson in self.lessons {
            for defect in lesson.content.defects() {
                warn!(lesson = %lesson.meta.id, %defect, "lesson content defect");
            }
            let id = lesson.meta.id.clone();
            if !store.insert(lesson.meta, lesson.content) {
                return Err(PackError::DuplicateLesson { id: id.to_string() });
            }
        }
        Ok(store)
    }
}

/// Parses a lesson pack from JSON text.
///
/// # Errors
///
/// Returns `PackError::Parse` on malformed JSON and
/// `PackError::DuplicateLesson` on a repeated lesson id.
pub fn load_pack_from_str(json: &str) -> Result<LessonStore, PackError> {
    let pack: LessonPack = serde_json::from_str(json)?;
    pack.into_store()
}

/// Reads and parses a lesson pack file.
///
/// # Errors
///
/// Returns `PackError::Io` if the file cannot be read, plus the
/// `load_pack_from_str` errors.
pub fn load_pack_from_path(path: &Path) -> Result<LessonStore, PackError> {
    let json = std::fs::read_to_string(path)?;
    load_pack_from_str(&json)
}

/// The lesson pack embedded in the binary, used when no pack file is
/// supplied.
///
/// # Panics
///
/// Panics if the embedded pack is malformed; it is validated by tests, so
/// this is a build defect rather than a runtime condition.
#[must_use]
pub fn builtin_pack() -> LessonStore {
    load_pack_from_str(include_str!("../assets/lessons.json"))
        .expect("embedded lesson pack should be valid")
}
