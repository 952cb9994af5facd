use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::LessonId;

/// Topical grouping used by the lessons grid filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basics,
    Layout,
    Typography,
    Colors,
    Responsive,
    Animations,
    Advanced,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 7] = [
        Category::Basics,
        Category::Layout,
        Category::Typography,
        Category::Colors,
        Category::Responsive,
        Category::Animations,
        Category::Advanced,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Basics => "Basics",
            Category::Layout => "Layout",
            Category::Typography => "Typography",
            Category::Colors => "Colors",
            Category::Responsive => "Responsive",
            Category::Animations => "Animations",
            Category::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grid-facing metadata for a lesson: everything the lessons grid needs
/// without loading the full content record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonMeta {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
}
