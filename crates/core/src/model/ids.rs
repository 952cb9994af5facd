use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LessonIdError {
    #[error("lesson id cannot be empty")]
    Empty,
    #[error("lesson id must be lowercase alphanumerics and hyphens, got {raw:?}")]
    InvalidChars { raw: String },
}

/// Identifier for a lesson: a URL-friendly slug such as `utility-classes`.
///
/// Slugs are lowercase ASCII alphanumerics and hyphens, never empty.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LessonId(String);

impl LessonId {
    /// Creates a `LessonId`, validating the slug shape.
    ///
    /// # Errors
    ///
    /// Returns `LessonIdError::Empty` for an empty string and
    /// `LessonIdError::InvalidChars` for anything outside `[a-z0-9-]`.
    pub fn new(slug: impl Into<String>) -> Result<Self, LessonIdError> {
        let slug = slug.into();
        if slug.is_empty() {
            return Err(LessonIdError::Empty);
        }
        if !slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(LessonIdError::InvalidChars { raw: slug });
        }
        Ok(Self(slug))
    }

    /// Returns the underlying slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LessonId {
    type Error = LessonIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LessonId> for String {
    fn from(id: LessonId) -> Self {
        id.0
    }
}

impl fmt::Debug for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonId({})", self.0)
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LessonId {
    type Err = LessonIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
