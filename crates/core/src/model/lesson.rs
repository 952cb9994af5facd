use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── CONTENT DEFECTS ───────────────────────────────────────────────────────────
//

/// Authoring defects found in a lesson record.
///
/// These are content problems, not runtime errors: the application reports
/// them once at load time and then degrades gracefully (an unanswerable
/// question never scores, an empty quiz is immediately complete, a
/// hint-less challenge renders without hints).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentDefect {
    #[error("lesson has no steps")]
    NoSteps,

    #[error("quiz has no questions")]
    EmptyQuiz,

    #[error("question {index} has fewer than two options")]
    TooFewOptions { index: usize },

    #[error("question {index} has correct_index {correct_index} outside its {options} options")]
    CorrectIndexOutOfRange {
        index: usize,
        correct_index: usize,
        options: usize,
    },

    #[error("challenge {index} has no hints")]
    ChallengeWithoutHints { index: usize },

    #[error("challenge {index} has an empty solution")]
    ChallengeWithoutSolution { index: usize },
}

//
// ─── RECORD PARTS ──────────────────────────────────────────────────────────────
//

/// One collapsible explanatory block within the Learn tab.
///
/// `explanation` may contain markdown; the UI renders it through the
/// sanitizing markdown pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonStep {
    pub title: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// An interactive example: source markup plus the markup the preview pane
/// renders, optionally with a "before" variant for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonExample {
    pub title: String,
    pub description: String,
    pub code: String,
    pub preview_markup: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_preview_markup: Option<String>,
}

/// A coding exercise with starter code, a model solution, and hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeChallenge {
    pub title: String,
    pub description: String,
    pub starter_code: String,
    pub solution: String,
    #[serde(default)]
    pub hints: Vec<String>,
}

/// A single multiple-choice quiz question.
///
/// Option order is significant: it drives the A/B/C/D labels, not the
/// correctness logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

impl QuizQuestion {
    /// Whether this question can ever be answered correctly.
    ///
    /// A question with fewer than two options or an out-of-range
    /// `correct_index` is a content defect; the quiz engine treats it as
    /// never matching any submitted answer.
    #[must_use]
    pub fn is_answerable(&self) -> bool {
        self.options.len() >= 2 && self.correct_index < self.options.len()
    }
}

//
// ─── LESSON CONTENT ────────────────────────────────────────────────────────────
//

/// The full content record for one lesson.
///
/// Immutable once loaded; shared by reference (`Arc`) across sessions.
/// Nothing in the session layer ever mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonContent {
    pub title: String,
    pub introduction: String,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
    #[serde(default)]
    pub steps: Vec<LessonStep>,
    #[serde(default)]
    pub examples: Vec<LessonExample>,
    #[serde(default)]
    pub challenges: Vec<CodeChallenge>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
    #[serde(default)]
    pub key_takeaways: Vec<String>,
}

impl LessonContent {
    /// Enumerates authoring defects in this record.
    ///
    /// An empty result means the record is well-formed. Defects are
    /// reported for logging at load time; they never abort loading.
    #[must_use]
    pub fn defects(&self) -> Vec<ContentDefect> {
        let mut defects = Vec::new();

        if self.steps.is_empty() {
            defects.push(ContentDefect::NoSteps);
        }

        if self.quiz.is_empty() {
            defects.push(ContentDefect::EmptyQuiz);
        }
        for (index, question) in self.quiz.iter().enumerate() {
            if question.options.len() < 2 {
                defects.push(ContentDefect::TooFewOptions { index });
            } else if question.correct_index >= question.options.len() {
                defects.push(ContentDefect::CorrectIndexOutOfRange {
                    index,
                    correct_index: question.correct_index,
                    options: question.options.len(),
                });
            }
        }

        for (index, challenge) in self.challenges.iter().enumerate() {
            if challenge.hints.is_empty() {
                defects.push(ContentDefect::ChallengeWithoutHints { index });
            }
            if challenge.solution.trim().is_empty() {
                defects.push(ContentDefect::ChallengeWithoutSolution { index });
            }
        }

        defects
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.defects().is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
