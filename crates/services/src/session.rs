use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use lesson_core::model::{LessonContent, LessonId};
use lesson_core::quiz::QuizEngine;

use crate::challenge::ChallengeTracker;
use crate::playground::PlaygroundBuffer;
use crate::preview::PreviewPane;

//
// ─── TABS ──────────────────────────────────────────────────────────────────────
//

/// The four faces of an open lesson. Any tab is reachable from any other;
/// navigation is never gated on progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LessonTab {
    #[default]
    Learn,
    Examples,
    Challenges,
    Quiz,
}

impl LessonTab {
    pub const ALL: [Self; 4] = [Self::Learn, Self::Examples, Self::Challenges, Self::Quiz];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Learn => "Learn",
            Self::Examples => "Examples",
            Self::Challenges => "Challenges",
            Self::Quiz => "Quiz",
        }
    }
}

//
// ─── LESSON SESSION ────────────────────────────────────────────────────────────
//

/// All mutable state for one open lesson.
///
/// Created when a lesson is opened and dropped when the learner navigates
/// back to the grid; nothing here outlives the view. The content record is
/// shared and read-only, so concurrent sessions over the same lesson never
/// observe each other.
#[derive(Debug, Clone)]
pub struct LessonSession {
    lesson_id: LessonId,
    content: Arc<LessonContent>,
    started_at: DateTime<Utc>,
    active_tab: LessonTab,
    expanded_steps: BTreeSet<usize>,
    challenges: ChallengeTracker,
    quiz: QuizEngine,
    previews: Vec<PreviewPane>,
    editors: Vec<PlaygroundBuffer>,
}

impl LessonSession {
    #[must_use]
    pub fn new(lesson_id: LessonId, content: Arc<LessonContent>, now: DateTime<Utc>) -> Self {
        // First step open by default, when there is one.
        let mut expanded_steps = BTreeSet::new();
        if !content.steps.is_empty() {
            expanded_steps.insert(0);
        }

        let challenges = ChallengeTracker::new(content.challenges.len());
        let quiz = QuizEngine::new(Arc::from(content.quiz.clone()));
        let previews = content
            .examples
            .iter()
            .map(|example| PreviewPane::new(example.before_preview_markup.is_some()))
            .collect();
        let editors = content
            .challenges
            .iter()
            .map(|challenge| PlaygroundBuffer::new(challenge.starter_code.clone()))
            .collect();

        Self {
            lesson_id,
            content,
            started_at: now,
            active_tab: LessonTab::default(),
            expanded_steps,
            challenges,
            quiz,
            previews,
            editors,
        }
    }

    #[must_use]
    pub fn lesson_id(&self) -> &LessonId {
        &self.lesson_id
    }

    #[must_use]
    pub fn content(&self) -> &Arc<LessonContent> {
        &self.content
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    // ── tabs ──

    #[must_use]
    pub fn active_tab(&self) -> LessonTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: LessonTab) {
        self.active_tab = tab;
    }

    // ── steps ──

    /// Expands a collapsed step or collapses an expanded one. Multiple
    /// steps may be open at once. Out-of-range indices are ignored.
    pub fn toggle_step(&mut self, index: usize) {
        if index >= self.content.steps.len() {
            return;
        }
        if !self.expanded_steps.remove(&index) {
            self.expanded_steps.insert(index);
        }
    }

    #[must_use]
    pub fn is_step_expanded(&self, index: usize) -> bool {
        self.expanded_steps.contains(&index)
    }

    // ── sub-state ──

    #[must_use]
    pub fn challenges(&self) -> &ChallengeTracker {
        &self.challenges
    }

    pub fn challenges_mut(&mut self) -> &mut ChallengeTracker {
        &mut self.challenges
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    pub fn quiz_mut(&mut self) -> &mut QuizEngine {
        &mut self.quiz
    }

    /// Discards quiz progress and starts a fresh attempt.
    pub fn restart_quiz(&mut self) {
        self.quiz.reset();
    }

    #[must_use]
    pub fn preview(&self, example_index: usize) -> Option<&PreviewPane> {
        self.previews.get(example_index)
    }

    pub fn preview_mut(&mut self, example_index: usize) -> Option<&mut PreviewPane> {
        self.previews.get_mut(example_index)
    }

    #[must_use]
    pub fn editor(&self, challenge_index: usize) -> Option<&PlaygroundBuffer> {
        self.editors.get(challenge_index)
    }

    pub fn editor_mut(&mut self, challenge_index: usize) -> Option<&mut PlaygroundBuffer> {
        self.editors.get_mut(challenge_index)
    }
}
