use std::sync::Arc;

use crate::model::QuizQuestion;

//
// ─── PHASES & OUTCOMES ─────────────────────────────────────────────────────────
//

/// Where the engine currently is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for the learner to pick an option for the current question.
    Answering,
    /// An answer has been recorded; correctness styling and the advance
    /// control are visible.
    Revealed,
    /// The learner has advanced past the last question.
    Complete,
}

/// Result of [`QuizEngine::select_answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The answer was recorded and the question revealed.
    Recorded { correct: bool },
    /// The call was invalid in the current phase (already revealed,
    /// already complete, or option index out of range) and changed nothing.
    Ignored,
}

/// Result of [`QuizEngine::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the next question, back in the answering phase.
    Next,
    /// Advanced past the last question. `perfect` is true when every
    /// question was answered correctly; the caller fires its celebration
    /// effect on this value, which is produced exactly once per
    /// completion transition.
    Completed { perfect: bool },
    /// The call was invalid in the current phase and changed nothing.
    Ignored,
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Drives a single learner through an ordered quiz.
///
/// The engine enforces at-most-one-answer-per-question and produces a
/// final score. Invalid calls are ignored rather than treated as errors:
/// they are UI guards, not protocol violations.
///
/// Content defects are degraded, never fatal: a quiz with zero questions
/// starts complete with score 0, and a question whose `correct_index` is
/// out of range never matches any submitted answer.
///
/// # Examples
///
/// ```
/// # use lesson_core::model::QuizQuestion;
/// # use lesson_core::quiz::{AdvanceOutcome, AnswerOutcome, QuizEngine};
/// let questions = vec![QuizQuestion {
///     question: "Which class sets flex layout?".into(),
///     options: vec!["flex".into(), "grid".into()],
///     correct_index: 0,
///     explanation: "`flex` makes the element a flex container.".into(),
/// }];
/// let mut quiz = QuizEngine::new(questions.into());
///
/// assert_eq!(quiz.select_answer(0), AnswerOutcome::Recorded { correct: true });
/// assert_eq!(quiz.advance(), AdvanceOutcome::Completed { perfect: true });
/// assert_eq!(quiz.score(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Arc<[QuizQuestion]>,
    current: usize,
    selected: Option<usize>,
    revealed: bool,
    score: usize,
    complete: bool,
}

impl QuizEngine {
    /// Creates an engine positioned at the first question.
    ///
    /// An empty question list is tolerated: the engine starts in the
    /// `Complete` phase with a score of 0 and never fires the perfect
    /// signal.
    #[must_use]
    pub fn new(questions: Arc<[QuizQuestion]>) -> Self {
        let complete = questions.is_empty();
        Self {
            questions,
            current: 0,
            selected: None,
            revealed: false,
            score: 0,
            complete,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.complete {
            QuizPhase::Complete
        } else if self.revealed {
            QuizPhase::Revealed
        } else {
            QuizPhase::Answering
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question currently being answered or revealed, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.complete {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Count of correctly answered questions so far.
    ///
    /// Bounded by `total()` and monotonically non-decreasing within a run.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Records the learner's answer for the current question.
    ///
    /// Valid only in the `Answering` phase; once revealed, re-selecting
    /// never changes the recorded answer or the score. The score
    /// increments exactly once per question, on a correct first choice.
    pub fn select_answer(&mut self, option_index: usize) -> AnswerOutcome {
        if self.complete || self.revealed {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = self.questions.get(self.current) else {
            return AnswerOutcome::Ignored;
        };
        if option_index >= question.options.len() {
            return AnswerOutcome::Ignored;
        }

        self.selected = Some(option_index);
        self.revealed = true;

        let correct = question.is_answerable() && option_index == question.correct_index;
        if correct {
            self.score += 1;
        }
        AnswerOutcome::Recorded { correct }
    }

    /// Moves past the current revealed question.
    ///
    /// From any question but the last, returns to `Answering` on the next
    /// question with the selection cleared. From the last question's
    /// `Revealed` phase, transitions to `Complete`; that transition is the
    /// only point at which `Completed { .. }` is produced.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.complete || !self.revealed {
            return AdvanceOutcome::Ignored;
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
            self.revealed = false;
            AdvanceOutcome::Next
        } else {
            self.complete = true;
            self.selected = None;
            self.revealed = false;
            let perfect = !self.questions.is_empty() && self.score == self.questions.len();
            AdvanceOutcome::Completed { perfect }
        }
    }

    /// Discards the run and returns to the first question with score 0.
    ///
    /// Valid from any phase. Prior answers are not retained for review.
    pub fn reset(&mut self) {
        self.current = 0;
        self.selected = None;
        self.revealed = false;
        self.score = 0;
        self.complete = self.questions.is_empty();
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct_index: usize) -> QuizQuestion {
        QuizQuestion {
            question: "Which class applies padding on all sides?".to_string(),
            options: vec!["m-4".to_string(), "p-4".to_string(), "gap-4".to_string()],
            correct_index,
            explanation: "p-* utilities apply padding.".to_string(),
        }
    }

    fn engine(correct: &[usize]) -> QuizEngine {
        let questions: Vec<QuizQuestion> = correct.iter().map(|&i| question(i)).collect();
        QuizEngine::new(questions.into())
    }

    #[test]
    fn starts_answering_first_question() {
        let quiz = engine(&[0, 1]);
        assert_eq!(quiz.phase(), QuizPhase::Answering);
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.is_complete());
    }

    #[test]
    fn correct_answer_scores_once() {
        let mut quiz = engine(&[1]);
        assert_eq!(quiz.select_answer(1), AnswerOutcome::Recorded { correct: true });
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.phase(), QuizPhase::Revealed);
    }

    #[test]
    fn incorrect_answer_does_not_score() {
        let mut quiz = engine(&[1]);
        assert_eq!(quiz.select_answer(0), AnswerOutcome::Recorded { correct: false });
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.selected_answer(), Some(0));
    }

    #[test]
    fn second_selection_after_reveal_is_ignored() {
        let mut quiz = engine(&[1]);
        quiz.select_answer(0);
        assert_eq!(quiz.select_answer(1), AnswerOutcome::Ignored);
        assert_eq!(quiz.selected_answer(), Some(0));
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut quiz = engine(&[1]);
        assert_eq!(quiz.select_answer(3), AnswerOutcome::Ignored);
        assert_eq!(quiz.phase(), QuizPhase::Answering);
        assert_eq!(quiz.selected_answer(), None);
    }

    #[test]
    fn advance_before_reveal_is_ignored() {
        let mut quiz = engine(&[0, 1]);
        assert_eq!(quiz.advance(), AdvanceOutcome::Ignored);
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn advance_moves_to_next_and_clears_selection() {
        let mut quiz = engine(&[0, 1]);
        quiz.select_answer(0);
        assert_eq!(quiz.advance(), AdvanceOutcome::Next);
        assert_eq!(quiz.current_index(), 1);
        assert_eq!(quiz.selected_answer(), None);
        assert!(!quiz.is_revealed());
        assert!(!quiz.is_complete());
    }

    #[test]
    fn spec_scenario_two_of_three_correct() {
        // Correct indices [1, 2, 0]; learner answers 1, 2, 1.
        let mut quiz = engine(&[1, 2, 0]);
        assert_eq!(quiz.select_answer(1), AnswerOutcome::Recorded { correct: true });
        assert_eq!(quiz.advance(), AdvanceOutcome::Next);
        assert_eq!(quiz.select_answer(2), AnswerOutcome::Recorded { correct: true });
        assert_eq!(quiz.advance(), AdvanceOutcome::Next);
        assert_eq!(quiz.select_answer(1), AnswerOutcome::Recorded { correct: false });
        assert_eq!(quiz.advance(), AdvanceOutcome::Completed { perfect: false });
        assert!(quiz.is_complete());
        assert_eq!(quiz.score(), 2);
    }

    #[test]
    fn perfect_signal_fires_only_on_full_score() {
        let mut quiz = engine(&[0, 1]);
        quiz.select_answer(0);
        quiz.advance();
        quiz.select_answer(1);
        assert_eq!(quiz.advance(), AdvanceOutcome::Completed { perfect: true });

        // Re-render / repeated calls never replay the completion signal.
        assert_eq!(quiz.advance(), AdvanceOutcome::Ignored);
        assert_eq!(quiz.select_answer(0), AnswerOutcome::Ignored);
    }

    #[test]
    fn correct_last_answer_alone_is_not_perfect() {
        // Missed the first question, nailed the last: no celebration.
        let mut quiz = engine(&[1, 0]);
        quiz.select_answer(0);
        quiz.advance();
        quiz.select_answer(0);
        assert_eq!(quiz.advance(), AdvanceOutcome::Completed { perfect: false });
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn reset_restores_initial_state_from_any_phase() {
        let mut quiz = engine(&[0, 1]);
        quiz.select_answer(0);
        quiz.advance();
        quiz.select_answer(1);
        quiz.advance();
        assert!(quiz.is_complete());

        quiz.reset();
        assert_eq!(quiz.phase(), QuizPhase::Answering);
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.selected_answer(), None);
        assert!(!quiz.is_complete());

        // Resetting mid-run behaves identically.
        quiz.select_answer(0);
        quiz.reset();
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn score_stays_within_bounds_across_a_run() {
        let mut quiz = engine(&[0, 0, 0]);
        for option in [0, 1, 2] {
            assert!(quiz.score() <= quiz.total());
            quiz.select_answer(option);
            assert!(quiz.score() <= quiz.total());
            quiz.advance();
        }
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn empty_quiz_is_immediately_complete() {
        let mut quiz = QuizEngine::new(Vec::new().into());
        assert!(quiz.is_complete());
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.current_question(), None);
        assert_eq!(quiz.select_answer(0), AnswerOutcome::Ignored);
        assert_eq!(quiz.advance(), AdvanceOutcome::Ignored);

        quiz.reset();
        assert!(quiz.is_complete());
    }

    #[test]
    fn unanswerable_question_never_scores() {
        // correct_index 5 is outside the 3 options: a content defect.
        let mut quiz = engine(&[5]);
        for option in 0..3 {
            let mut run = quiz.clone();
            assert_eq!(
                run.select_answer(option),
                AnswerOutcome::Recorded { correct: false }
            );
            assert_eq!(run.score(), 0);
            assert_eq!(run.advance(), AdvanceOutcome::Completed { perfect: false });
        }
        // The original engine is untouched by the cloned runs.
        assert_eq!(quiz.phase(), QuizPhase::Answering);
        quiz.select_answer(0);
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn completing_after_reset_can_fire_perfect_again() {
        let mut quiz = engine(&[0]);
        quiz.select_answer(0);
        assert_eq!(quiz.advance(), AdvanceOutcome::Completed { perfect: true });

        quiz.reset();
        quiz.select_answer(0);
        assert_eq!(quiz.advance(), AdvanceOutcome::Completed { perfect: true });
    }

    #[test]
    fn current_question_is_none_once_complete() {
        let mut quiz = engine(&[0]);
        assert!(quiz.current_question().is_some());
        quiz.select_answer(0);
        quiz.advance();
        assert_eq!(quiz.current_question(), None);
    }
}
