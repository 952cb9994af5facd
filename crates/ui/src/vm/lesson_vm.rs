use lesson_core::model::LessonMeta;
use lesson_core::quiz::QuizPhase;
use services::preview::PreviewMode;
use services::session::{LessonSession, LessonTab};

use super::markdown::markdown_to_html;

//
// ─── GRID CARD ─────────────────────────────────────────────────────────────────
//

/// Display snapshot for one card on the lessons grid.
#[derive(Clone, Debug, PartialEq)]
pub struct LessonCardVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: lesson_core::model::Category,
    pub category_label: String,
    pub difficulty_label: String,
    pub duration_label: String,
}

#[must_use]
pub fn map_lesson_card(meta: &LessonMeta) -> LessonCardVm {
    LessonCardVm {
        id: meta.id.to_string(),
        title: meta.title.clone(),
        description: meta.description.clone(),
        category: meta.category,
        category_label: meta.category.label().to_string(),
        difficulty_label: meta.difficulty.label().to_string(),
        duration_label: format!("{} min", meta.duration_minutes),
    }
}

//
// ─── LESSON DETAIL ─────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq)]
pub struct TabVm {
    pub tab: LessonTab,
    pub label: &'static str,
    /// Shown on the Challenges tab once at least one challenge is done.
    pub badge: Option<String>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepVm {
    pub index: usize,
    pub title: String,
    pub explanation_html: String,
    pub code: Option<String>,
    pub expanded: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExampleVm {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub code: String,
    /// The markup face currently selected (before or after).
    pub markup: String,
    pub mode: PreviewMode,
    pub has_before: bool,
    pub show_before: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChallengeVm {
    pub index: usize,
    pub heading: String,
    pub description: String,
    pub hints: Vec<String>,
    pub solution: String,
    pub completed: bool,
    pub solution_open: bool,
    pub editor_code: String,
    pub editor_dirty: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Neutral,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizOptionVm {
    pub index: usize,
    pub letter: String,
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizQuestionVm {
    pub counter: String,
    pub progress_percent: u32,
    pub question: String,
    pub options: Vec<QuizOptionVm>,
    pub revealed: bool,
    pub answered_correctly: bool,
    pub feedback: &'static str,
    pub explanation: String,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizResultVm {
    pub score: usize,
    pub total: usize,
    pub heading: &'static str,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuizVm {
    Question(QuizQuestionVm),
    Result(QuizResultVm),
}

/// Everything the lesson detail view renders, as owned data.
#[derive(Clone, Debug, PartialEq)]
pub struct LessonVm {
    pub title: String,
    /// Wall-clock time (UTC) the session was opened, for the header.
    pub started_label: String,
    pub introduction_html: String,
    pub objectives: Vec<String>,
    pub key_takeaways: Vec<String>,
    pub active_tab: LessonTab,
    pub tabs: Vec<TabVm>,
    pub steps: Vec<StepVm>,
    pub examples: Vec<ExampleVm>,
    pub challenges: Vec<ChallengeVm>,
    pub quiz: QuizVm,
}

/// Option labels A, B, C... past Z falls back to the 1-based number.
#[must_use]
pub fn option_letter(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + u8::try_from(index).unwrap_or(0)).to_string()
    } else {
        (index + 1).to_string()
    }
}

#[must_use]
pub fn map_lesson(session: &LessonSession) -> LessonVm {
    let content = session.content();

    let tabs = LessonTab::ALL
        .iter()
        .map(|&tab| TabVm {
            tab,
            label: tab.label(),
            badge: match tab {
                LessonTab::Challenges if session.challenges().completed_count() > 0 => Some(
                    format!(
                        "{}/{}",
                        session.challenges().completed_count(),
                        session.challenges().total()
                    ),
                ),
                _ => None,
            },
            active: session.active_tab() == tab,
        })
        .collect();

    let steps = content
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| StepVm {
            index,
            title: step.title.clone(),
            explanation_html: markdown_to_html(&step.explanation),
            code: step.code.clone(),
            expanded: session.is_step_expanded(index),
        })
        .collect();

    let examples = content
        .examples
        .iter()
        .enumerate()
        .map(|(index, example)| {
            let pane = session.preview(index);
            let show_before = pane.is_some_and(|pane| pane.show_before());
            let markup = if show_before {
                example
                    .before_preview_markup
                    .clone()
                    .unwrap_or_else(|| example.preview_markup.clone())
            } else {
                example.preview_markup.clone()
            };
            ExampleVm {
                index,
                title: example.title.clone(),
                description: example.description.clone(),
                code: example.code.clone(),
                markup,
                mode: pane.map_or(PreviewMode::Preview, |pane| pane.mode()),
                has_before: example.before_preview_markup.is_some(),
                show_before,
            }
        })
        .collect();

    let challenges = content
        .challenges
        .iter()
        .enumerate()
        .map(|(index, challenge)| ChallengeVm {
            index,
            heading: format!("Challenge {}: {}", index + 1, challenge.title),
            description: challenge.description.clone(),
            hints: challenge.hints.clone(),
            solution: challenge.solution.clone(),
            completed: session.challenges().is_completed(index),
            solution_open: session.challenges().is_solution_open(index),
            editor_code: session
                .editor(index)
                .map_or_else(|| challenge.starter_code.clone(), |e| e.code().to_string()),
            editor_dirty: session.editor(index).is_some_and(|e| e.is_dirty()),
        })
        .collect();

    LessonVm {
        title: content.title.clone(),
        started_label: session.started_at().format("%H:%M").to_string(),
        introduction_html: markdown_to_html(&content.introduction),
        objectives: content.learning_objectives.clone(),
        key_takeaways: content.key_takeaways.clone(),
        active_tab: session.active_tab(),
        tabs,
        steps,
        examples,
        challenges,
        quiz: map_quiz(session),
    }
}

fn map_quiz(session: &LessonSession) -> QuizVm {
    let quiz = session.quiz();
    let total = quiz.total();

    match quiz.phase() {
        QuizPhase::Complete => {
            let score = quiz.score();
            let heading = if total > 0 && score == total {
                "Perfect Score! 🎉"
            } else if total > 0 && score * 2 >= total {
                "Great Job! 👏"
            } else {
                "Keep Learning! 💪"
            };
            QuizVm::Result(QuizResultVm {
                score,
                total,
                heading,
                summary: format!("You got {score} out of {total} questions correct"),
            })
        }
        QuizPhase::Answering | QuizPhase::Revealed => {
            let index = quiz.current_index();
            let revealed = quiz.is_revealed();
            let selected = quiz.selected_answer();
            let Some(question) = quiz.current_question() else {
                // Unreachable with a consistent engine; degrade to results.
                return QuizVm::Result(QuizResultVm {
                    score: quiz.score(),
                    total,
                    heading: "Keep Learning! 💪",
                    summary: format!("You got {} out of {total} questions correct", quiz.score()),
                });
            };

            let answered_correctly = question.is_answerable()
                && revealed
                && selected == Some(question.correct_index);
            let options = question
                .options
                .iter()
                .enumerate()
                .map(|(option_index, text)| {
                    let state = if !revealed {
                        OptionState::Neutral
                    } else if question.is_answerable() && option_index == question.correct_index {
                        OptionState::Correct
                    } else if selected == Some(option_index) {
                        OptionState::Incorrect
                    } else {
                        OptionState::Neutral
                    };
                    QuizOptionVm {
                        index: option_index,
                        letter: option_letter(option_index),
                        text: text.clone(),
                        state,
                    }
                })
                .collect();

            let answered = index + usize::from(revealed);
            QuizQuestionVm {
                counter: format!("{} / {total}", index + 1),
                progress_percent: u32::try_from(answered * 100 / total.max(1)).unwrap_or(100),
                question: question.question.clone(),
                options,
                revealed,
                answered_correctly,
                feedback: if answered_correctly {
                    "🎉 Correct!"
                } else {
                    "Not quite right"
                },
                explanation: question.explanation.clone(),
                next_label: if index + 1 < total {
                    "Next Question"
                } else {
                    "See Results"
                },
            }
            .into()
        }
    }
}

impl From<QuizQuestionVm> for QuizVm {
    fn from(vm: QuizQuestionVm) -> Self {
        Self::Question(vm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use lesson_core::model::{
        Category, CodeChallenge, Difficulty, LessonContent, LessonExample, LessonId, LessonStep,
        QuizQuestion,
    };
    use lesson_core::time::fixed_now;

    fn session() -> LessonSession {
        let content = Arc::new(LessonContent {
            title: "Spacing & Sizing".to_string(),
            introduction: "The spacing scale uses `0.25rem` units.".to_string(),
            learning_objectives: vec!["Master the spacing scale".to_string()],
            steps: vec![LessonStep {
                title: "The Spacing Scale".to_string(),
                explanation: "Each unit equals `0.25rem`.".to_string(),
                code: Some("p-4".to_string()),
            }],
            examples: vec![LessonExample {
                title: "Directional Padding".to_string(),
                description: "Per-side padding.".to_string(),
                code: "<div class=\"pt-8\"></div>".to_string(),
                preview_markup: "<div class=\"pt-8\">after</div>".to_string(),
                before_preview_markup: Some("<div>before</div>".to_string()),
            }],
            challenges: vec![CodeChallenge {
                title: "Create a Centered Card".to_string(),
                description: "320px wide, centered.".to_string(),
                starter_code: "<div class=\"\"></div>".to_string(),
                solution: "<div class=\"w-80 mx-auto\"></div>".to_string(),
                hints: vec!["w-80 gives 320px".to_string()],
            }],
            quiz: vec![
                QuizQuestion {
                    question: "Base unit?".to_string(),
                    options: vec!["1px".to_string(), "0.25rem".to_string()],
                    correct_index: 1,
                    explanation: "0.25rem is 4px.".to_string(),
                },
                QuizQuestion {
                    question: "Horizontal padding?".to_string(),
                    options: vec!["px-8".to_string(), "ph-8".to_string()],
                    correct_index: 0,
                    explanation: "px-* is horizontal.".to_string(),
                },
            ],
            key_takeaways: vec!["p- for padding".to_string()],
        });
        LessonSession::new(LessonId::new("spacing").unwrap(), content, fixed_now())
    }

    #[test]
    fn option_letters_follow_the_alphabet() {
        assert_eq!(option_letter(0), "A");
        assert_eq!(option_letter(3), "D");
        assert_eq!(option_letter(26), "27");
    }

    #[test]
    fn card_maps_meta_labels() {
        let meta = LessonMeta {
            id: LessonId::new("spacing").unwrap(),
            title: "Spacing & Sizing".to_string(),
            description: "Master spacing.".to_string(),
            category: Category::Basics,
            difficulty: Difficulty::Beginner,
            duration_minutes: 15,
        };
        let card = map_lesson_card(&meta);
        assert_eq!(card.id, "spacing");
        assert_eq!(card.category_label, "Basics");
        assert_eq!(card.difficulty_label, "Beginner");
        assert_eq!(card.duration_label, "15 min");
    }

    #[test]
    fn started_label_uses_the_session_clock() {
        let vm = map_lesson(&session());
        // fixed_now() is 2023-11-14T22:13:20Z.
        assert_eq!(vm.started_label, "22:13");
    }

    #[test]
    fn fresh_session_maps_first_question() {
        let vm = map_lesson(&session());
        assert_eq!(vm.active_tab, LessonTab::Learn);
        assert!(vm.steps[0].expanded);
        assert!(vm.steps[0].explanation_html.contains("<code>0.25rem</code>"));

        let QuizVm::Question(question) = vm.quiz else {
            panic!("expected a question");
        };
        assert_eq!(question.counter, "1 / 2");
        assert_eq!(question.progress_percent, 0);
        assert!(!question.revealed);
        assert_eq!(question.options[0].letter, "A");
        assert_eq!(question.options[1].state, OptionState::Neutral);
    }

    #[test]
    fn revealed_question_marks_correct_and_incorrect_options() {
        let mut session = session();
        session.quiz_mut().select_answer(0);
        let vm = map_lesson(&session);

        let QuizVm::Question(question) = vm.quiz else {
            panic!("expected a question");
        };
        assert!(question.revealed);
        assert!(!question.answered_correctly);
        assert_eq!(question.feedback, "Not quite right");
        assert_eq!(question.options[0].state, OptionState::Incorrect);
        assert_eq!(question.options[1].state, OptionState::Correct);
        assert_eq!(question.progress_percent, 50);
        assert_eq!(question.next_label, "Next Question");
    }

    #[test]
    fn last_revealed_question_offers_results() {
        let mut session = session();
        session.quiz_mut().select_answer(1);
        session.quiz_mut().advance();
        session.quiz_mut().select_answer(0);
        let vm = map_lesson(&session);

        let QuizVm::Question(question) = vm.quiz else {
            panic!("expected a question");
        };
        assert_eq!(question.counter, "2 / 2");
        assert_eq!(question.next_label, "See Results");
        assert_eq!(question.progress_percent, 100);
    }

    #[test]
    fn result_headings_follow_score_bands() {
        let mut session = session();
        session.quiz_mut().select_answer(1);
        session.quiz_mut().advance();
        session.quiz_mut().select_answer(0);
        session.quiz_mut().advance();
        let vm = map_lesson(&session);

        let QuizVm::Result(result) = vm.quiz else {
            panic!("expected results");
        };
        assert_eq!(result.score, 2);
        assert_eq!(result.heading, "Perfect Score! 🎉");
        assert_eq!(result.summary, "You got 2 out of 2 questions correct");
    }

    #[test]
    fn half_score_is_great_job_not_perfect() {
        let mut session = session();
        session.quiz_mut().select_answer(1);
        session.quiz_mut().advance();
        session.quiz_mut().select_answer(1);
        session.quiz_mut().advance();
        let vm = map_lesson(&session);

        let QuizVm::Result(result) = vm.quiz else {
            panic!("expected results");
        };
        assert_eq!(result.score, 1);
        assert_eq!(result.heading, "Great Job! 👏");
    }

    #[test]
    fn before_toggle_switches_the_mapped_markup() {
        let mut session = session();
        assert_eq!(map_lesson(&session).examples[0].markup, "<div class=\"pt-8\">after</div>");

        if let Some(pane) = session.preview_mut(0) {
            pane.toggle_before_after();
        }
        let vm = map_lesson(&session);
        assert!(vm.examples[0].show_before);
        assert_eq!(vm.examples[0].markup, "<div>before</div>");
    }

    #[test]
    fn challenge_badge_appears_after_first_completion() {
        let mut session = session();
        let no_badge = map_lesson(&session)
            .tabs
            .into_iter()
            .find(|tab| tab.tab == LessonTab::Challenges)
            .unwrap();
        assert_eq!(no_badge.badge, None);

        session.challenges_mut().mark_completed(0);
        let badge = map_lesson(&session)
            .tabs
            .into_iter()
            .find(|tab| tab.tab == LessonTab::Challenges)
            .unwrap();
        assert_eq!(badge.badge.as_deref(), Some("1/1"));
    }

    #[test]
    fn challenge_headings_are_numbered() {
        let vm = map_lesson(&session());
        assert_eq!(vm.challenges[0].heading, "Challenge 1: Create a Centered Card");
        assert!(!vm.challenges[0].solution_open);
        assert!(!vm.challenges[0].editor_dirty);
    }
}
