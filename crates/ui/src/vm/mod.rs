mod lesson_vm;
mod markdown;

pub use lesson_vm::{
    ChallengeVm, ExampleVm, LessonCardVm, LessonVm, OptionState, QuizOptionVm, QuizQuestionVm,
    QuizResultVm, QuizVm, StepVm, TabVm, map_lesson, map_lesson_card, option_letter,
};
pub use markdown::{markdown_to_html, sanitize_html};
