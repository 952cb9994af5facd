mod ids;
mod lesson;
mod meta;

pub use ids::{LessonId, LessonIdError};
pub use lesson::{
    CodeChallenge, ContentDefect, LessonContent, LessonExample, LessonStep, QuizQuestion,
};
pub use meta::{Category, Difficulty, LessonMeta};
