use thiserror::Error;

use crate::model::LessonIdError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    LessonId(#[from] LessonIdError),
}
