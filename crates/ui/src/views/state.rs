#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    UnknownLesson,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::UnknownLesson => "That lesson doesn't exist.",
        }
    }
}
