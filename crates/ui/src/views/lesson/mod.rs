mod challenges;
mod examples;
mod learn;
mod quiz;
mod view;

pub use view::LessonView;
