mod home;
mod lesson;
mod lessons;
mod playground;
pub mod scripts;
mod state;
mod widgets;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use lesson::LessonView;
pub use lessons::LessonsView;
pub use playground::PlaygroundView;
pub use state::ViewError;
