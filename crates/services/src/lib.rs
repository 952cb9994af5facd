#![forbid(unsafe_code)]

pub mod app_services;
pub mod challenge;
pub mod error;
pub mod lesson_service;
pub mod playground;
pub mod preview;
pub mod session;

pub use lesson_core::Clock;

pub use app_services::AppServices;
pub use challenge::ChallengeTracker;
pub use error::AppServicesError;
pub use lesson_service::LessonService;
pub use playground::PlaygroundBuffer;
pub use preview::{PreviewMode, PreviewPane};
pub use session::{LessonSession, LessonTab};
