#![forbid(unsafe_code)]

pub mod pack;
pub mod repository;

pub use pack::{LessonPack, PackError, builtin_pack, load_pack_from_path, load_pack_from_str};
pub use repository::{LessonRepository, LessonStore};
