// Service exports
pub mod repository;

pub use repository::{InMemoryTeacherRepository, TeacherRepository, seed_teachers};
