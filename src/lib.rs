//! Tutor Finder - location search service for a student-teacher marketplace
//!
//! Stores a fixed collection of tutor records and answers "which tutors lie
//! within R km of this point" queries using the haversine great-circle
//! distance.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{find_nearby, haversine_distance, NearbyResult};
pub use models::{Teacher, SearchQuery, SearchError, NearbyTeacher, NearbyRequest, NearbyResponse};
pub use services::{InMemoryTeacherRepository, TeacherRepository};
