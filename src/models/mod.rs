// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Teacher, SearchQuery, SearchError, NearbyTeacher};
pub use requests::NearbyRequest;
pub use responses::{WelcomeResponse, NearbyResponse, HealthResponse, ErrorResponse};
