use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::core::distance::round_to_places;
use crate::models::NearbyRequest;

/// Tutor record with subject and location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: u32,
    pub name: String,
    pub subject: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

impl Teacher {
    pub fn new(id: u32, name: &str, subject: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            subject: subject.to_string(),
            latitude,
            longitude,
            is_available: true,
        }
    }
}

fn default_true() -> bool { true }

/// Validated search parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

/// Errors raised while turning boundary input into a `SearchQuery`
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl SearchQuery {
    pub fn new(latitude: f64, longitude: f64, radius_km: f64) -> Self {
        Self { latitude, longitude, radius_km }
    }

    /// Build a query from a request body, falling back to `default_radius_km`
    /// when the caller did not supply a radius
    ///
    /// Coordinates and radius are taken as given: a point outside the usual
    /// lat/lon ranges or a negative radius is searched like any other and
    /// simply finds no teachers.
    pub fn from_request(request: &NearbyRequest, default_radius_km: f64) -> Result<Self, SearchError> {
        request.validate()?;

        Ok(Self::new(
            request.latitude,
            request.longitude,
            request.radius_km.unwrap_or(default_radius_km),
        ))
    }
}

/// Teacher record annotated with its distance from the query point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyTeacher {
    #[serde(flatten)]
    pub teacher: Teacher,
    pub distance_km: f64,
}

impl NearbyTeacher {
    /// Pair a copy of the record with its distance, rounded to 2 decimal places
    pub fn new(teacher: &Teacher, distance_km: f64) -> Self {
        Self {
            teacher: teacher.clone(),
            distance_km: round_to_places(distance_km, 2),
        }
    }
}
