use serde::{Deserialize, Serialize};
use crate::models::domain::NearbyTeacher;

pub const WELCOME_MESSAGE: &str = "Welcome to Tutor Finder API";
pub const NO_TEACHERS_MESSAGE: &str = "No teachers found in this area";

/// Response for the root endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
        }
    }
}

/// Response for the nearby search endpoint
///
/// An empty search is reported with an explicit message rather than a
/// zero count, so clients can tell the two shapes apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NearbyResponse {
    Found {
        count: usize,
        data: Vec<NearbyTeacher>,
    },
    NoMatches {
        message: String,
        data: Vec<NearbyTeacher>,
    },
}

impl From<Vec<NearbyTeacher>> for NearbyResponse {
    fn from(matches: Vec<NearbyTeacher>) -> Self {
        if matches.is_empty() {
            NearbyResponse::NoMatches {
                message: NO_TEACHERS_MESSAGE.to_string(),
                data: Vec::new(),
            }
        } else {
            NearbyResponse::Found {
                count: matches.len(),
                data: matches,
            }
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub teachers: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn bad_request(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code: 400,
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ErrorResponse {}
