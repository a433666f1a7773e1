use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::config::SearchSettings;
use crate::core::find_nearby;
use crate::models::{
    ErrorResponse, HealthResponse, NearbyRequest, NearbyResponse, SearchQuery, WelcomeResponse,
};
use crate::services::TeacherRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn TeacherRepository>,
    pub search: SearchSettings,
}

impl AppState {
    pub fn new(repository: Arc<dyn TeacherRepository>, search: SearchSettings) -> Self {
        Self { repository, search }
    }
}

/// Configure all teacher-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(welcome))
        .route("/health", web::get().to(health_check))
        .route("/teachers", web::get().to(list_teachers))
        .route("/teachers/nearby", web::post().to(find_nearby_teachers));
}

async fn welcome() -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse::default())
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        teachers: state.repository.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// List every teacher
///
/// GET /teachers
async fn list_teachers(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.repository.all())
}

/// Find teachers near a point
///
/// POST /teachers/nearby
///
/// Request body:
/// ```json
/// {
///   "latitude": 22.7196,
///   "longitude": 75.8577,
///   "radius_km": 5.0
/// }
/// ```
async fn find_nearby_teachers(
    state: web::Data<AppState>,
    req: web::Json<NearbyRequest>,
) -> impl Responder {
    let query = match SearchQuery::from_request(&req, state.search.default_radius_km) {
        Ok(query) => query,
        Err(e) => {
            tracing::info!("Validation failed for nearby request: {}", e);
            return HttpResponse::BadRequest()
                .json(ErrorResponse::bad_request("Validation failed", e.to_string()));
        }
    };

    let result = find_nearby(&query, state.repository.all());

    tracing::info!(
        "Found {} teachers within {} km of ({}, {}) (from {} records)",
        result.matches.len(),
        query.radius_km,
        query.latitude,
        query.longitude,
        result.total_scanned
    );

    HttpResponse::Ok().json(NearbyResponse::from(result.matches))
}
