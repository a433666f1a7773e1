// Route exports
pub mod errors;
pub mod teachers;

pub use errors::{handle_json_payload_error, json_config};
pub use teachers::AppState;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(teachers::configure);
}
