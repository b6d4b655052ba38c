// Route exports
pub mod errors;
pub mod health;
pub mod swipes;

use actix_web::web;
use std::sync::Arc;

use crate::services::SwipeStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SwipeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SwipeStore>) -> Self {
        Self { store }
    }
}

/// Register extractor error handlers and every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::JsonConfig::default().error_handler(errors::handle_json_payload_error))
        .app_data(web::PathConfig::default().error_handler(errors::handle_path_error))
        .configure(health::configure)
        .configure(swipes::configure);
}
