//! Route definitions for the Seufz API

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use super::handlers;
use crate::services::Services;

/// Creates the router with all routes
pub fn routes(services: Services, static_dir: &Path) -> Router {
    Router::new()
        // Counter page and the form actions posted from it
        .route("/", get(handlers::index))
        .route("/seufz_increment", post(handlers::seufz_increment))
        .route("/seufz_decrement", post(handlers::seufz_decrement))
        .route("/stoehn_increment", post(handlers::stoehn_increment))
        .route("/stoehn_decrement", post(handlers::stoehn_decrement))

        // Health check endpoint
        .route("/health", get(handlers::health_check))

        // Counter endpoints
        .route("/counter", get(handlers::counters::get_counters))
        .route("/counter/{name}", get(handlers::counters::get_counter))
        .route("/counter/{name}/inc", post(handlers::counters::increment_counter))
        .route("/counter/{name}/dec", post(handlers::counters::decrement_counter))

        // Sound files and other assets
        .nest_service("/sounds", ServeDir::new(static_dir))
        .nest_service("/static", ServeDir::new(static_dir))

        // Add state to all routes
        .with_state(services)
}
