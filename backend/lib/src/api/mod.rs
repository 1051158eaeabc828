//! API module for the Seufz backend

pub mod handlers;
pub mod routes;

use std::path::Path;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::Services;

/// Creates the axum application with all routes and middleware
///
/// Files under `static_dir` are served below `/sounds` and `/static`.
pub fn create_app(services: Services, static_dir: &Path) -> Router {
    let router = routes::routes(services, static_dir);

    // The JSON endpoints may be polled from other origins
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(false);

    router.layer(cors).layer(TraceLayer::new_for_http())
}
