//! Seufz Backend Library
//!
//! Two durable counters behind a small web page. The core is
//! [`data::Counter`]; everything else wires it to HTTP.

pub mod api;
pub mod assets;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod log;
pub mod models;
pub mod services;

pub use api::create_app;
pub use config::Config;
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;

    use axum::http::StatusCode;
    use axum_test::TestServer;

    use super::*;

    /// Creates a test application with in-memory counters
    fn create_test_app() -> axum::Router {
        let services = services::Services::in_memory(Duration::from_secs(3));

        api::create_app(services, Path::new("static"))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let json: serde_json::Value = response.json();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "seufz-backend");
    }

    #[tokio::test]
    async fn test_index_page() {
        let server = TestServer::new(create_test_app()).unwrap();

        let response = server.get("/").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(response.text().contains("Jönis Counter"));
    }
}
