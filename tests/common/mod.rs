//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum_test::TestServer;
use greeting_server::config::{ServerSettings, Settings};
use greeting_server::presentation::http::routes;
use greeting_server::presentation::middleware::create_trace_layer;
use greeting_server::startup::Application;

/// In-process test server around the production router
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    /// Create a test application with the same layers as the real server
    pub fn new() -> Self {
        let router = routes::create_router().layer(create_trace_layer());

        Self {
            server: TestServer::new(router).expect("failed to create test server"),
        }
    }
}

/// Settings that bind the loopback interface on an ephemeral port
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        environment: "test".to_string(),
    }
}

/// Build and spawn a real server, returning its bound address
pub async fn spawn_app() -> std::net::SocketAddr {
    let application = Application::build(test_settings())
        .await
        .expect("failed to build application");
    let addr = application.local_addr().expect("no local address");

    tokio::spawn(application.run_until_stopped());

    addr
}
