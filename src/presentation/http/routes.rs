//! Route Configuration
//!
//! Configures the HTTP routes served by the application.

use axum::{routing::get, Router};

use super::handlers;

/// Create the main router
pub fn create_router() -> Router {
    Router::new().route("/hello", get(handlers::greeting::hello))
}
