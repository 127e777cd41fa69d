//! # Greeting Server
//!
//! A tiny HTTP service answering `GET /hello`.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - HTTP server

use anyhow::{Context, Result};
use tracing::info;

use greeting_server::config::Settings;
use greeting_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    greeting_server::telemetry::init_tracing();

    info!("Starting Greeting Server...");

    let settings = Settings::load().context("failed to load configuration")?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
