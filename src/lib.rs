//! # Greeting Server Library
//!
//! A single HTTP endpoint, `GET /hello`, that greets the visitor named in the
//! optional `name` query parameter or a stranger when none is given.
//!
//! ## Module Structure
//!
//! ```text
//! greeting_server/
//! +-- config/        Configuration management
//! +-- domain/        Greeting computation
//! +-- presentation/  HTTP routes, handlers and middleware
//! +-- shared/        Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - greeting logic
pub mod domain;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup
pub mod startup;

// Telemetry and observability
pub mod telemetry;
