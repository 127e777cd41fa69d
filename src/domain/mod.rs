//! Domain Layer
//!
//! Framework-independent greeting logic.

pub mod greeting;
