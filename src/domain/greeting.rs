//! Greeting computation.

/// Greeting used when the caller did not say who they are.
pub const STRANGER_GREETING: &str = "Hello stranger!";

/// Build the greeting for an optional visitor name.
///
/// A present name is used as-is, even when empty, so `Some("")` yields
/// `"Hello !"`. Only an absent name falls back to [`STRANGER_GREETING`].
pub fn greet(name: Option<&str>) -> String {
    match name {
        Some(visitor) => format!("Hello {visitor}!"),
        None => STRANGER_GREETING.to_string(),
    }
}
