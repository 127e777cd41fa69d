//! Greeting Handler
//!
//! `GET /hello` with an optional `name` query parameter.

use axum::extract::Query;

use crate::domain::greeting::greet;

/// Query parameter naming the visitor
pub const NAME_PARAM: &str = "name";

/// Collect every `name` value from the query string.
///
/// Repeated keys are joined with `","` (`?name=a&name=b` is `"a,b"`). Returns
/// `None` only when no `name` key is present at all.
pub fn visitor_name(pairs: &[(String, String)]) -> Option<String> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == NAME_PARAM)
        .map(|(_, value)| value.as_str())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

/// Greet the visitor named in the query, or a stranger
pub async fn hello(Query(pairs): Query<Vec<(String, String)>>) -> String {
    greet(visitor_name(&pairs).as_deref())
}
