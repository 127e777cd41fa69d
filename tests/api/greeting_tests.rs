//! Greeting API Tests
//!
//! `GET /hello` against the in-process router.

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::common::TestApp;

#[tokio::test]
async fn test_hello_without_name_greets_stranger() {
    let app = TestApp::new();

    let response = app.server.get("/hello").await;

    response.assert_status_ok();
    response.assert_text("Hello stranger!");
}

#[tokio::test]
async fn test_hello_with_name() {
    let app = TestApp::new();

    let response = app.server.get("/hello").add_query_param("name", "Adam").await;

    response.assert_status_ok();
    response.assert_text("Hello Adam!");
}

#[test_case("/hello", "Hello stranger!" ; "absent name")]
#[test_case("/hello?name=Adam", "Hello Adam!" ; "plain name")]
#[test_case("/hello?name=", "Hello !" ; "empty name")]
#[test_case("/hello?name", "Hello !" ; "bare name key")]
#[test_case("/hello?name=a&name=b", "Hello a,b!" ; "repeated name")]
#[test_case("/hello?name=Ada%20Lovelace", "Hello Ada Lovelace!" ; "percent encoded space")]
#[test_case("/hello?name=Ada+Lovelace", "Hello Ada Lovelace!" ; "plus encoded space")]
#[test_case("/hello?name=Zo%C3%AB", "Hello Zoë!" ; "utf8 name")]
#[test_case("/hello?other=1&name=Bob", "Hello Bob!" ; "extra parameters")]
#[tokio::test]
async fn test_hello_greeting(uri: &str, expected: &str) {
    let app = TestApp::new();

    let response = app.server.get(uri).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), expected);
}

#[tokio::test]
async fn test_hello_is_plain_text() {
    let app = TestApp::new();

    let response = app.server.get("/hello").await;

    assert_eq!(
        response.header(header::CONTENT_TYPE),
        "text/plain; charset=utf-8"
    );
}

#[tokio::test]
async fn test_hello_is_idempotent() {
    let app = TestApp::new();

    let first = app.server.get("/hello?name=Adam").await.text();
    let second = app.server.get("/hello?name=Adam").await.text();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_post_hello_is_method_not_allowed() {
    let app = TestApp::new();

    let response = app.server.post("/hello").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = TestApp::new();

    let response = app.server.get("/goodbye").await;

    response.assert_status_not_found();
}
