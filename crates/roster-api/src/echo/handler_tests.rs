use super::*;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use tower::ServiceExt;

use crate::echo::create_echo_router;

async fn call(uri: &str, body: &'static str) -> (StatusCode, String, String) {
    let response = create_echo_router()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[test]
fn test_keyword_from_query() {
    assert_eq!(keyword_of(Some("keyword=hello"), b""), Some("hello".to_string()));
    assert_eq!(
        keyword_of(Some("a=1&keyword=hello%20world"), b""),
        Some("hello world".to_string())
    );
}

#[test]
fn test_query_takes_precedence_over_body() {
    let keyword = keyword_of(Some("keyword=q"), br#"{"keyword":"b"}"#);
    assert_eq!(keyword.as_deref(), Some("q"));
}

#[test]
fn test_empty_query_falls_back_to_body() {
    let keyword = keyword_of(Some("keyword="), br#"{"keyword":"b"}"#);
    assert_eq!(keyword.as_deref(), Some("b"));
}

#[test]
fn test_body_values() {
    assert_eq!(keyword_of(None, br#"{"keyword":42}"#).as_deref(), Some("42"));
    assert_eq!(keyword_of(None, br#"{"keyword":true}"#).as_deref(), Some("true"));
    assert_eq!(keyword_of(None, br#"{"keyword":0}"#), None);
    assert_eq!(keyword_of(None, br#"{"keyword":""}"#), None);
    assert_eq!(keyword_of(None, br#"{"keyword":null}"#), None);
    assert_eq!(keyword_of(None, b"not json"), None);
    assert_eq!(keyword_of(None, b""), None);
}

#[tokio::test]
async fn test_echo_route() {
    let (status, content_type, body) = call("/say?keyword=hi", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body, "Sania says 'hi' :D");
}

#[tokio::test]
async fn test_echo_root_route_with_body() {
    let (status, _, body) = call("/", r#"{"keyword":"from body"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Sania says 'from body' :D");
}

#[tokio::test]
async fn test_echo_missing_keyword() {
    let (status, content_type, body) = call("/say", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body, MISSING_KEYWORD);

    let (status, _, _) = call("/say?keyword=", r#"{"keyword":""}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
