use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_server::create_router;
use test_server::middleware::REQUEST_ID_HEADER;
use tower::ServiceExt;
use uuid::Uuid;

/// Send one request through a fresh router and return status, headers and body.
async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, header::HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}

#[tokio::test]
async fn root_returns_greeting_as_plain_text() {
    let (status, headers, body) = send(create_router(), Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Test server is running!");
    let content_type = headers.get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn health_returns_healthy_json() {
    let (status, headers, body) = send(create_router(), Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(body, br#"{"status":"healthy"}"#);

    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn responses_are_not_cacheable() {
    for path in ["/", "/health"] {
        let (_, headers, _) = send(create_router(), Method::GET, path).await;
        assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "no-store");
    }
}

#[tokio::test]
async fn query_string_does_not_change_response() {
    let (status, _, body) = send(create_router(), Method::GET, "/health?verbose=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, br#"{"status":"healthy"}"#);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    for path in ["/missing", "/health/", "/healthz", "/api/health"] {
        let (status, _, _) = send(create_router(), Method::GET, path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "path {path}");
    }
}

#[tokio::test]
async fn other_methods_on_known_paths_are_not_found() {
    for (method, path) in [
        (Method::POST, "/"),
        (Method::PUT, "/"),
        (Method::DELETE, "/health"),
        (Method::PATCH, "/health"),
    ] {
        let (status, _, _) = send(create_router(), method.clone(), path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {path}");
    }
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let (_, first, _) = send(create_router(), Method::GET, "/").await;
    let (_, second, _) = send(create_router(), Method::GET, "/health").await;

    let first = first.get(REQUEST_ID_HEADER).unwrap().to_str().unwrap().to_string();
    let second = second.get(REQUEST_ID_HEADER).unwrap().to_str().unwrap().to_string();
    assert!(Uuid::parse_str(&first).is_ok());
    assert!(Uuid::parse_str(&second).is_ok());
    assert_ne!(first, second);
}
