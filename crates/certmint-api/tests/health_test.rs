mod helpers;

use axum::http::{HeaderName, HeaderValue};
use helpers::setup_test_app;
use serde_json::Value;

#[tokio::test]
async fn health_reports_memory_backend() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["collection_backend"], "memory");
}

#[tokio::test]
async fn liveness_is_ok() {
    let app = setup_test_app().await;
    app.client().get("/live").await.assert_status_ok();
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;

    response.assert_status_ok();
    let body: Value = response.json();
    for path in ["/", "/upload", "/collection/new", "/collection/{share_token}"] {
        assert!(body["paths"].get(path).is_some(), "missing {path}");
    }
}

#[tokio::test]
async fn request_id_is_echoed() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/live")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("req-123"),
        )
        .await;

    assert_eq!(response.header("x-request-id"), "req-123");
}

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let app = setup_test_app().await;

    let response = app.client().get("/live").await;

    let id = response.header("x-request-id");
    assert!(!id.is_empty());
}
