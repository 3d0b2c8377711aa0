use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

mod common;

use common::{json_body, send, test_app};

#[tokio::test]
async fn health_reports_ok() {
    let (_dir, app) = test_app().await;

    let response = send(&app, "GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], json!("OK"));
    assert_eq!(body["message"], json!("TechFlow Solutions API is running"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn api_root_welcomes() {
    let (_dir, app) = test_app().await;

    let response = send(&app, "GET", "/api", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], json!("Welcome to TechFlow Solutions API"));
    assert_eq!(body["version"], json!("1.0.0"));
}

#[tokio::test]
async fn unknown_routes_fall_through_to_404() {
    let (_dir, app) = test_app().await;

    let response = send(&app, "GET", "/api/unknown", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn every_response_carries_hardening_headers() {
    let (_dir, app) = test_app().await;

    let response = send(&app, "GET", "/health", None).await;
    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "SAMEORIGIN");
    assert_eq!(headers["referrer-policy"], "no-referrer");
    assert!(headers.contains_key("strict-transport-security"));
}

#[tokio::test]
async fn cross_origin_requests_are_allowed_from_anywhere() {
    let (_dir, app) = test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::empty())
        .expect("build request");
    let response = app.clone().oneshot(request).await.expect("route request");

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
