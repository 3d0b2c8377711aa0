use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// Router backed by a throwaway database file; keep the tempdir alive
/// for the duration of the test.
pub async fn test_app() -> (TempDir, Router) {
    let dir = TempDir::new().expect("create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("api.db").display());
    let repository = repository::init_repository(&url)
        .await
        .expect("init repository");
    let router = api::serve(repository).await.expect("build router");
    (dir, router)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    app.clone().oneshot(request).await.expect("route request")
}

pub async fn json_body(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("parse json body")
}
