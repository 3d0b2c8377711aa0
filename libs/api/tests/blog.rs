use axum::http::StatusCode;
use http_body_util::BodyExt;
use serde_json::json;

mod common;

use common::{json_body, send, test_app};

#[tokio::test]
async fn blog_post_lifecycle() {
    let (_dir, app) = test_app().await;

    let response = send(
        &app,
        "POST",
        "/api/blog",
        Some(json!({"title": "A", "slug": "a", "content": "B"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["published"], json!(false));
    assert_eq!(created["excerpt"], json!(null));
    let id = created["id"].as_i64().expect("numeric id");

    let response = send(&app, "GET", "/api/blog/a", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = json_body(response).await;
    assert_eq!(fetched["title"], json!("A"));
    assert_eq!(fetched["content"], json!("B"));

    let response = send(&app, "DELETE", &format!("/api/blog/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    assert!(bytes.is_empty());

    let response = send(&app, "GET", "/api/blog/a", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Blog post not found"})
    );
}

#[tokio::test]
async fn create_rejects_missing_required_fields() {
    let (_dir, app) = test_app().await;

    let response = send(&app, "POST", "/api/blog", Some(json!({"slug": "ghost"}))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"error": "title, slug, and content are required"})
    );

    // nothing was persisted
    let response = send(&app, "GET", "/api/blog/ghost", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rejects_empty_required_fields() {
    let (_dir, app) = test_app().await;

    let response = send(
        &app,
        "POST",
        "/api/blog",
        Some(json!({"title": "", "slug": "x", "content": "y"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_only_published_posts() {
    let (_dir, app) = test_app().await;

    send(
        &app,
        "POST",
        "/api/blog",
        Some(json!({"title": "Live", "slug": "live", "content": "x", "published": true})),
    )
    .await;
    send(
        &app,
        "POST",
        "/api/blog",
        Some(json!({"title": "Draft", "slug": "draft", "content": "x"})),
    )
    .await;

    let response = send(&app, "GET", "/api/blog", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let posts = json_body(response).await;
    let posts = posts.as_array().expect("array body");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["slug"], json!("live"));
}

#[tokio::test]
async fn duplicate_slug_maps_to_generic_500() {
    let (_dir, app) = test_app().await;

    let payload = json!({"title": "A", "slug": "dup", "content": "B"});
    send(&app, "POST", "/api/blog", Some(payload.clone())).await;

    let response = send(&app, "POST", "/api/blog", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Failed to create blog post"})
    );
}

#[tokio::test]
async fn update_overwrites_the_whole_record() {
    let (_dir, app) = test_app().await;

    let response = send(
        &app,
        "POST",
        "/api/blog",
        Some(json!({
            "title": "A",
            "slug": "a",
            "content": "B",
            "excerpt": "E",
            "published": true,
            "author_id": 7
        })),
    )
    .await;
    let id = json_body(response).await["id"].as_i64().expect("id");

    let response = send(
        &app,
        "PUT",
        &format!("/api/blog/{id}"),
        Some(json!({"title": "A2", "slug": "a", "content": "B2"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["title"], json!("A2"));
    assert_eq!(updated["content"], json!("B2"));
    assert_eq!(updated["excerpt"], json!(null));
    assert_eq!(updated["author_id"], json!(null));
    assert_eq!(updated["published"], json!(false));
}

#[tokio::test]
async fn update_missing_required_field_maps_to_500() {
    let (_dir, app) = test_app().await;

    let response = send(
        &app,
        "POST",
        "/api/blog",
        Some(json!({"title": "A", "slug": "a", "content": "B"})),
    )
    .await;
    let id = json_body(response).await["id"].as_i64().expect("id");

    let response = send(
        &app,
        "PUT",
        &format!("/api/blog/{id}"),
        Some(json!({"excerpt": "only this"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Failed to update blog post"})
    );
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let (_dir, app) = test_app().await;

    let response = send(
        &app,
        "PUT",
        "/api/blog/999999",
        Some(json!({"title": "A", "slug": "a", "content": "B"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Blog post not found"})
    );
}

#[tokio::test]
async fn update_non_numeric_id_is_500() {
    let (_dir, app) = test_app().await;

    let response = send(
        &app,
        "PUT",
        "/api/blog/not-a-number",
        Some(json!({"title": "A", "slug": "a", "content": "B"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Failed to update blog post"})
    );
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let (_dir, app) = test_app().await;

    let response = send(&app, "DELETE", "/api/blog/999999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Blog post not found"})
    );
}
