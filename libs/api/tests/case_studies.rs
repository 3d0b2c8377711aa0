use axum::http::StatusCode;
use serde_json::json;

mod common;

use common::{json_body, send, test_app};

#[tokio::test]
async fn fresh_start_lists_an_empty_array() {
    let (_dir, app) = test_app().await;

    let response = send(&app, "GET", "/api/case-studies", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn case_study_lifecycle() {
    let (_dir, app) = test_app().await;

    let response = send(
        &app,
        "POST",
        "/api/case-studies",
        Some(json!({
            "title": "Fintech Cloud Migration",
            "slug": "fintech-cloud-migration",
            "description": "Migrated a fintech client to AWS.",
            "client_name": "FinBank Ltd.",
            "industry": "Fintech",
            "technologies": ["AWS", "Terraform", "Docker"],
            "results": "Reduced costs by 30%.",
            "published": true
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["technologies"], json!(["AWS", "Terraform", "Docker"]));
    let id = created["id"].as_i64().expect("numeric id");

    let response = send(&app, "GET", "/api/case-studies/fintech-cloud-migration", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = json_body(response).await;
    assert_eq!(fetched["client_name"], json!("FinBank Ltd."));

    let response = send(
        &app,
        "PUT",
        &format!("/api/case-studies/{id}"),
        Some(json!({
            "title": "Fintech Cloud Migration",
            "slug": "fintech-cloud-migration",
            "description": "Updated description."
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["description"], json!("Updated description."));
    assert_eq!(updated["client_name"], json!(null));
    assert_eq!(updated["technologies"], json!(null));
    assert_eq!(updated["published"], json!(false));

    let response = send(&app, "DELETE", &format!("/api/case-studies/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, "GET", "/api/case-studies/fintech-cloud-migration", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Case study not found"})
    );
}

#[tokio::test]
async fn create_requires_title_slug_and_description() {
    let (_dir, app) = test_app().await;

    let response = send(
        &app,
        "POST",
        "/api/case-studies",
        Some(json!({"title": "No description", "slug": "no-description"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"error": "title, slug, and description are required"})
    );
}

#[tokio::test]
async fn list_returns_only_published_case_studies() {
    let (_dir, app) = test_app().await;

    send(
        &app,
        "POST",
        "/api/case-studies",
        Some(json!({
            "title": "Live",
            "slug": "live",
            "description": "d",
            "published": true
        })),
    )
    .await;
    send(
        &app,
        "POST",
        "/api/case-studies",
        Some(json!({"title": "Draft", "slug": "draft", "description": "d"})),
    )
    .await;

    let response = send(&app, "GET", "/api/case-studies", None).await;
    let studies = json_body(response).await;
    let studies = studies.as_array().expect("array body");
    assert_eq!(studies.len(), 1);
    assert_eq!(studies[0]["slug"], json!("live"));
}
