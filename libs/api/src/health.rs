use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is running", body = HealthResponse)
    )
)]
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "TechFlow Solutions API is running".to_string(),
        timestamp: Utc::now(),
    })
}

/// API welcome
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    )
)]
pub async fn get_welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to TechFlow Solutions API".to_string(),
        version: "1.0.0".to_string(),
    })
}
