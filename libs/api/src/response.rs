use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::ClientError(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::ServerError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, message: &str) -> ApiResponse<T>;
}

/// Failure detail goes to the log only; the caller gets the generic
/// per-action message.
impl<T> IntoApiResponse<T> for anyhow::Result<T> {
    fn into_response(self, message: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!("{:?}", e);
            ApiError::ServerError(message.to_string())
        })
    }
}
