use chrono::{DateTime, Utc};
use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ContactSubmissionResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    pub service_interest: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactSubmissionEntity> for ContactSubmissionResponse {
    fn from(value: ContactSubmissionEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            company: value.company,
            message: value.message,
            service_interest: value.service_interest,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
