use chrono::{DateTime, Utc};
use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct CaseStudyResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub client_name: Option<String>,
    pub industry: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub results: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CaseStudyEntity> for CaseStudyResponse {
    fn from(value: CaseStudyEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            slug: value.slug,
            description: value.description,
            client_name: value.client_name,
            industry: value.industry,
            technologies: value.technologies,
            results: value.results,
            published: value.published,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
