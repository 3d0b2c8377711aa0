use chrono::{DateTime, Utc};
use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct BlogPostResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub author_id: Option<i32>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BlogPostEntity> for BlogPostResponse {
    fn from(value: BlogPostEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            slug: value.slug,
            content: value.content,
            excerpt: value.excerpt,
            author_id: value.author_id,
            published: value.published,
            published_at: value.published_at,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
