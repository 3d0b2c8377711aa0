use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post as stored. `slug` is the public lookup key.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct BlogPost {
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

/// Fields accepted when authoring a post. `published_at` is only ever
/// set by the seed utility, never by the HTTP surface.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub author_id: Option<i32>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Whole-record overwrite payload: every mutable column is written from
/// these values, absent ones as NULL or the column default.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct BlogPostChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author_id: Option<i32>,
    pub published: Option<bool>,
}
