use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
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

#[derive(Debug, Default, PartialEq, Clone)]
pub struct NewCaseStudy {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub client_name: Option<String>,
    pub industry: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub results: Option<String>,
    pub published: bool,
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct CaseStudyChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub client_name: Option<String>,
    pub industry: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub results: Option<String>,
    pub published: Option<bool>,
}
