use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateCaseStudyRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub client_name: Option<String>,
    pub industry: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub results: Option<String>,
    pub published: Option<bool>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateCaseStudyRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub client_name: Option<String>,
    pub industry: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub results: Option<String>,
    pub published: Option<bool>,
}
