use serde::Deserialize;
use utoipa::ToSchema;

/// Public submission payload. There is no `status` field here; new
/// submissions always start as "new".
#[derive(Deserialize, ToSchema)]
pub struct SubmitContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub service_interest: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateContactSubmissionRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub service_interest: Option<String>,
    pub status: Option<String>,
}
