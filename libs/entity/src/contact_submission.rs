use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact-form submission. `status` is free-form; new submissions
/// always start as "new".
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
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

#[derive(Debug, Default, PartialEq, Clone)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    pub service_interest: Option<String>,
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct ContactSubmissionChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub service_interest: Option<String>,
    pub status: Option<String>,
}
