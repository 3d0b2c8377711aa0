use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use entity::prelude::*;
use repository::Repository;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::util::parse_id;
use crate::ApiError;

use self::request::{SubmitContactRequest, UpdateContactSubmissionRequest};
use self::response::ContactSubmissionResponse;

/// Submit the public contact form. Status always starts as "new";
/// any caller-supplied status is ignored.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = SubmitContactRequest,
    responses(
        (status = 201, description = "Recorded submission", body = ContactSubmissionResponse),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn submit_contact_form(
    State(repo): State<Repository>,
    Json(body): Json<SubmitContactRequest>,
) -> ApiResponse<(StatusCode, Json<ContactSubmissionResponse>)> {
    let name = body.name.filter(|v| !v.is_empty());
    let email = body.email.filter(|v| !v.is_empty());
    let message = body.message.filter(|v| !v.is_empty());

    let (Some(name), Some(email), Some(message)) = (name, email, message) else {
        return Err(ApiError::ClientError(
            "name, email, and message are required".to_string(),
        ));
    };

    let submission = repo
        .contact_submission
        .create(NewContactSubmission {
            name,
            email,
            company: body.company,
            message,
            service_interest: body.service_interest,
        })
        .await
        .into_response("Failed to submit contact form")?;

    Ok((StatusCode::CREATED, Json(submission.into())))
}

/// List every contact submission, newest first
#[utoipa::path(
    get,
    path = "/api/contact",
    responses(
        (status = 200, description = "All submissions", body = [ContactSubmissionResponse])
    )
)]
pub async fn get_contact_submissions(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<ContactSubmissionResponse>>> {
    let submissions = repo
        .contact_submission
        .find_all()
        .await
        .into_response("Failed to fetch contact submissions")?;

    Ok(Json(
        submissions
            .into_iter()
            .map(ContactSubmissionResponse::from)
            .collect(),
    ))
}

/// Update a contact submission by id, overwriting every mutable field
#[utoipa::path(
    put,
    path = "/api/contact/:id",
    request_body = UpdateContactSubmissionRequest,
    responses(
        (status = 200, description = "Updated submission", body = ContactSubmissionResponse),
        (status = 404, description = "No submission with this id")
    ),
    params(
        ("id", description = "contact submission id"),
    )
)]
pub async fn update_contact_submission(
    State(repo): State<Repository>,
    Path(id): Path<String>,
    Json(body): Json<UpdateContactSubmissionRequest>,
) -> ApiResponse<Json<ContactSubmissionResponse>> {
    let id = parse_id(&id).into_response("Failed to update contact submission")?;

    let existing = repo
        .contact_submission
        .find_by_id(id)
        .await
        .into_response("Failed to update contact submission")?;
    if existing.is_none() {
        return Err(ApiError::NotFound(
            "Contact submission not found".to_string(),
        ));
    }

    let updated = repo
        .contact_submission
        .update(
            id,
            ContactSubmissionChanges {
                name: body.name,
                email: body.email,
                company: body.company,
                message: body.message,
                service_interest: body.service_interest,
                status: body.status,
            },
        )
        .await
        .into_response("Failed to update contact submission")?;

    let Some(updated) = updated else {
        return Err(ApiError::ServerError(
            "Failed to update contact submission".to_string(),
        ));
    };

    Ok(Json(updated.into()))
}
