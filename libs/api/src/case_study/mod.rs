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

use self::request::{CreateCaseStudyRequest, UpdateCaseStudyRequest};
use self::response::CaseStudyResponse;

/// List all published case studies
#[utoipa::path(
    get,
    path = "/api/case-studies",
    responses(
        (status = 200, description = "Published case studies, newest first", body = [CaseStudyResponse])
    )
)]
pub async fn get_case_studies(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<CaseStudyResponse>>> {
    let studies = repo
        .case_study
        .find_published()
        .await
        .into_response("Failed to fetch case studies")?;

    Ok(Json(
        studies.into_iter().map(CaseStudyResponse::from).collect(),
    ))
}

/// Create a case study
#[utoipa::path(
    post,
    path = "/api/case-studies",
    request_body = CreateCaseStudyRequest,
    responses(
        (status = 201, description = "Created case study", body = CaseStudyResponse),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn create_case_study(
    State(repo): State<Repository>,
    Json(body): Json<CreateCaseStudyRequest>,
) -> ApiResponse<(StatusCode, Json<CaseStudyResponse>)> {
    let title = body.title.filter(|v| !v.is_empty());
    let slug = body.slug.filter(|v| !v.is_empty());
    let description = body.description.filter(|v| !v.is_empty());

    let (Some(title), Some(slug), Some(description)) = (title, slug, description) else {
        return Err(ApiError::ClientError(
            "title, slug, and description are required".to_string(),
        ));
    };

    let study = repo
        .case_study
        .create(NewCaseStudy {
            title,
            slug,
            description,
            client_name: body.client_name,
            industry: body.industry,
            technologies: body.technologies,
            results: body.results,
            published: body.published.unwrap_or(false),
        })
        .await
        .into_response("Failed to create case study")?;

    Ok((StatusCode::CREATED, Json(study.into())))
}

/// Get a case study by slug
#[utoipa::path(
    get,
    path = "/api/case-studies/:slug",
    responses(
        (status = 200, description = "The case study", body = CaseStudyResponse),
        (status = 404, description = "No case study with this slug")
    ),
    params(
        ("slug", description = "case study slug"),
    )
)]
pub async fn get_case_study(
    State(repo): State<Repository>,
    Path(slug): Path<String>,
) -> ApiResponse<Json<CaseStudyResponse>> {
    let study = repo
        .case_study
        .find_by_slug(&slug)
        .await
        .into_response("Failed to fetch case study")?;

    let Some(study) = study else {
        return Err(ApiError::NotFound("Case study not found".to_string()));
    };

    Ok(Json(study.into()))
}

/// Update a case study by id, overwriting every mutable field
#[utoipa::path(
    put,
    path = "/api/case-studies/:id",
    request_body = UpdateCaseStudyRequest,
    responses(
        (status = 200, description = "Updated case study", body = CaseStudyResponse),
        (status = 404, description = "No case study with this id")
    ),
    params(
        ("id", description = "case study id"),
    )
)]
pub async fn update_case_study(
    State(repo): State<Repository>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCaseStudyRequest>,
) -> ApiResponse<Json<CaseStudyResponse>> {
    let id = parse_id(&id).into_response("Failed to update case study")?;

    let existing = repo
        .case_study
        .find_by_id(id)
        .await
        .into_response("Failed to update case study")?;
    if existing.is_none() {
        return Err(ApiError::NotFound("Case study not found".to_string()));
    }

    let updated = repo
        .case_study
        .update(
            id,
            CaseStudyChanges {
                title: body.title,
                slug: body.slug,
                description: body.description,
                client_name: body.client_name,
                industry: body.industry,
                technologies: body.technologies,
                results: body.results,
                published: body.published,
            },
        )
        .await
        .into_response("Failed to update case study")?;

    let Some(updated) = updated else {
        return Err(ApiError::ServerError(
            "Failed to update case study".to_string(),
        ));
    };

    Ok(Json(updated.into()))
}

/// Delete a case study by id
#[utoipa::path(
    delete,
    path = "/api/case-studies/:id",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No case study with this id")
    ),
    params(
        ("id", description = "case study id"),
    )
)]
pub async fn delete_case_study(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> ApiResponse<StatusCode> {
    let id = parse_id(&id).into_response("Failed to delete case study")?;

    let existing = repo
        .case_study
        .find_by_id(id)
        .await
        .into_response("Failed to delete case study")?;
    if existing.is_none() {
        return Err(ApiError::NotFound("Case study not found".to_string()));
    }

    repo.case_study
        .delete(id)
        .await
        .into_response("Failed to delete case study")?;

    Ok(StatusCode::NO_CONTENT)
}
