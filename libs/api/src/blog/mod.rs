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

use self::request::{CreateBlogPostRequest, UpdateBlogPostRequest};
use self::response::BlogPostResponse;

/// List all published blog posts
#[utoipa::path(
    get,
    path = "/api/blog",
    responses(
        (status = 200, description = "Published posts, newest first", body = [BlogPostResponse])
    )
)]
pub async fn get_blog_posts(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<BlogPostResponse>>> {
    let posts = repo
        .blog_post
        .find_published()
        .await
        .into_response("Failed to fetch blog posts")?;

    Ok(Json(posts.into_iter().map(BlogPostResponse::from).collect()))
}

/// Create a blog post
#[utoipa::path(
    post,
    path = "/api/blog",
    request_body = CreateBlogPostRequest,
    responses(
        (status = 201, description = "Created post", body = BlogPostResponse),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn create_blog_post(
    State(repo): State<Repository>,
    Json(body): Json<CreateBlogPostRequest>,
) -> ApiResponse<(StatusCode, Json<BlogPostResponse>)> {
    let title = body.title.filter(|v| !v.is_empty());
    let slug = body.slug.filter(|v| !v.is_empty());
    let content = body.content.filter(|v| !v.is_empty());

    let (Some(title), Some(slug), Some(content)) = (title, slug, content) else {
        return Err(ApiError::ClientError(
            "title, slug, and content are required".to_string(),
        ));
    };

    let post = repo
        .blog_post
        .create(NewBlogPost {
            title,
            slug,
            content,
            excerpt: body.excerpt,
            author_id: body.author_id,
            published: body.published.unwrap_or(false),
            published_at: None,
        })
        .await
        .into_response("Failed to create blog post")?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// Get a blog post by slug
#[utoipa::path(
    get,
    path = "/api/blog/:slug",
    responses(
        (status = 200, description = "The post", body = BlogPostResponse),
        (status = 404, description = "No post with this slug")
    ),
    params(
        ("slug", description = "blog post slug"),
    )
)]
pub async fn get_blog_post(
    State(repo): State<Repository>,
    Path(slug): Path<String>,
) -> ApiResponse<Json<BlogPostResponse>> {
    let post = repo
        .blog_post
        .find_by_slug(&slug)
        .await
        .into_response("Failed to fetch blog post")?;

    let Some(post) = post else {
        return Err(ApiError::NotFound("Blog post not found".to_string()));
    };

    Ok(Json(post.into()))
}

/// Update a blog post by id, overwriting every mutable field
#[utoipa::path(
    put,
    path = "/api/blog/:id",
    request_body = UpdateBlogPostRequest,
    responses(
        (status = 200, description = "Updated post", body = BlogPostResponse),
        (status = 404, description = "No post with this id")
    ),
    params(
        ("id", description = "blog post id"),
    )
)]
pub async fn update_blog_post(
    State(repo): State<Repository>,
    Path(id): Path<String>,
    Json(body): Json<UpdateBlogPostRequest>,
) -> ApiResponse<Json<BlogPostResponse>> {
    let id = parse_id(&id).into_response("Failed to update blog post")?;

    let existing = repo
        .blog_post
        .find_by_id(id)
        .await
        .into_response("Failed to update blog post")?;
    if existing.is_none() {
        return Err(ApiError::NotFound("Blog post not found".to_string()));
    }

    let updated = repo
        .blog_post
        .update(
            id,
            BlogPostChanges {
                title: body.title,
                slug: body.slug,
                content: body.content,
                excerpt: body.excerpt,
                author_id: body.author_id,
                published: body.published,
            },
        )
        .await
        .into_response("Failed to update blog post")?;

    // the record can vanish between the existence check and the write
    let Some(updated) = updated else {
        return Err(ApiError::ServerError(
            "Failed to update blog post".to_string(),
        ));
    };

    Ok(Json(updated.into()))
}

/// Delete a blog post by id
#[utoipa::path(
    delete,
    path = "/api/blog/:id",
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No post with this id")
    ),
    params(
        ("id", description = "blog post id"),
    )
)]
pub async fn delete_blog_post(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> ApiResponse<StatusCode> {
    let id = parse_id(&id).into_response("Failed to delete blog post")?;

    let existing = repo
        .blog_post
        .find_by_id(id)
        .await
        .into_response("Failed to delete blog post")?;
    if existing.is_none() {
        return Err(ApiError::NotFound("Blog post not found".to_string()));
    }

    repo.blog_post
        .delete(id)
        .await
        .into_response("Failed to delete blog post")?;

    Ok(StatusCode::NO_CONTENT)
}
