use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use repository::Repository;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod blog;
pub mod case_study;
pub mod contact;
pub mod headers;
pub mod health;
pub mod not_found;
mod response;
mod util;

pub enum ApiError {
    ClientError(String),
    NotFound(String),
    ServerError(String),
}

pub async fn serve(repository: Repository) -> anyhow::Result<Router> {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            health::get_health,
            health::get_welcome,
            blog::get_blog_posts,
            blog::create_blog_post,
            blog::get_blog_post,
            blog::update_blog_post,
            blog::delete_blog_post,
            case_study::get_case_studies,
            case_study::create_case_study,
            case_study::get_case_study,
            case_study::update_case_study,
            case_study::delete_case_study,
            contact::submit_contact_form,
            contact::get_contact_submissions,
            contact::update_contact_submission,
        ),
        components(schemas(
            health::HealthResponse,
            health::WelcomeResponse,
            blog::request::CreateBlogPostRequest,
            blog::request::UpdateBlogPostRequest,
            blog::response::BlogPostResponse,
            case_study::request::CreateCaseStudyRequest,
            case_study::request::UpdateCaseStudyRequest,
            case_study::response::CaseStudyResponse,
            contact::request::SubmitContactRequest,
            contact::request::UpdateContactSubmissionRequest,
            contact::response::ContactSubmissionResponse,
        ))
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    // blog posts
    let blog_router = Router::new()
        .route("/", get(blog::get_blog_posts).post(blog::create_blog_post))
        .route(
            "/:slug",
            get(blog::get_blog_post)
                .put(blog::update_blog_post)
                .delete(blog::delete_blog_post),
        )
        .with_state(repository.clone());

    // case studies
    let case_study_router = Router::new()
        .route(
            "/",
            get(case_study::get_case_studies).post(case_study::create_case_study),
        )
        .route(
            "/:slug",
            get(case_study::get_case_study)
                .put(case_study::update_case_study)
                .delete(case_study::delete_case_study),
        )
        .with_state(repository.clone());

    // contact submissions; no delete route
    let contact_router = Router::new()
        .route(
            "/",
            post(contact::submit_contact_form).get(contact::get_contact_submissions),
        )
        .route("/:id", put(contact::update_contact_submission))
        .with_state(repository.clone());

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::get_health))
        .route("/api", get(health::get_welcome))
        .nest("/api/blog", blog_router)
        .nest("/api/case-studies", case_study_router)
        .nest("/api/contact", contact_router)
        .fallback(not_found::get_404)
        .layer(middleware::from_fn(headers::security_headers))
        .layer(CorsLayer::permissive());

    Ok(router)
}
