//! One-shot seeding utility for local development. Not part of the live
//! API surface; run with `cargo run --bin seed`.

use chrono::Utc;
use entity::prelude::*;
use repository::init_repository;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let database_url = util::database_url()?;
    let repository = init_repository(&database_url).await?;

    repository
        .blog_post
        .create(NewBlogPost {
            title: "Welcome to TechFlow Solutions".to_string(),
            slug: "welcome-to-techflow".to_string(),
            content: "TechFlow Solutions is your trusted partner in DevSecOps and cloud transformation.".to_string(),
            excerpt: Some("Your trusted partner in DevSecOps and cloud transformation.".to_string()),
            author_id: Some(1),
            published: true,
            published_at: Some(Utc::now()),
        })
        .await?;

    repository
        .blog_post
        .create(NewBlogPost {
            title: "How We Secure Cloud Deployments".to_string(),
            slug: "secure-cloud-deployments".to_string(),
            content: "Learn our approach to securing cloud infrastructure for fintech clients.".to_string(),
            excerpt: Some("Our approach to securing cloud infrastructure.".to_string()),
            author_id: Some(1),
            published: true,
            published_at: Some(Utc::now()),
        })
        .await?;

    repository
        .case_study
        .create(NewCaseStudy {
            title: "Fintech Cloud Migration".to_string(),
            slug: "fintech-cloud-migration".to_string(),
            description: "Migrated a fintech client to AWS with zero downtime and full compliance.".to_string(),
            client_name: Some("FinBank Ltd.".to_string()),
            industry: Some("Fintech".to_string()),
            technologies: Some(vec![
                "AWS".to_string(),
                "Terraform".to_string(),
                "Docker".to_string(),
            ]),
            results: Some("Reduced costs by 30%, improved security posture.".to_string()),
            published: true,
        })
        .await?;

    repository
        .case_study
        .create(NewCaseStudy {
            title: "CI/CD Pipeline Automation".to_string(),
            slug: "cicd-pipeline-automation".to_string(),
            description: "Automated CI/CD for a SaaS provider, enabling rapid, secure deployments.".to_string(),
            client_name: Some("SaaSify Inc.".to_string()),
            industry: Some("SaaS".to_string()),
            technologies: Some(vec![
                "Jenkins".to_string(),
                "GitHub Actions".to_string(),
                "Kubernetes".to_string(),
            ]),
            results: Some("Deployment time reduced from hours to minutes.".to_string()),
            published: true,
        })
        .await?;

    repository
        .contact_submission
        .create(NewContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            company: Some("Acme Corp".to_string()),
            message: "Interested in DevSecOps consulting services.".to_string(),
            service_interest: Some("DevSecOps".to_string()),
        })
        .await?;

    info!("database seeded");

    Ok(())
}
