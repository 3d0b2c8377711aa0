use sea_orm_migration::prelude::*;

use crate::m20250118_093211_create_blog_post_table::BlogPost;
use crate::m20250118_093618_create_case_study_table::CaseStudy;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(BlogPost::Table)
                    .name("idx_blog_post_slug")
                    .col(BlogPost::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(CaseStudy::Table)
                    .name("idx_case_study_slug")
                    .col(CaseStudy::Slug)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .table(BlogPost::Table)
                    .name("idx_blog_post_slug")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .table(CaseStudy::Table)
                    .name("idx_case_study_slug")
                    .to_owned(),
            )
            .await
    }
}
