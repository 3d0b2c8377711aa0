use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPost::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPost::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPost::Title).string().not_null())
                    .col(ColumnDef::new(BlogPost::Slug).string().not_null())
                    .col(ColumnDef::new(BlogPost::Content).text().not_null())
                    .col(ColumnDef::new(BlogPost::Excerpt).text())
                    .col(ColumnDef::new(BlogPost::AuthorId).integer())
                    .col(
                        ColumnDef::new(BlogPost::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(BlogPost::PublishedAt).date_time())
                    .col(ColumnDef::new(BlogPost::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(BlogPost::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlogPost {
    Table,
    Id,
    Title,
    Slug,
    Content,
    Excerpt,
    AuthorId,
    Published,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
