use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaseStudy::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CaseStudy::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CaseStudy::Title).string().not_null())
                    .col(ColumnDef::new(CaseStudy::Slug).string().not_null())
                    .col(ColumnDef::new(CaseStudy::Description).text().not_null())
                    .col(ColumnDef::new(CaseStudy::ClientName).string())
                    .col(ColumnDef::new(CaseStudy::Industry).string())
                    .col(ColumnDef::new(CaseStudy::Technologies).json_binary())
                    .col(ColumnDef::new(CaseStudy::Results).text())
                    .col(
                        ColumnDef::new(CaseStudy::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(CaseStudy::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(CaseStudy::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CaseStudy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CaseStudy {
    Table,
    Id,
    Title,
    Slug,
    Description,
    ClientName,
    Industry,
    Technologies,
    Results,
    Published,
    CreatedAt,
    UpdatedAt,
}
