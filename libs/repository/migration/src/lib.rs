pub use sea_orm_migration::prelude::*;

mod m20250118_093211_create_blog_post_table;
mod m20250118_093618_create_case_study_table;
mod m20250118_094102_create_contact_submission_table;
mod m20250119_101500_create_slug_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250118_093211_create_blog_post_table::Migration),
            Box::new(m20250118_093618_create_case_study_table::Migration),
            Box::new(m20250118_094102_create_contact_submission_table::Migration),
            Box::new(m20250119_101500_create_slug_indexes::Migration),
        ]
    }
}
