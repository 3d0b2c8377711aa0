use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct CaseStudyRepository {
    db: DatabaseConnection,
}

impl CaseStudyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<case_study::Model> for CaseStudyEntity {
    fn from(value: case_study::Model) -> Self {
        Self {
            id: value.id,
            title: value.title,
            slug: value.slug,
            description: value.description,
            client_name: value.client_name,
            industry: value.industry,
            technologies: value
                .technologies
                .and_then(|v| serde_json::from_value(v).ok()),
            results: value.results,
            published: value.published,
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.and_utc(),
        }
    }
}

impl CaseStudyRepository {
    pub async fn find_published(&self) -> anyhow::Result<Vec<CaseStudyEntity>> {
        let studies = CaseStudy::find()
            .filter(case_study::Column::Published.eq(true))
            .order_by_desc(case_study::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(studies.into_iter().map(CaseStudyEntity::from).collect())
    }

    pub async fn find_by_slug(&self, slug: &str) -> anyhow::Result<Option<CaseStudyEntity>> {
        let study = CaseStudy::find()
            .filter(case_study::Column::Slug.eq(slug))
            .one(&self.db)
            .await?;

        Ok(study.map(CaseStudyEntity::from))
    }

    pub async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<CaseStudyEntity>> {
        let study = CaseStudy::find_by_id(id).one(&self.db).await?;

        Ok(study.map(CaseStudyEntity::from))
    }

    pub async fn create(&self, study: NewCaseStudy) -> anyhow::Result<CaseStudyEntity> {
        let now = Utc::now().naive_utc();
        let model = case_study::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::set(study.title),
            slug: ActiveValue::set(study.slug),
            description: ActiveValue::set(study.description),
            client_name: ActiveValue::set(study.client_name),
            industry: ActiveValue::set(study.industry),
            technologies: ActiveValue::set(study.technologies.map(serde_json::Value::from)),
            results: ActiveValue::set(study.results),
            published: ActiveValue::set(study.published),
            created_at: ActiveValue::set(now),
            updated_at: ActiveValue::set(now),
        };

        let created = model.insert(&self.db).await?;

        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: i32,
        changes: CaseStudyChanges,
    ) -> anyhow::Result<Option<CaseStudyEntity>> {
        CaseStudy::update_many()
            .col_expr(case_study::Column::Title, Expr::value(changes.title))
            .col_expr(case_study::Column::Slug, Expr::value(changes.slug))
            .col_expr(
                case_study::Column::Description,
                Expr::value(changes.description),
            )
            .col_expr(
                case_study::Column::ClientName,
                Expr::value(changes.client_name),
            )
            .col_expr(case_study::Column::Industry, Expr::value(changes.industry))
            .col_expr(
                case_study::Column::Technologies,
                Expr::value(changes.technologies.map(serde_json::Value::from)),
            )
            .col_expr(case_study::Column::Results, Expr::value(changes.results))
            .col_expr(
                case_study::Column::Published,
                Expr::value(changes.published.unwrap_or(false)),
            )
            .col_expr(
                case_study::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(case_study::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        self.find_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> anyhow::Result<()> {
        CaseStudy::delete(case_study::ActiveModel {
            id: ActiveValue::set(id),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;

        Ok(())
    }
}
