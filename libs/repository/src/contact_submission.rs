use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

/// Initial status for every new submission, whatever the caller sent.
const STATUS_NEW: &str = "new";

#[derive(Clone, Debug)]
pub struct ContactSubmissionRepository {
    db: DatabaseConnection,
}

impl ContactSubmissionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<contact_submission::Model> for ContactSubmissionEntity {
    fn from(value: contact_submission::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            company: value.company,
            message: value.message,
            service_interest: value.service_interest,
            status: value.status,
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.and_utc(),
        }
    }
}

impl ContactSubmissionRepository {
    pub async fn find_all(&self) -> anyhow::Result<Vec<ContactSubmissionEntity>> {
        let submissions = ContactSubmission::find()
            .order_by_desc(contact_submission::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(submissions
            .into_iter()
            .map(ContactSubmissionEntity::from)
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<ContactSubmissionEntity>> {
        let submission = ContactSubmission::find_by_id(id).one(&self.db).await?;

        Ok(submission.map(ContactSubmissionEntity::from))
    }

    pub async fn create(
        &self,
        submission: NewContactSubmission,
    ) -> anyhow::Result<ContactSubmissionEntity> {
        let now = Utc::now().naive_utc();
        let model = contact_submission::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::set(submission.name),
            email: ActiveValue::set(submission.email),
            company: ActiveValue::set(submission.company),
            message: ActiveValue::set(submission.message),
            service_interest: ActiveValue::set(submission.service_interest),
            status: ActiveValue::set(STATUS_NEW.to_string()),
            created_at: ActiveValue::set(now),
            updated_at: ActiveValue::set(now),
        };

        let created = model.insert(&self.db).await?;

        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: i32,
        changes: ContactSubmissionChanges,
    ) -> anyhow::Result<Option<ContactSubmissionEntity>> {
        ContactSubmission::update_many()
            .col_expr(contact_submission::Column::Name, Expr::value(changes.name))
            .col_expr(
                contact_submission::Column::Email,
                Expr::value(changes.email),
            )
            .col_expr(
                contact_submission::Column::Company,
                Expr::value(changes.company),
            )
            .col_expr(
                contact_submission::Column::Message,
                Expr::value(changes.message),
            )
            .col_expr(
                contact_submission::Column::ServiceInterest,
                Expr::value(changes.service_interest),
            )
            .col_expr(
                contact_submission::Column::Status,
                Expr::value(changes.status.unwrap_or_else(|| STATUS_NEW.to_string())),
            )
            .col_expr(
                contact_submission::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(contact_submission::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        self.find_by_id(id).await
    }
}
