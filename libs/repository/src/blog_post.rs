use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct BlogPostRepository {
    db: DatabaseConnection,
}

impl BlogPostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<blog_post::Model> for BlogPostEntity {
    fn from(value: blog_post::Model) -> Self {
        Self {
            id: value.id,
            title: value.title,
            slug: value.slug,
            content: value.content,
            excerpt: value.excerpt,
            author_id: value.author_id,
            published: value.published,
            published_at: value.published_at.map(|t| t.and_utc()),
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.and_utc(),
        }
    }
}

impl BlogPostRepository {
    pub async fn find_published(&self) -> anyhow::Result<Vec<BlogPostEntity>> {
        let posts = BlogPost::find()
            .filter(blog_post::Column::Published.eq(true))
            .order_by_desc(blog_post::Column::PublishedAt)
            .all(&self.db)
            .await?;

        Ok(posts.into_iter().map(BlogPostEntity::from).collect())
    }

    pub async fn find_by_slug(&self, slug: &str) -> anyhow::Result<Option<BlogPostEntity>> {
        let post = BlogPost::find()
            .filter(blog_post::Column::Slug.eq(slug))
            .one(&self.db)
            .await?;

        Ok(post.map(BlogPostEntity::from))
    }

    pub async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<BlogPostEntity>> {
        let post = BlogPost::find_by_id(id).one(&self.db).await?;

        Ok(post.map(BlogPostEntity::from))
    }

    pub async fn create(&self, post: NewBlogPost) -> anyhow::Result<BlogPostEntity> {
        let now = Utc::now().naive_utc();
        let model = blog_post::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::set(post.title),
            slug: ActiveValue::set(post.slug),
            content: ActiveValue::set(post.content),
            excerpt: ActiveValue::set(post.excerpt),
            author_id: ActiveValue::set(post.author_id),
            published: ActiveValue::set(post.published),
            published_at: ActiveValue::set(post.published_at.map(|t| t.naive_utc())),
            created_at: ActiveValue::set(now),
            updated_at: ActiveValue::set(now),
        };

        let created = model.insert(&self.db).await?;

        Ok(created.into())
    }

    /// Overwrites every mutable column. `published_at` is not in the
    /// mutable set and survives updates.
    pub async fn update(
        &self,
        id: i32,
        changes: BlogPostChanges,
    ) -> anyhow::Result<Option<BlogPostEntity>> {
        BlogPost::update_many()
            .col_expr(blog_post::Column::Title, Expr::value(changes.title))
            .col_expr(blog_post::Column::Slug, Expr::value(changes.slug))
            .col_expr(blog_post::Column::Content, Expr::value(changes.content))
            .col_expr(blog_post::Column::Excerpt, Expr::value(changes.excerpt))
            .col_expr(blog_post::Column::AuthorId, Expr::value(changes.author_id))
            .col_expr(
                blog_post::Column::Published,
                Expr::value(changes.published.unwrap_or(false)),
            )
            .col_expr(
                blog_post::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(blog_post::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        self.find_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> anyhow::Result<()> {
        BlogPost::delete(blog_post::ActiveModel {
            id: ActiveValue::set(id),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;

        Ok(())
    }
}
