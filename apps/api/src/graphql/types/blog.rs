//! Blog GraphQL types
//!
//! `BlogPost` is a federation entity keyed by `id`. Slug, excerpt and
//! reading time are derived from the stored title and content.

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Object, Result, ID};
use chrono::{DateTime, Utc};

use crate::graphql::loaders::BlogCategoryLoader;
use crate::models::blog::DEFAULT_EXCERPT_LENGTH;
use crate::models::{BlogCategory as DbBlogCategory, BlogPost as DbBlogPost, BlogType};

use super::federation::Admin;

/// Blog category exposed via GraphQL
pub struct BlogCategory {
    inner: DbBlogCategory,
}

impl From<DbBlogCategory> for BlogCategory {
    fn from(category: DbBlogCategory) -> Self {
        Self { inner: category }
    }
}

#[Object]
impl BlogCategory {
    async fn id(&self) -> ID {
        ID::from(self.inner.id)
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Icon name used by the storefront
    async fn icon(&self) -> Option<&str> {
        self.inner.icon.as_deref()
    }

    async fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }
}

/// Blog post exposed via GraphQL
pub struct BlogPost {
    inner: DbBlogPost,
}

impl BlogPost {
    pub fn new(post: DbBlogPost) -> Self {
        Self { inner: post }
    }
}

impl From<DbBlogPost> for BlogPost {
    fn from(post: DbBlogPost) -> Self {
        Self::new(post)
    }
}

#[Object]
impl BlogPost {
    async fn id(&self) -> ID {
        ID::from(self.inner.id)
    }

    async fn title(&self) -> &str {
        &self.inner.title
    }

    async fn content(&self) -> &str {
        &self.inner.content
    }

    /// URL slug derived from the title
    async fn slug(&self) -> String {
        self.inner.slug()
    }

    /// Plain-text preview, truncated on a word boundary
    async fn excerpt(
        &self,
        #[graphql(default = 150)] max_length: i32,
    ) -> String {
        let max_length = usize::try_from(max_length).unwrap_or(DEFAULT_EXCERPT_LENGTH);
        self.inner.excerpt(max_length)
    }

    /// Estimated reading time in minutes
    async fn reading_time_minutes(&self) -> i32 {
        self.inner.reading_time_minutes()
    }

    async fn author_id(&self) -> &str {
        &self.inner.author_id
    }

    /// Admin who wrote the post, resolved by the gateway
    async fn author(&self) -> Admin {
        Admin::new(self.inner.author_id.clone())
    }

    async fn category_id(&self) -> ID {
        ID::from(self.inner.blog_category_id)
    }

    /// Category of the post (uses DataLoader for batched fetching)
    async fn category(&self, ctx: &Context<'_>) -> Result<Option<BlogCategory>> {
        let loader = ctx.data::<DataLoader<BlogCategoryLoader>>()?;
        let category = loader.load_one(self.inner.blog_category_id).await?;
        Ok(category.map(BlogCategory::from))
    }

    /// Topic of the post
    #[graphql(name = "type")]
    async fn blog_type(&self) -> BlogType {
        self.inner.blog_type
    }

    /// Display label of the topic
    async fn type_label(&self) -> &'static str {
        self.inner.blog_type.label()
    }

    async fn is_published(&self) -> bool {
        self.inner.is_published
    }

    async fn published_at(&self) -> Option<DateTime<Utc>> {
        self.inner.published_at
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }

    /// Number of sellers who liked the post
    async fn likes(&self) -> i32 {
        self.inner.likes
    }

    /// Number of sellers who disliked the post
    async fn dislikes(&self) -> i32 {
        self.inner.dislikes
    }
}
