//! Community GraphQL types

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Object, Result, ID};
use chrono::{DateTime, Utc};

use crate::graphql::loaders::SubcategoriesByCategoryLoader;
use crate::models::{
    CommunityCategory as DbCommunityCategory, CommunityComment as DbCommunityComment,
    CommunityPost as DbCommunityPost, CommunitySubcategory as DbCommunitySubcategory,
};

use super::federation::{Admin, Seller};

pub struct CommunityCategory {
    inner: DbCommunityCategory,
}

impl From<DbCommunityCategory> for CommunityCategory {
    fn from(category: DbCommunityCategory) -> Self {
        Self { inner: category }
    }
}

#[Object]
impl CommunityCategory {
    async fn id(&self) -> ID {
        ID::from(self.inner.id)
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Subcategories of this category (uses DataLoader for batched fetching)
    async fn subcategories(&self, ctx: &Context<'_>) -> Result<Vec<CommunitySubcategory>> {
        let loader = ctx.data::<DataLoader<SubcategoriesByCategoryLoader>>()?;
        let subcategories = loader.load_one(self.inner.id).await?;
        Ok(subcategories
            .unwrap_or_default()
            .into_iter()
            .map(CommunitySubcategory::from)
            .collect())
    }
}

pub struct CommunitySubcategory {
    inner: DbCommunitySubcategory,
}

impl From<DbCommunitySubcategory> for CommunitySubcategory {
    fn from(subcategory: DbCommunitySubcategory) -> Self {
        Self { inner: subcategory }
    }
}

#[Object]
impl CommunitySubcategory {
    async fn id(&self) -> ID {
        ID::from(self.inner.id)
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    async fn category_id(&self) -> ID {
        ID::from(self.inner.community_category_id)
    }
}

/// Community post exposed via GraphQL; a federation entity keyed by `id`
pub struct CommunityPost {
    inner: DbCommunityPost,
}

impl From<DbCommunityPost> for CommunityPost {
    fn from(post: DbCommunityPost) -> Self {
        Self { inner: post }
    }
}

#[Object]
impl CommunityPost {
    async fn id(&self) -> ID {
        ID::from(self.inner.id)
    }

    async fn title(&self) -> &str {
        &self.inner.title
    }

    async fn content(&self) -> &str {
        &self.inner.content
    }

    /// Image URLs, in display order
    async fn images(&self) -> &[String] {
        &self.inner.images
    }

    async fn author_id(&self) -> &str {
        &self.inner.author_id
    }

    async fn author(&self) -> Admin {
        Admin::new(self.inner.author_id.clone())
    }

    async fn subcategory_id(&self) -> Option<ID> {
        self.inner.community_subcategory_id.map(ID::from)
    }

    async fn likes(&self) -> i32 {
        self.inner.likes
    }

    /// Number of comments on the post
    async fn comments(&self) -> i32 {
        self.inner.comments
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}

pub struct CommunityComment {
    inner: DbCommunityComment,
}

impl From<DbCommunityComment> for CommunityComment {
    fn from(comment: DbCommunityComment) -> Self {
        Self { inner: comment }
    }
}

#[Object]
impl CommunityComment {
    async fn id(&self) -> ID {
        ID::from(self.inner.id)
    }

    async fn post_id(&self) -> ID {
        ID::from(self.inner.community_post_id)
    }

    async fn seller_id(&self) -> &str {
        &self.inner.seller_id
    }

    /// Seller who wrote the comment, resolved by the gateway
    async fn seller(&self) -> Seller {
        Seller::new(self.inner.seller_id.clone())
    }

    async fn content(&self) -> &str {
        &self.inner.content
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}
