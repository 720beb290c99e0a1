//! GraphQL schema builder for the content subgraph
//!
//! The schema is built with federation enabled, so it serves `_service` and
//! `_entities` alongside the regular queries.

use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};
use content_shared_config::PaginationConfig;
use sqlx::PgPool;

use crate::error::{ApiError, ApiResult};
use crate::services::{BlogService, CommunityService};

use super::loaders::{BlogCategoryLoader, SubcategoriesByCategoryLoader};
use super::mutation::Mutation;
use super::query::Query;

/// The content subgraph schema type
pub type ContentSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with required services
#[derive(Default)]
pub struct SchemaBuilder {
    pool: Option<PgPool>,
    pagination: PaginationConfig,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the database pool
    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Set the page size limits applied to list queries
    pub fn pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    /// Build the schema with all configured services
    pub fn build(self) -> ApiResult<ContentSchema> {
        let pool = self.pool.ok_or_else(|| {
            ApiError::Configuration("database pool is required to build the schema".to_string())
        })?;

        let blog_service = BlogService::new(pool.clone());
        let community_service = CommunityService::new(pool);

        let category_loader = DataLoader::new(
            BlogCategoryLoader::new(blog_service.repository().clone()),
            tokio::spawn,
        );
        let subcategories_loader = DataLoader::new(
            SubcategoriesByCategoryLoader::new(community_service.repository().clone()),
            tokio::spawn,
        );

        Ok(
            Schema::build(Query::default(), Mutation::default(), EmptySubscription)
                .enable_federation()
                .data(blog_service)
                .data(community_service)
                .data(category_loader)
                .data(subcategories_loader)
                .data(self.pagination)
                .finish(),
        )
    }
}

/// Create the GraphQL schema with default pagination limits
pub fn build_schema(pool: PgPool) -> ApiResult<ContentSchema> {
    SchemaBuilder::new().pool(pool).build()
}
