//! Blog queries
//!
//! - blogCategories: every blog category
//! - blogs: filtered, ordered, paginated posts (published only by default)
//! - blog: one post by id
//! - blogsByCategory / blogsByAuthor: listing shortcuts
//! - blogReaction: the acting seller's reaction on a post

use async_graphql::{Context, InputObject, Object, Result, ID};

use super::page_request;
use crate::error::to_graphql_error;
use crate::graphql::pagination::{Connection, DEFAULT_PAGE};
use crate::graphql::types::{parse_id, BlogCategory, BlogPost};
use crate::models::actor::resolve_actor_id;
use crate::models::blog::BlogStatus;
use crate::models::{
    Actor, BlogPostFilter, BlogPostSortField, BlogReactionType, BlogType, SortDirection,
};
use crate::services::BlogService;

/// Filter for blog post listings
#[derive(Debug, Default, InputObject)]
#[graphql(name = "BlogPostFilter")]
pub struct BlogPostFilterInput {
    /// Publication state to include (default: PUBLISHED)
    #[graphql(default)]
    pub status: BlogStatus,
    pub category_id: Option<ID>,
    #[graphql(name = "type")]
    pub blog_type: Option<BlogType>,
    pub author_id: Option<String>,
    /// Case-insensitive substring of title or content
    pub search: Option<String>,
}

impl BlogPostFilterInput {
    fn into_filter(self) -> Result<BlogPostFilter> {
        let category_id = self
            .category_id
            .as_ref()
            .map(|id| parse_id(id, "categoryId"))
            .transpose()
            .map_err(to_graphql_error)?;

        Ok(BlogPostFilter {
            published: self.status.published_flag(),
            category_id,
            blog_type: self.blog_type,
            author_id: self.author_id,
            search: self.search,
        })
    }
}

/// Ordering for blog post listings
#[derive(Debug, Default, InputObject)]
pub struct BlogPostOrderBy {
    #[graphql(default)]
    pub field: BlogPostSortField,
    #[graphql(default)]
    pub direction: SortDirection,
}

/// Blog-related queries
#[derive(Default)]
pub struct BlogQuery;

impl BlogQuery {
    async fn list(
        ctx: &Context<'_>,
        filter: BlogPostFilter,
        order_by: BlogPostOrderBy,
        page: i32,
        page_size: Option<i32>,
    ) -> Result<Connection<BlogPost>> {
        let request = page_request(ctx, page, page_size)?;
        let service = ctx.data::<BlogService>()?;
        let page = service
            .list_posts(&filter, order_by.field, order_by.direction, request)
            .await
            .map_err(to_graphql_error)?;

        Ok(page.map(BlogPost::from).into())
    }
}

#[Object]
impl BlogQuery {
    /// Every blog category, alphabetically
    async fn blog_categories(&self, ctx: &Context<'_>) -> Result<Vec<BlogCategory>> {
        let service = ctx.data::<BlogService>()?;
        let categories = service.list_categories().await.map_err(to_graphql_error)?;
        Ok(categories.into_iter().map(BlogCategory::from).collect())
    }

    /// Paginated blog posts; only published posts unless `filter.status` says otherwise
    async fn blogs(
        &self,
        ctx: &Context<'_>,
        #[graphql(default_with = "DEFAULT_PAGE")] page: i32,
        page_size: Option<i32>,
        filter: Option<BlogPostFilterInput>,
        order_by: Option<BlogPostOrderBy>,
    ) -> Result<Connection<BlogPost>> {
        let filter = filter.unwrap_or_default().into_filter()?;
        Self::list(ctx, filter, order_by.unwrap_or_default(), page, page_size).await
    }

    /// A blog post by id; fails with NOT_FOUND if it does not exist
    async fn blog(&self, ctx: &Context<'_>, id: ID) -> Result<BlogPost> {
        let id = parse_id(&id, "id").map_err(to_graphql_error)?;
        let service = ctx.data::<BlogService>()?;
        let post = service.get_post(id).await.map_err(to_graphql_error)?;
        Ok(post.into())
    }

    /// Published posts of one topic
    async fn blogs_by_category(
        &self,
        ctx: &Context<'_>,
        category: BlogType,
        #[graphql(default_with = "DEFAULT_PAGE")] page: i32,
        page_size: Option<i32>,
    ) -> Result<Connection<BlogPost>> {
        let filter = BlogPostFilter {
            blog_type: Some(category),
            ..BlogPostFilter::published()
        };
        Self::list(ctx, filter, BlogPostOrderBy::default(), page, page_size).await
    }

    /// Every post written by an author, drafts included
    async fn blogs_by_author(
        &self,
        ctx: &Context<'_>,
        author_id: String,
        #[graphql(default_with = "DEFAULT_PAGE")] page: i32,
        page_size: Option<i32>,
    ) -> Result<Connection<BlogPost>> {
        let filter = BlogPostFilter {
            author_id: Some(author_id),
            ..BlogPostFilter::default()
        };
        let order_by = BlogPostOrderBy {
            field: BlogPostSortField::CreatedAt,
            direction: SortDirection::Desc,
        };
        Self::list(ctx, filter, order_by, page, page_size).await
    }

    /// The acting seller's reaction on a post, or null
    async fn blog_reaction(
        &self,
        ctx: &Context<'_>,
        blog_id: ID,
        seller_id: Option<String>,
    ) -> Result<Option<BlogReactionType>> {
        let seller_id = resolve_actor_id(seller_id.as_deref(), ctx.data_opt::<Actor>())
            .map_err(to_graphql_error)?;
        let blog_id = parse_id(&blog_id, "blogId").map_err(to_graphql_error)?;

        let service = ctx.data::<BlogService>()?;
        service
            .reaction_for(blog_id, &seller_id)
            .await
            .map_err(to_graphql_error)
    }
}
