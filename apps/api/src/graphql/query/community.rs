//! Community queries

use async_graphql::{Context, InputObject, Object, Result, ID};

use super::page_request;
use crate::error::to_graphql_error;
use crate::graphql::pagination::{Connection, DEFAULT_PAGE};
use crate::graphql::types::{parse_id, CommunityCategory, CommunityComment, CommunityPost};
use crate::models::{CommunityPostFilter, CommunityPostSortField, SortDirection};
use crate::services::CommunityService;

/// Filter for community post listings
#[derive(Debug, Default, InputObject)]
#[graphql(name = "CommunityPostFilter")]
pub struct CommunityPostFilterInput {
    pub subcategory_id: Option<ID>,
    pub author_id: Option<String>,
    /// Case-insensitive substring of title or content
    pub search: Option<String>,
}

impl CommunityPostFilterInput {
    fn into_filter(self) -> Result<CommunityPostFilter> {
        let subcategory_id = self
            .subcategory_id
            .as_ref()
            .map(|id| parse_id(id, "subcategoryId"))
            .transpose()
            .map_err(to_graphql_error)?;

        Ok(CommunityPostFilter {
            subcategory_id,
            author_id: self.author_id,
            search: self.search,
        })
    }
}

/// Ordering for community post listings
#[derive(Debug, Default, InputObject)]
pub struct CommunityPostOrderBy {
    #[graphql(default)]
    pub field: CommunityPostSortField,
    #[graphql(default)]
    pub direction: SortDirection,
}

/// Community-related queries
#[derive(Default)]
pub struct CommunityQuery;

#[Object]
impl CommunityQuery {
    /// Community categories with their subcategories
    async fn community_categories(&self, ctx: &Context<'_>) -> Result<Vec<CommunityCategory>> {
        let service = ctx.data::<CommunityService>()?;
        let categories = service.list_categories().await.map_err(to_graphql_error)?;
        Ok(categories.into_iter().map(CommunityCategory::from).collect())
    }

    async fn community_posts(
        &self,
        ctx: &Context<'_>,
        #[graphql(default_with = "DEFAULT_PAGE")] page: i32,
        page_size: Option<i32>,
        filter: Option<CommunityPostFilterInput>,
        order_by: Option<CommunityPostOrderBy>,
    ) -> Result<Connection<CommunityPost>> {
        let request = page_request(ctx, page, page_size)?;
        let filter = filter.unwrap_or_default().into_filter()?;
        let order_by = order_by.unwrap_or_default();

        let service = ctx.data::<CommunityService>()?;
        let page = service
            .list_posts(&filter, order_by.field, order_by.direction, request)
            .await
            .map_err(to_graphql_error)?;

        Ok(page.map(CommunityPost::from).into())
    }

    /// A community post by id; fails with NOT_FOUND if it does not exist
    async fn community_post(&self, ctx: &Context<'_>, id: ID) -> Result<CommunityPost> {
        let id = parse_id(&id, "id").map_err(to_graphql_error)?;
        let service = ctx.data::<CommunityService>()?;
        let post = service.get_post(id).await.map_err(to_graphql_error)?;
        Ok(post.into())
    }

    async fn community_posts_by_author(
        &self,
        ctx: &Context<'_>,
        author_id: String,
        #[graphql(default_with = "DEFAULT_PAGE")] page: i32,
        page_size: Option<i32>,
    ) -> Result<Connection<CommunityPost>> {
        let request = page_request(ctx, page, page_size)?;
        let filter = CommunityPostFilter {
            author_id: Some(author_id),
            ..CommunityPostFilter::default()
        };

        let service = ctx.data::<CommunityService>()?;
        let page = service
            .list_posts(
                &filter,
                CommunityPostSortField::CreatedAt,
                SortDirection::Desc,
                request,
            )
            .await
            .map_err(to_graphql_error)?;

        Ok(page.map(CommunityPost::from).into())
    }

    /// Comments on a post, newest first
    async fn community_comments(
        &self,
        ctx: &Context<'_>,
        post_id: ID,
        #[graphql(default_with = "DEFAULT_PAGE")] page: i32,
        page_size: Option<i32>,
    ) -> Result<Connection<CommunityComment>> {
        let request = page_request(ctx, page, page_size)?;
        let post_id = parse_id(&post_id, "postId").map_err(to_graphql_error)?;

        let service = ctx.data::<CommunityService>()?;
        let page = service
            .list_comments(post_id, request)
            .await
            .map_err(to_graphql_error)?;

        Ok(page.map(CommunityComment::from).into())
    }
}
