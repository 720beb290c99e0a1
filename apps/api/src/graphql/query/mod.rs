//! GraphQL queries for the content subgraph
//!
//! This module contains all query resolvers, organized by domain.

mod blog;
mod community;
mod federation;

pub use blog::{BlogPostFilterInput, BlogPostOrderBy, BlogQuery};
pub use community::{CommunityPostFilterInput, CommunityPostOrderBy, CommunityQuery};
pub use federation::FederationQuery;

use async_graphql::{Context, MergedObject, Result};
use content_shared_config::PaginationConfig;

use crate::error::to_graphql_error;
use crate::graphql::pagination::{PageRequest, DEFAULT_PAGE_SIZE};

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(BlogQuery, CommunityQuery, FederationQuery);

/// Validate page arguments against the configured limits
///
/// An omitted `pageSize` falls back to the configured default.
pub(crate) fn page_request(
    ctx: &Context<'_>,
    page: i32,
    page_size: Option<i32>,
) -> Result<PageRequest> {
    let limits = ctx
        .data_opt::<PaginationConfig>()
        .copied()
        .unwrap_or_default();
    let page_size = page_size.unwrap_or_else(|| {
        i32::try_from(limits.default_page_size).unwrap_or(DEFAULT_PAGE_SIZE)
    });

    PageRequest::with_limits(page, page_size, &limits).map_err(to_graphql_error)
}
