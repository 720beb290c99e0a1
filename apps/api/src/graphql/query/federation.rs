//! Federation entity resolvers
//!
//! Called by the gateway through `_entities`. Owned entities are loaded from
//! the database; entities owned elsewhere resolve to an id-only stub.

use async_graphql::{Context, Object, Result, ID};

use crate::error::to_graphql_error;
use crate::graphql::types::{parse_id, Admin, BlogPost, CommunityPost, Seller, User};
use crate::services::{BlogService, CommunityService};

/// Entity reference resolvers (hidden from the public Query type)
#[derive(Default)]
pub struct FederationQuery;

#[Object]
impl FederationQuery {
    #[graphql(entity)]
    async fn find_blog_post_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Option<BlogPost>> {
        // Ids this subgraph never issued cannot match a row
        let Ok(id) = parse_id(&id, "id") else {
            return Ok(None);
        };

        let service = ctx.data::<BlogService>()?;
        let post = service.find_post(id).await.map_err(to_graphql_error)?;
        Ok(post.map(BlogPost::from))
    }

    #[graphql(entity)]
    async fn find_community_post_by_id(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> Result<Option<CommunityPost>> {
        let Ok(id) = parse_id(&id, "id") else {
            return Ok(None);
        };

        let service = ctx.data::<CommunityService>()?;
        let post = service.find_post(id).await.map_err(to_graphql_error)?;
        Ok(post.map(CommunityPost::from))
    }

    #[graphql(entity)]
    async fn find_admin_by_id(&self, id: ID) -> Admin {
        Admin { id }
    }

    #[graphql(entity)]
    async fn find_seller_by_id(&self, id: ID) -> Seller {
        Seller { id }
    }

    #[graphql(entity)]
    async fn find_user_by_id(&self, id: ID) -> User {
        User { id }
    }
}
