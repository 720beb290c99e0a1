//! Community mutations
//!
//! Comment creation and deletion keep the post's `comments` counter in step
//! with the comment rows.

use async_graphql::{Context, InputObject, Object, Result, ID};

use super::acting_identity;
use crate::error::to_graphql_error;
use crate::graphql::guards::ActorGuard;
use crate::graphql::types::{parse_id, CommunityComment, CommunityPost};
use crate::models::community::{CommunityPostChanges, NewCommunityComment, NewCommunityPost};
use crate::services::CommunityService;

/// Input for creating a community post
#[derive(Debug, InputObject)]
pub struct CreateCommunityPostInput {
    pub title: String,
    pub content: String,
    /// Image URLs, at most 10
    #[graphql(default)]
    pub images: Vec<String>,
    pub subcategory_id: Option<ID>,
    /// Author; defaults to the request actor
    pub author_id: Option<String>,
}

/// Partial update of a community post; omitted fields are left unchanged
#[derive(Debug, Default, InputObject)]
pub struct UpdateCommunityPostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub images: Option<Vec<String>>,
    pub subcategory_id: Option<ID>,
}

#[derive(Debug, InputObject)]
pub struct CreateCommunityCommentInput {
    pub post_id: ID,
    pub content: String,
    /// Commenting seller; defaults to the request actor
    pub seller_id: Option<String>,
}

fn parse_optional_id(id: Option<&ID>, field: &str) -> Result<Option<i32>> {
    id.map(|id| parse_id(id, field))
        .transpose()
        .map_err(to_graphql_error)
}

/// Community-related mutations
#[derive(Default)]
pub struct CommunityMutation;

#[Object]
impl CommunityMutation {
    async fn create_community_post(
        &self,
        ctx: &Context<'_>,
        input: CreateCommunityPostInput,
    ) -> Result<CommunityPost> {
        let author_id = acting_identity(ctx, input.author_id.as_deref())?;
        let community_subcategory_id =
            parse_optional_id(input.subcategory_id.as_ref(), "subcategoryId")?;

        let service = ctx.data::<CommunityService>()?;
        let post = service
            .create_post(NewCommunityPost {
                title: input.title,
                content: input.content,
                images: input.images,
                author_id,
                community_subcategory_id,
            })
            .await
            .map_err(to_graphql_error)?;
        Ok(post.into())
    }

    #[graphql(guard = "ActorGuard")]
    async fn update_community_post(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateCommunityPostInput,
    ) -> Result<CommunityPost> {
        let id = parse_id(&id, "id").map_err(to_graphql_error)?;
        let community_subcategory_id =
            parse_optional_id(input.subcategory_id.as_ref(), "subcategoryId")?;

        let service = ctx.data::<CommunityService>()?;
        let post = service
            .update_post(
                id,
                CommunityPostChanges {
                    title: input.title,
                    content: input.content,
                    images: input.images,
                    community_subcategory_id,
                },
            )
            .await
            .map_err(to_graphql_error)?;
        Ok(post.into())
    }

    /// Delete a post and all of its comments
    #[graphql(guard = "ActorGuard")]
    async fn delete_community_post(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let id = parse_id(&id, "id").map_err(to_graphql_error)?;

        let service = ctx.data::<CommunityService>()?;
        service.delete_post(id).await.map_err(to_graphql_error)
    }

    /// Add one like to a post
    #[graphql(guard = "ActorGuard")]
    async fn like_community_post(&self, ctx: &Context<'_>, id: ID) -> Result<CommunityPost> {
        let id = parse_id(&id, "id").map_err(to_graphql_error)?;

        let service = ctx.data::<CommunityService>()?;
        let post = service.like_post(id).await.map_err(to_graphql_error)?;
        Ok(post.into())
    }

    /// Comment on a post, incrementing its comment counter
    async fn create_community_comment(
        &self,
        ctx: &Context<'_>,
        input: CreateCommunityCommentInput,
    ) -> Result<CommunityComment> {
        let seller_id = acting_identity(ctx, input.seller_id.as_deref())?;
        let community_post_id = parse_id(&input.post_id, "postId").map_err(to_graphql_error)?;

        let service = ctx.data::<CommunityService>()?;
        let comment = service
            .create_comment(NewCommunityComment {
                community_post_id,
                seller_id,
                content: input.content,
            })
            .await
            .map_err(to_graphql_error)?;
        Ok(comment.into())
    }

    async fn update_community_comment(
        &self,
        ctx: &Context<'_>,
        id: ID,
        content: String,
        seller_id: Option<String>,
    ) -> Result<CommunityComment> {
        acting_identity(ctx, seller_id.as_deref())?;
        let id = parse_id(&id, "id").map_err(to_graphql_error)?;

        let service = ctx.data::<CommunityService>()?;
        let comment = service
            .update_comment(id, &content)
            .await
            .map_err(to_graphql_error)?;
        Ok(comment.into())
    }

    /// Delete a comment, decrementing its post's comment counter
    async fn delete_community_comment(
        &self,
        ctx: &Context<'_>,
        id: ID,
        seller_id: Option<String>,
    ) -> Result<bool> {
        acting_identity(ctx, seller_id.as_deref())?;
        let id = parse_id(&id, "id").map_err(to_graphql_error)?;

        let service = ctx.data::<CommunityService>()?;
        service.delete_comment(id).await.map_err(to_graphql_error)
    }
}
