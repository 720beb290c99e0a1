//! Blog mutations
//!
//! - createBlogPost / updateBlogPost / deleteBlogPost
//! - publishBlogPost / unpublishBlogPost
//! - likeBlog / dislikeBlog: toggle the seller's reaction

use async_graphql::{Context, InputObject, Object, Result, ID};

use super::acting_identity;
use crate::error::to_graphql_error;
use crate::graphql::guards::ActorGuard;
use crate::graphql::types::{parse_id, BlogPost};
use crate::models::blog::{BlogPostChanges, NewBlogPost};
use crate::models::{BlogReactionType, BlogType};
use crate::services::BlogService;

/// Input for creating a blog post; new posts start unpublished
#[derive(Debug, InputObject)]
pub struct CreateBlogPostInput {
    pub title: String,
    pub content: String,
    pub category_id: ID,
    /// Topic (default: OTHER)
    #[graphql(name = "type")]
    pub blog_type: Option<BlogType>,
    /// Author; defaults to the request actor
    pub author_id: Option<String>,
}

/// Partial update of a blog post; omitted fields are left unchanged
#[derive(Debug, Default, InputObject)]
pub struct UpdateBlogPostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<ID>,
    #[graphql(name = "type")]
    pub blog_type: Option<BlogType>,
}

/// Blog-related mutations
#[derive(Default)]
pub struct BlogMutation;

impl BlogMutation {
    async fn set_published(ctx: &Context<'_>, id: ID, published: bool) -> Result<BlogPost> {
        let id = parse_id(&id, "id").map_err(to_graphql_error)?;

        let service = ctx.data::<BlogService>()?;
        let post = service
            .set_published(id, published)
            .await
            .map_err(to_graphql_error)?;
        Ok(post.into())
    }

    async fn react(
        ctx: &Context<'_>,
        id: ID,
        seller_id: Option<String>,
        reaction: BlogReactionType,
    ) -> Result<BlogPost> {
        let seller_id = acting_identity(ctx, seller_id.as_deref())?;
        let id = parse_id(&id, "id").map_err(to_graphql_error)?;

        let service = ctx.data::<BlogService>()?;
        let post = service
            .toggle_reaction(id, &seller_id, reaction)
            .await
            .map_err(to_graphql_error)?;
        Ok(post.into())
    }
}

#[Object]
impl BlogMutation {
    async fn create_blog_post(
        &self,
        ctx: &Context<'_>,
        input: CreateBlogPostInput,
    ) -> Result<BlogPost> {
        let author_id = acting_identity(ctx, input.author_id.as_deref())?;
        let blog_category_id = parse_id(&input.category_id, "categoryId").map_err(to_graphql_error)?;

        let service = ctx.data::<BlogService>()?;
        let post = service
            .create_post(NewBlogPost {
                title: input.title,
                content: input.content,
                author_id,
                blog_category_id,
                blog_type: input.blog_type.unwrap_or_default(),
            })
            .await
            .map_err(to_graphql_error)?;
        Ok(post.into())
    }

    #[graphql(guard = "ActorGuard")]
    async fn update_blog_post(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateBlogPostInput,
    ) -> Result<BlogPost> {
        let id = parse_id(&id, "id").map_err(to_graphql_error)?;
        let blog_category_id = input
            .category_id
            .as_ref()
            .map(|id| parse_id(id, "categoryId"))
            .transpose()
            .map_err(to_graphql_error)?;

        let service = ctx.data::<BlogService>()?;
        let post = service
            .update_post(
                id,
                BlogPostChanges {
                    title: input.title,
                    content: input.content,
                    blog_category_id,
                    blog_type: input.blog_type,
                },
            )
            .await
            .map_err(to_graphql_error)?;
        Ok(post.into())
    }

    /// Publish a post, stamping `publishedAt`
    #[graphql(guard = "ActorGuard")]
    async fn publish_blog_post(&self, ctx: &Context<'_>, id: ID) -> Result<BlogPost> {
        Self::set_published(ctx, id, true).await
    }

    /// Unpublish a post, clearing `publishedAt`
    #[graphql(guard = "ActorGuard")]
    async fn unpublish_blog_post(&self, ctx: &Context<'_>, id: ID) -> Result<BlogPost> {
        Self::set_published(ctx, id, false).await
    }

    /// Delete a post and its reactions
    #[graphql(guard = "ActorGuard")]
    async fn delete_blog_post(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let id = parse_id(&id, "id").map_err(to_graphql_error)?;

        let service = ctx.data::<BlogService>()?;
        service.delete_post(id).await.map_err(to_graphql_error)
    }

    /// Toggle a LIKE: adds it, removes an existing like, or flips a dislike
    async fn like_blog(
        &self,
        ctx: &Context<'_>,
        id: ID,
        seller_id: Option<String>,
    ) -> Result<BlogPost> {
        Self::react(ctx, id, seller_id, BlogReactionType::Like).await
    }

    /// Toggle a DISLIKE: adds it, removes an existing dislike, or flips a like
    async fn dislike_blog(
        &self,
        ctx: &Context<'_>,
        id: ID,
        seller_id: Option<String>,
    ) -> Result<BlogPost> {
        Self::react(ctx, id, seller_id, BlogReactionType::Dislike).await
    }
}
