//! Community service: categories, posts and comments

use sqlx::PgPool;
use tracing::instrument;

use super::validation::{
    image_list, optional_text, required_text, MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH,
};
use crate::error::{ApiError, ApiResult};
use crate::graphql::pagination::{Page, PageRequest};
use crate::models::{
    community::{CommunityPostChanges, NewCommunityComment, NewCommunityPost},
    CommunityCategory, CommunityComment, CommunityPost, CommunityPostFilter,
    CommunityPostSortField, SortDirection,
};
use crate::repositories::CommunityRepository;

/// Service for community posts and comments
#[derive(Clone)]
pub struct CommunityService {
    community: CommunityRepository,
}

impl CommunityService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            community: CommunityRepository::new(pool),
        }
    }

    pub fn repository(&self) -> &CommunityRepository {
        &self.community
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ApiResult<Vec<CommunityCategory>> {
        Ok(self.community.list_categories().await?)
    }

    // ========== Posts ==========

    #[instrument(skip(self))]
    pub async fn list_posts(
        &self,
        filter: &CommunityPostFilter,
        sort: CommunityPostSortField,
        direction: SortDirection,
        request: PageRequest,
    ) -> ApiResult<Page<CommunityPost>> {
        let (items, total_count) = tokio::try_join!(
            self.community
                .list_posts(filter, sort, direction, request.take(), request.skip()),
            self.community.count_posts(filter),
        )?;

        Ok(Page::new(items, total_count, request))
    }

    pub async fn find_post(&self, id: i32) -> ApiResult<Option<CommunityPost>> {
        Ok(self.community.find_post(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_post(&self, id: i32) -> ApiResult<CommunityPost> {
        self.find_post(id)
            .await?
            .ok_or_else(|| ApiError::not_found("CommunityPost", id))
    }

    #[instrument(skip(self, post), fields(author_id = %post.author_id))]
    pub async fn create_post(&self, post: NewCommunityPost) -> ApiResult<CommunityPost> {
        let post = NewCommunityPost {
            title: required_text("title", &post.title, MAX_TITLE_LENGTH)?,
            content: required_text("content", &post.content, MAX_CONTENT_LENGTH)?,
            images: image_list(&post.images)?,
            ..post
        };
        if let Some(subcategory_id) = post.community_subcategory_id {
            self.ensure_subcategory(subcategory_id).await?;
        }

        let created = self.community.create_post(&post).await?;
        tracing::info!(community_post_id = created.id, "Community post created");
        Ok(created)
    }

    #[instrument(skip(self, changes))]
    pub async fn update_post(
        &self,
        id: i32,
        changes: CommunityPostChanges,
    ) -> ApiResult<CommunityPost> {
        let changes = CommunityPostChanges {
            title: optional_text("title", changes.title.as_deref(), MAX_TITLE_LENGTH)?,
            content: optional_text("content", changes.content.as_deref(), MAX_CONTENT_LENGTH)?,
            images: changes.images.as_deref().map(image_list).transpose()?,
            ..changes
        };
        if let Some(subcategory_id) = changes.community_subcategory_id {
            self.ensure_subcategory(subcategory_id).await?;
        }

        self.community
            .update_post(id, &changes)
            .await?
            .ok_or_else(|| ApiError::not_found("CommunityPost", id))
    }

    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: i32) -> ApiResult<bool> {
        if !self.community.delete_post(id).await? {
            return Err(ApiError::not_found("CommunityPost", id));
        }

        tracing::info!(community_post_id = id, "Community post deleted");
        Ok(true)
    }

    #[instrument(skip(self))]
    pub async fn like_post(&self, id: i32) -> ApiResult<CommunityPost> {
        let post = self
            .community
            .increment_likes(id)
            .await?
            .ok_or_else(|| ApiError::not_found("CommunityPost", id))?;

        tracing::debug!(community_post_id = id, likes = post.likes, "Community post liked");
        Ok(post)
    }

    // ========== Comments ==========

    /// Comments on a post, newest first; an unknown post yields an empty page
    #[instrument(skip(self))]
    pub async fn list_comments(
        &self,
        post_id: i32,
        request: PageRequest,
    ) -> ApiResult<Page<CommunityComment>> {
        let (items, total_count) = tokio::try_join!(
            self.community
                .list_comments(post_id, request.take(), request.skip()),
            self.community.count_comments(post_id),
        )?;

        Ok(Page::new(items, total_count, request))
    }

    #[instrument(skip(self, comment), fields(
        community_post_id = comment.community_post_id,
        seller_id = %comment.seller_id,
    ))]
    pub async fn create_comment(&self, comment: NewCommunityComment) -> ApiResult<CommunityComment> {
        let comment = NewCommunityComment {
            content: required_text("content", &comment.content, MAX_CONTENT_LENGTH)?,
            ..comment
        };

        let created = self
            .community
            .create_comment(&comment)
            .await?
            .ok_or_else(|| ApiError::not_found("CommunityPost", comment.community_post_id))?;

        tracing::debug!(
            comment_id = created.id,
            community_post_id = created.community_post_id,
            "Comment created, counter incremented"
        );
        Ok(created)
    }

    #[instrument(skip(self, content))]
    pub async fn update_comment(&self, id: i32, content: &str) -> ApiResult<CommunityComment> {
        let content = required_text("content", content, MAX_CONTENT_LENGTH)?;

        self.community
            .update_comment(id, &content)
            .await?
            .ok_or_else(|| ApiError::not_found("CommunityComment", id))
    }

    #[instrument(skip(self))]
    pub async fn delete_comment(&self, id: i32) -> ApiResult<bool> {
        let post_id = self
            .community
            .delete_comment(id)
            .await?
            .ok_or_else(|| ApiError::not_found("CommunityComment", id))?;

        tracing::debug!(
            comment_id = id,
            community_post_id = post_id,
            "Comment deleted, counter decremented"
        );
        Ok(true)
    }

    async fn ensure_subcategory(&self, subcategory_id: i32) -> ApiResult<()> {
        if self.community.subcategory_exists(subcategory_id).await? {
            Ok(())
        } else {
            Err(ApiError::not_found("CommunitySubcategory", subcategory_id))
        }
    }
}
