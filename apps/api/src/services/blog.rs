//! Blog service: post lifecycle, listings and the like/dislike toggle

use sqlx::PgPool;
use tracing::instrument;

use super::validation::{optional_text, required_text, MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH};
use crate::error::{ApiError, ApiResult};
use crate::graphql::pagination::{Page, PageRequest};
use crate::models::{
    blog::{BlogPostChanges, NewBlogPost},
    BlogCategory, BlogPost, BlogPostFilter, BlogPostSortField, BlogReactionType,
    ReactionTransition, SortDirection,
};
use crate::repositories::{BlogRepository, ReactionRepository, ToggleOutcome};

/// A toggle that loses an insert race is retried this many times
const TOGGLE_RETRIES: usize = 1;

/// Service for blog posts, categories and reactions
#[derive(Clone)]
pub struct BlogService {
    blogs: BlogRepository,
    reactions: ReactionRepository,
}

impl BlogService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            blogs: BlogRepository::new(pool.clone()),
            reactions: ReactionRepository::new(pool),
        }
    }

    pub fn repository(&self) -> &BlogRepository {
        &self.blogs
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ApiResult<Vec<BlogCategory>> {
        Ok(self.blogs.list_categories().await?)
    }

    /// One page of posts matching `filter`, with the total match count
    #[instrument(skip(self))]
    pub async fn list_posts(
        &self,
        filter: &BlogPostFilter,
        sort: BlogPostSortField,
        direction: SortDirection,
        request: PageRequest,
    ) -> ApiResult<Page<BlogPost>> {
        let (items, total_count) = tokio::try_join!(
            self.blogs
                .list(filter, sort, direction, request.take(), request.skip()),
            self.blogs.count(filter),
        )?;

        Ok(Page::new(items, total_count, request))
    }

    /// Find a post, `None` if it does not exist
    pub async fn find_post(&self, id: i32) -> ApiResult<Option<BlogPost>> {
        Ok(self.blogs.find_by_id(id).await?)
    }

    /// Fetch a post, failing with `NotFound` if it does not exist
    #[instrument(skip(self))]
    pub async fn get_post(&self, id: i32) -> ApiResult<BlogPost> {
        self.find_post(id)
            .await?
            .ok_or_else(|| ApiError::not_found("BlogPost", id))
    }

    #[instrument(skip(self, post), fields(author_id = %post.author_id))]
    pub async fn create_post(&self, post: NewBlogPost) -> ApiResult<BlogPost> {
        let post = NewBlogPost {
            title: required_text("title", &post.title, MAX_TITLE_LENGTH)?,
            content: required_text("content", &post.content, MAX_CONTENT_LENGTH)?,
            ..post
        };
        self.ensure_category(post.blog_category_id).await?;

        let created = self.blogs.create(&post).await?;
        tracing::info!(blog_post_id = created.id, "Blog post created");
        Ok(created)
    }

    #[instrument(skip(self, changes))]
    pub async fn update_post(&self, id: i32, changes: BlogPostChanges) -> ApiResult<BlogPost> {
        let changes = BlogPostChanges {
            title: optional_text("title", changes.title.as_deref(), MAX_TITLE_LENGTH)?,
            content: optional_text("content", changes.content.as_deref(), MAX_CONTENT_LENGTH)?,
            ..changes
        };
        if let Some(category_id) = changes.blog_category_id {
            self.ensure_category(category_id).await?;
        }

        self.blogs
            .update(id, &changes)
            .await?
            .ok_or_else(|| ApiError::not_found("BlogPost", id))
    }

    #[instrument(skip(self))]
    pub async fn set_published(&self, id: i32, published: bool) -> ApiResult<BlogPost> {
        let post = self
            .blogs
            .set_published(id, published)
            .await?
            .ok_or_else(|| ApiError::not_found("BlogPost", id))?;

        tracing::info!(blog_post_id = id, published, "Blog post publication changed");
        Ok(post)
    }

    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: i32) -> ApiResult<bool> {
        if !self.blogs.delete(id).await? {
            return Err(ApiError::not_found("BlogPost", id));
        }

        tracing::info!(blog_post_id = id, "Blog post deleted");
        Ok(true)
    }

    /// Apply a like/dislike request and return the post with fresh counts
    ///
    /// A request matching the seller's current reaction removes it, the
    /// opposite request flips it, and otherwise a reaction is inserted.
    #[instrument(skip(self))]
    pub async fn toggle_reaction(
        &self,
        blog_post_id: i32,
        seller_id: &str,
        requested: BlogReactionType,
    ) -> ApiResult<BlogPost> {
        let seller_id = seller_id.trim();
        if seller_id.is_empty() {
            return Err(ApiError::Unauthorized);
        }

        let transition = self.apply_toggle(blog_post_id, seller_id, requested).await?;
        tracing::debug!(
            blog_post_id,
            seller_id,
            ?requested,
            ?transition,
            reaction = ?transition.resulting(),
            "Reaction toggled"
        );

        self.get_post(blog_post_id).await
    }

    async fn apply_toggle(
        &self,
        blog_post_id: i32,
        seller_id: &str,
        requested: BlogReactionType,
    ) -> ApiResult<ReactionTransition> {
        let mut attempt = 0;
        loop {
            match self
                .reactions
                .toggle(blog_post_id, seller_id, requested)
                .await?
            {
                ToggleOutcome::Applied(transition) => return Ok(transition),
                ToggleOutcome::PostNotFound => {
                    return Err(ApiError::not_found("BlogPost", blog_post_id))
                }
                ToggleOutcome::Conflict if attempt < TOGGLE_RETRIES => {
                    attempt += 1;
                    tracing::debug!(blog_post_id, seller_id, "Reaction insert raced, retrying");
                }
                ToggleOutcome::Conflict => {
                    return Err(ApiError::conflict(
                        "BlogReaction",
                        format!("{}:{}", blog_post_id, seller_id),
                    ))
                }
            }
        }
    }

    /// Current reaction of a seller on a post
    #[instrument(skip(self))]
    pub async fn reaction_for(
        &self,
        blog_post_id: i32,
        seller_id: &str,
    ) -> ApiResult<Option<BlogReactionType>> {
        let reaction = self.reactions.find(blog_post_id, seller_id.trim()).await?;
        Ok(reaction.map(|r| r.reaction))
    }

    async fn ensure_category(&self, category_id: i32) -> ApiResult<()> {
        if self.blogs.category_exists(category_id).await? {
            Ok(())
        } else {
            Err(ApiError::not_found("BlogCategory", category_id))
        }
    }
}
