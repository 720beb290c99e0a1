//! Blog reaction repository
//!
//! The toggle runs in a single transaction: the post row is share-locked so
//! it cannot be deleted mid-toggle, the pair's reaction row is locked with
//! `FOR UPDATE`, and inserts rely on the `(blog_post_id, seller_id)` unique
//! constraint to detect a concurrent insert.

use sqlx::PgPool;

use super::utils::BLOG_REACTION_COLUMNS;
use crate::models::{BlogReaction, BlogReactionType, ReactionTransition};

/// Result of a reaction toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The change was committed
    Applied(ReactionTransition),
    /// The blog post does not exist
    PostNotFound,
    /// A concurrent insert for the same pair won; nothing was written
    Conflict,
}

/// Repository for blog reaction database operations
#[derive(Clone)]
pub struct ReactionRepository {
    pool: PgPool,
}

impl ReactionRepository {
    /// Create a new ReactionRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Current reaction row for a (post, seller) pair
    pub async fn find(
        &self,
        blog_post_id: i32,
        seller_id: &str,
    ) -> Result<Option<BlogReaction>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM blog_reactions WHERE blog_post_id = $1 AND seller_id = $2",
            BLOG_REACTION_COLUMNS
        );
        sqlx::query_as::<_, BlogReaction>(&sql)
            .bind(blog_post_id)
            .bind(seller_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Toggle a like/dislike for a (post, seller) pair
    pub async fn toggle(
        &self,
        blog_post_id: i32,
        seller_id: &str,
        requested: BlogReactionType,
    ) -> Result<ToggleOutcome, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let post: Option<i32> =
            sqlx::query_scalar("SELECT id FROM blog_posts WHERE id = $1 FOR SHARE")
                .bind(blog_post_id)
                .fetch_optional(&mut *tx)
                .await?;

        if post.is_none() {
            tx.rollback().await?;
            return Ok(ToggleOutcome::PostNotFound);
        }

        let current: Option<BlogReactionType> = sqlx::query_scalar(
            r#"
            SELECT reaction FROM blog_reactions
            WHERE blog_post_id = $1 AND seller_id = $2
            FOR UPDATE
            "#,
        )
        .bind(blog_post_id)
        .bind(seller_id)
        .fetch_optional(&mut *tx)
        .await?;

        let transition = ReactionTransition::plan(current, requested);

        let rows_affected = match transition {
            ReactionTransition::Insert(kind) => {
                sqlx::query(
                    r#"
                    INSERT INTO blog_reactions (blog_post_id, seller_id, reaction)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (blog_post_id, seller_id) DO NOTHING
                    "#,
                )
                .bind(blog_post_id)
                .bind(seller_id)
                .bind(kind)
                .execute(&mut *tx)
                .await?
                .rows_affected()
            }
            ReactionTransition::Flip(kind) => {
                sqlx::query(
                    r#"
                    UPDATE blog_reactions SET reaction = $3, updated_at = NOW()
                    WHERE blog_post_id = $1 AND seller_id = $2
                    "#,
                )
                .bind(blog_post_id)
                .bind(seller_id)
                .bind(kind)
                .execute(&mut *tx)
                .await?
                .rows_affected()
            }
            ReactionTransition::Remove => {
                sqlx::query("DELETE FROM blog_reactions WHERE blog_post_id = $1 AND seller_id = $2")
                    .bind(blog_post_id)
                    .bind(seller_id)
                    .execute(&mut *tx)
                    .await?
                    .rows_affected()
            }
        };

        if rows_affected == 0 {
            tx.rollback().await?;
            return Ok(ToggleOutcome::Conflict);
        }

        tx.commit().await?;
        Ok(ToggleOutcome::Applied(transition))
    }
}
