//! Community repository for categories, posts and comments
//!
//! Comment inserts and deletes change the parent post's `comments` counter
//! in the same transaction, so the counter always matches the row count.

use sqlx::PgPool;

use super::utils::{
    contains_pattern, order_clause, COMMUNITY_COMMENT_COLUMNS, COMMUNITY_POST_COLUMNS,
};
use crate::models::{
    community::{CommunityPostChanges, NewCommunityComment, NewCommunityPost},
    CommunityCategory, CommunityComment, CommunityPost, CommunityPostFilter,
    CommunityPostSortField, CommunitySubcategory, SortDirection,
};

/// Filter predicate shared by `list_posts` and `count_posts`; binds $1..$3
const COMMUNITY_POST_FILTER: &str = r#"
    WHERE ($1::INT4 IS NULL OR community_subcategory_id = $1)
      AND ($2::TEXT IS NULL OR author_id = $2)
      AND ($3::TEXT IS NULL OR title ILIKE $3 OR content ILIKE $3)
"#;

/// Repository for community database operations
#[derive(Clone)]
pub struct CommunityRepository {
    pool: PgPool,
}

impl CommunityRepository {
    /// Create a new CommunityRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ========== Categories ==========

    pub async fn list_categories(&self) -> Result<Vec<CommunityCategory>, sqlx::Error> {
        sqlx::query_as::<_, CommunityCategory>(
            "SELECT id, name FROM community_categories ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Subcategories of several categories, for the DataLoader
    pub async fn find_subcategories_by_category_ids(
        &self,
        category_ids: &[i32],
    ) -> Result<Vec<CommunitySubcategory>, sqlx::Error> {
        sqlx::query_as::<_, CommunitySubcategory>(
            r#"
            SELECT id, community_category_id, name
            FROM community_subcategories
            WHERE community_category_id = ANY($1)
            ORDER BY name ASC
            "#,
        )
        .bind(category_ids)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn subcategory_exists(&self, id: i32) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM community_subcategories WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    // ========== Posts ==========

    pub async fn list_posts(
        &self,
        filter: &CommunityPostFilter,
        sort: CommunityPostSortField,
        direction: SortDirection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CommunityPost>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM community_posts {} {} LIMIT $4 OFFSET $5",
            COMMUNITY_POST_COLUMNS,
            COMMUNITY_POST_FILTER,
            order_clause(sort.column(), direction, "id")
        );
        sqlx::query_as::<_, CommunityPost>(&sql)
            .bind(filter.subcategory_id)
            .bind(filter.author_id.as_deref())
            .bind(contains_pattern(filter.search.as_deref()))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn count_posts(&self, filter: &CommunityPostFilter) -> Result<i64, sqlx::Error> {
        let sql = format!("SELECT COUNT(*) FROM community_posts {}", COMMUNITY_POST_FILTER);
        sqlx::query_scalar(&sql)
            .bind(filter.subcategory_id)
            .bind(filter.author_id.as_deref())
            .bind(contains_pattern(filter.search.as_deref()))
            .fetch_one(&self.pool)
            .await
    }

    pub async fn find_post(&self, id: i32) -> Result<Option<CommunityPost>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM community_posts WHERE id = $1",
            COMMUNITY_POST_COLUMNS
        );
        sqlx::query_as::<_, CommunityPost>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create_post(&self, post: &NewCommunityPost) -> Result<CommunityPost, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO community_posts (title, content, images, author_id, community_subcategory_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            COMMUNITY_POST_COLUMNS
        );
        sqlx::query_as::<_, CommunityPost>(&sql)
            .bind(&post.title)
            .bind(&post.content)
            .bind(&post.images)
            .bind(&post.author_id)
            .bind(post.community_subcategory_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Apply a partial update; returns `None` if the post does not exist
    pub async fn update_post(
        &self,
        id: i32,
        changes: &CommunityPostChanges,
    ) -> Result<Option<CommunityPost>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE community_posts SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                images = COALESCE($4, images),
                community_subcategory_id = COALESCE($5, community_subcategory_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            COMMUNITY_POST_COLUMNS
        );
        sqlx::query_as::<_, CommunityPost>(&sql)
            .bind(id)
            .bind(changes.title.as_deref())
            .bind(changes.content.as_deref())
            .bind(changes.images.as_deref())
            .bind(changes.community_subcategory_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Delete a post and, through the cascade, its comments
    pub async fn delete_post(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM community_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Atomically add one like; returns `None` if the post does not exist
    pub async fn increment_likes(&self, id: i32) -> Result<Option<CommunityPost>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE community_posts SET likes = likes + 1, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            COMMUNITY_POST_COLUMNS
        );
        sqlx::query_as::<_, CommunityPost>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    // ========== Comments ==========

    /// Comments on a post, newest first
    pub async fn list_comments(
        &self,
        post_id: i32,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CommunityComment>, sqlx::Error> {
        let sql = format!(
            r#"
            SELECT {} FROM community_comments
            WHERE community_post_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
            COMMUNITY_COMMENT_COLUMNS
        );
        sqlx::query_as::<_, CommunityComment>(&sql)
            .bind(post_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn count_comments(&self, post_id: i32) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM community_comments WHERE community_post_id = $1")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Insert a comment and bump the post's counter in one transaction
    ///
    /// Returns `None`, with nothing written, if the post does not exist.
    pub async fn create_comment(
        &self,
        comment: &NewCommunityComment,
    ) -> Result<Option<CommunityComment>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let post: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE community_posts SET comments = comments + 1, updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(comment.community_post_id)
        .fetch_optional(&mut *tx)
        .await?;

        if post.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let sql = format!(
            r#"
            INSERT INTO community_comments (community_post_id, seller_id, content)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            COMMUNITY_COMMENT_COLUMNS
        );
        let created = sqlx::query_as::<_, CommunityComment>(&sql)
            .bind(comment.community_post_id)
            .bind(&comment.seller_id)
            .bind(&comment.content)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(created))
    }

    pub async fn update_comment(
        &self,
        id: i32,
        content: &str,
    ) -> Result<Option<CommunityComment>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE community_comments SET content = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            COMMUNITY_COMMENT_COLUMNS
        );
        sqlx::query_as::<_, CommunityComment>(&sql)
            .bind(id)
            .bind(content)
            .fetch_optional(&self.pool)
            .await
    }

    /// Delete a comment and decrement the post's counter in one transaction
    ///
    /// Returns the parent post id, or `None` if the comment does not exist
    /// (the transaction is rolled back and no counter changes).
    pub async fn delete_comment(&self, id: i32) -> Result<Option<i32>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let post_id: Option<i32> = sqlx::query_scalar(
            "DELETE FROM community_comments WHERE id = $1 RETURNING community_post_id",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(post_id) = post_id else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query(
            "UPDATE community_posts SET comments = comments - 1, updated_at = NOW() WHERE id = $1",
        )
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(post_id))
    }
}
