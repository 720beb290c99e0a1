//! Blog repository for blog posts and categories
//!
//! Reaction counts are computed in the SELECT (see `BLOG_POST_COLUMNS`), so
//! every `BlogPost` returned here carries fresh `likes`/`dislikes`.

use sqlx::PgPool;

use super::utils::{
    contains_pattern, order_clause, BLOG_CATEGORY_COLUMNS, BLOG_POST_COLUMNS,
};
use crate::models::{
    blog::{BlogPostChanges, NewBlogPost},
    BlogCategory, BlogPost, BlogPostFilter, BlogPostSortField, SortDirection,
};

/// Filter predicate shared by `list` and `count`; binds $1..$5
const BLOG_POST_FILTER: &str = r#"
    WHERE ($1::BOOLEAN IS NULL OR b.is_published = $1)
      AND ($2::INT4 IS NULL OR b.blog_category_id = $2)
      AND ($3::blog_type IS NULL OR b.blog_type = $3)
      AND ($4::TEXT IS NULL OR b.author_id = $4)
      AND ($5::TEXT IS NULL OR b.title ILIKE $5 OR b.content ILIKE $5)
"#;

/// Repository for blog database operations
#[derive(Clone)]
pub struct BlogRepository {
    pool: PgPool,
}

impl BlogRepository {
    /// Create a new BlogRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List blog posts matching a filter, one page at a time
    pub async fn list(
        &self,
        filter: &BlogPostFilter,
        sort: BlogPostSortField,
        direction: SortDirection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM blog_posts b {} {} LIMIT $6 OFFSET $7",
            BLOG_POST_COLUMNS,
            BLOG_POST_FILTER,
            order_clause(sort.column(), direction, "b.id")
        );
        sqlx::query_as::<_, BlogPost>(&sql)
            .bind(filter.published)
            .bind(filter.category_id)
            .bind(filter.blog_type)
            .bind(filter.author_id.as_deref())
            .bind(contains_pattern(filter.search.as_deref()))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    /// Count blog posts matching a filter
    pub async fn count(&self, filter: &BlogPostFilter) -> Result<i64, sqlx::Error> {
        let sql = format!("SELECT COUNT(*) FROM blog_posts b {}", BLOG_POST_FILTER);
        sqlx::query_scalar(&sql)
            .bind(filter.published)
            .bind(filter.category_id)
            .bind(filter.blog_type)
            .bind(filter.author_id.as_deref())
            .bind(contains_pattern(filter.search.as_deref()))
            .fetch_one(&self.pool)
            .await
    }

    /// Find a blog post by its ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<BlogPost>, sqlx::Error> {
        let sql = format!("SELECT {} FROM blog_posts b WHERE b.id = $1", BLOG_POST_COLUMNS);
        sqlx::query_as::<_, BlogPost>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert a new, unpublished blog post
    pub async fn create(&self, post: &NewBlogPost) -> Result<BlogPost, sqlx::Error> {
        let sql = format!(
            r#"
            WITH b AS (
                INSERT INTO blog_posts (title, content, author_id, blog_category_id, blog_type)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
            )
            SELECT {} FROM b
            "#,
            BLOG_POST_COLUMNS
        );
        sqlx::query_as::<_, BlogPost>(&sql)
            .bind(&post.title)
            .bind(&post.content)
            .bind(&post.author_id)
            .bind(post.blog_category_id)
            .bind(post.blog_type)
            .fetch_one(&self.pool)
            .await
    }

    /// Apply a partial update; returns `None` if the post does not exist
    pub async fn update(
        &self,
        id: i32,
        changes: &BlogPostChanges,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let sql = format!(
            r#"
            WITH b AS (
                UPDATE blog_posts SET
                    title = COALESCE($2, title),
                    content = COALESCE($3, content),
                    blog_category_id = COALESCE($4, blog_category_id),
                    blog_type = COALESCE($5, blog_type),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
            )
            SELECT {} FROM b
            "#,
            BLOG_POST_COLUMNS
        );
        sqlx::query_as::<_, BlogPost>(&sql)
            .bind(id)
            .bind(changes.title.as_deref())
            .bind(changes.content.as_deref())
            .bind(changes.blog_category_id)
            .bind(changes.blog_type)
            .fetch_optional(&self.pool)
            .await
    }

    /// Publish or unpublish a post; `published_at` follows the flag
    pub async fn set_published(
        &self,
        id: i32,
        published: bool,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let sql = format!(
            r#"
            WITH b AS (
                UPDATE blog_posts SET
                    is_published = $2,
                    published_at = CASE WHEN $2 THEN NOW() ELSE NULL END,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
            )
            SELECT {} FROM b
            "#,
            BLOG_POST_COLUMNS
        );
        sqlx::query_as::<_, BlogPost>(&sql)
            .bind(id)
            .bind(published)
            .fetch_optional(&self.pool)
            .await
    }

    /// Delete a post and, through the cascade, its reactions
    pub async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All blog categories, alphabetically
    pub async fn list_categories(&self) -> Result<Vec<BlogCategory>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM blog_categories ORDER BY name ASC",
            BLOG_CATEGORY_COLUMNS
        );
        sqlx::query_as::<_, BlogCategory>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    /// Batch-load categories for the DataLoader
    pub async fn find_categories_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<BlogCategory>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM blog_categories WHERE id = ANY($1)",
            BLOG_CATEGORY_COLUMNS
        );
        sqlx::query_as::<_, BlogCategory>(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
    }

    /// Check if a category exists
    pub async fn category_exists(&self, id: i32) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM blog_categories WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }
}
