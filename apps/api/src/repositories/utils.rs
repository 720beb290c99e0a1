//! Shared utility functions for repositories
//!
//! This module provides common functions used across repositories.

use crate::models::SortDirection;

/// Escape special characters in ILIKE patterns to prevent pattern injection.
///
/// ILIKE uses `%` for any sequence and `_` for single character wildcards.
/// If user input contains these characters, they must be escaped to match literally.
///
/// # Example
/// ```
/// use content_subgraph::repositories::utils::escape_ilike;
///
/// let input = "100%";
/// let escaped = escape_ilike(input);
/// assert_eq!(escaped, r"100\%");
/// ```
pub fn escape_ilike(pattern: &str) -> String {
    pattern
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}

/// `%term%` pattern for a substring search; blank terms match everything
pub fn contains_pattern(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|term| !term.is_empty())
        .map(|term| format!("%{}%", escape_ilike(term)))
}

/// ORDER BY clause for a whitelisted column, ties broken on the newest id
pub fn order_clause(column: &str, direction: SortDirection, id_column: &str) -> String {
    format!(
        "ORDER BY {} {} NULLS LAST, {} DESC",
        column,
        direction.sql(),
        id_column
    )
}

// ============================================================================
// SQL Column Constants
//
// These constants define the SELECT column lists for each entity type,
// reducing duplication and ensuring consistency across queries.
// ============================================================================

/// SQL columns for blog post queries; expects `blog_posts` aliased as `b`
pub const BLOG_POST_COLUMNS: &str = r#"
    b.id, b.title, b.content, b.author_id,
    b.blog_category_id, b.blog_type,
    b.is_published, b.published_at,
    b.created_at, b.updated_at,
    (SELECT COUNT(*) FROM blog_reactions r
        WHERE r.blog_post_id = b.id AND r.reaction = 'LIKE')::INT4 AS likes,
    (SELECT COUNT(*) FROM blog_reactions r
        WHERE r.blog_post_id = b.id AND r.reaction = 'DISLIKE')::INT4 AS dislikes
"#;

/// SQL columns for blog category queries
pub const BLOG_CATEGORY_COLUMNS: &str = "id, name, icon, description";

/// SQL columns for blog reaction queries
pub const BLOG_REACTION_COLUMNS: &str = r#"
    id, blog_post_id, seller_id, reaction, created_at, updated_at
"#;

/// SQL columns for community post queries
pub const COMMUNITY_POST_COLUMNS: &str = r#"
    id, title, content, images, author_id,
    community_subcategory_id, likes, comments,
    created_at, updated_at
"#;

/// SQL columns for community comment queries
pub const COMMUNITY_COMMENT_COLUMNS: &str = r#"
    id, community_post_id, seller_id, content, created_at, updated_at
"#;
