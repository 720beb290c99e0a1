//! Community models
//!
//! Categories and subcategories are static reference data. Posts carry
//! denormalized `likes` and `comments` counters; the comment counter always
//! equals the number of rows in `community_comments` for the post.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Community category record from the community_categories table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommunityCategory {
    pub id: i32,
    pub name: String,
}

/// Community subcategory record from the community_subcategories table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommunitySubcategory {
    pub id: i32,
    pub community_category_id: i32,
    pub name: String,
}

/// Community post record from the community_posts table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommunityPost {
    pub id: i32,

    pub title: String,

    pub content: String,

    /// Image URLs attached to the post
    pub images: Vec<String>,

    /// Admin who published the post
    pub author_id: String,

    pub community_subcategory_id: Option<i32>,

    pub likes: i32,

    /// Number of comments on the post
    pub comments: i32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Community comment record from the community_comments table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommunityComment {
    pub id: i32,
    pub community_post_id: i32,
    /// Seller who wrote the comment
    pub seller_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filter applied to community post listings
#[derive(Debug, Clone, Default)]
pub struct CommunityPostFilter {
    pub subcategory_id: Option<i32>,
    pub author_id: Option<String>,
    pub search: Option<String>,
}

/// Sortable community post columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, async_graphql::Enum)]
pub enum CommunityPostSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Likes,
    Comments,
    Title,
}

impl CommunityPostSortField {
    /// Whitelisted SQL column for ORDER BY
    pub fn column(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Likes => "likes",
            Self::Comments => "comments",
            Self::Title => "title",
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewCommunityPost {
    pub title: String,
    pub content: String,
    pub images: Vec<String>,
    pub author_id: String,
    pub community_subcategory_id: Option<i32>,
}

/// Partial update of a community post; `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct CommunityPostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub images: Option<Vec<String>>,
    pub community_subcategory_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewCommunityComment {
    pub community_post_id: i32,
    pub seller_id: String,
    pub content: String,
}
