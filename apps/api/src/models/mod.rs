//! Database models and domain types
//!
//! SQLx row types for blog posts, reactions and community content, plus the
//! filter/ordering types repositories accept.

pub mod actor;
pub mod blog;
pub mod community;
pub mod reaction;

pub use actor::Actor;
pub use blog::{BlogCategory, BlogPost, BlogPostFilter, BlogPostSortField, BlogType};
pub use community::{
    CommunityCategory, CommunityComment, CommunityPost, CommunityPostFilter,
    CommunityPostSortField, CommunitySubcategory,
};
pub use reaction::{BlogReaction, BlogReactionType, ReactionTransition};

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, async_graphql::Enum)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}
