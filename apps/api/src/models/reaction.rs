//! Blog reaction models and the like/dislike state machine
//!
//! Each (post, seller) pair is in one of three states: no reaction, liked or
//! disliked. A request for a polarity the pair already has removes it, a
//! request for the opposite polarity flips it, and a request on a pair with
//! no reaction inserts one. The `blog_reactions` table holds at most one row
//! per pair.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Reaction polarity, matching the PostgreSQL `blog_reaction_type` enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type, async_graphql::Enum)]
#[sqlx(type_name = "blog_reaction_type", rename_all = "UPPERCASE")]
pub enum BlogReactionType {
    Like,
    Dislike,
}

/// Reaction record from the blog_reactions table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogReaction {
    pub id: i32,
    pub blog_post_id: i32,
    pub seller_id: String,
    pub reaction: BlogReactionType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row change needed to honour a like/dislike request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionTransition {
    /// No row exists; insert one with this polarity
    Insert(BlogReactionType),
    /// The row has the opposite polarity; update it to this one
    Flip(BlogReactionType),
    /// The row already has the requested polarity; delete it
    Remove,
}

impl ReactionTransition {
    /// Decide the change for a request given the pair's current reaction
    pub fn plan(current: Option<BlogReactionType>, requested: BlogReactionType) -> Self {
        match current {
            None => Self::Insert(requested),
            Some(existing) if existing == requested => Self::Remove,
            Some(_) => Self::Flip(requested),
        }
    }

    /// Reaction the pair holds once the change is applied
    pub fn resulting(&self) -> Option<BlogReactionType> {
        match self {
            Self::Insert(kind) | Self::Flip(kind) => Some(*kind),
            Self::Remove => None,
        }
    }
}
