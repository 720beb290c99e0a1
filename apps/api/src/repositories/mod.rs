//! Database repository layer for the content subgraph
//!
//! This module provides the data access layer, centralizing all database
//! operations into reusable repositories. Services own the validation and
//! error translation; repositories return raw `sqlx::Error`s.

pub mod blog;
pub mod community;
pub mod reaction;
pub mod utils;

pub use blog::BlogRepository;
pub use community::CommunityRepository;
pub use reaction::{ReactionRepository, ToggleOutcome};
