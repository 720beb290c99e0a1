//! GraphQL type definitions for the content subgraph
//!
//! Object types wrap the database models; ids are exposed as GraphQL `ID`s
//! and parsed back with [`parse_id`].

mod blog;
mod community;
mod federation;

pub use blog::{BlogCategory, BlogPost};
pub use community::{CommunityCategory, CommunityComment, CommunityPost, CommunitySubcategory};
pub use federation::{Admin, Seller, User};

use async_graphql::ID;

use crate::error::{ApiError, ApiResult};

/// Parse a GraphQL `ID` argument into a numeric row id
pub fn parse_id(id: &ID, field: &str) -> ApiResult<i32> {
    id.as_str()
        .trim()
        .parse::<i32>()
        .map_err(|_| ApiError::BadRequest(format!("{} is not a valid id: {:?}", field, id.as_str())))
}
