//! GraphQL mutations for the content subgraph
//!
//! This module contains all mutation resolvers, organized by domain. Every
//! mutation needs an acting identity and fails with `UNAUTHORIZED` before
//! touching the database when there is none. Mutations without an identity
//! argument use `ActorGuard`; the rest call `acting_identity`.

mod blog;
mod community;

pub use blog::{BlogMutation, CreateBlogPostInput, UpdateBlogPostInput};
pub use community::{
    CommunityMutation, CreateCommunityCommentInput, CreateCommunityPostInput,
    UpdateCommunityPostInput,
};

use async_graphql::{Context, MergedObject, Result};

use crate::error::to_graphql_error;
use crate::models::actor::resolve_actor_id;
use crate::models::Actor;

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(BlogMutation, CommunityMutation);

/// Identity performing a mutation: the explicit argument, else the request actor
pub(crate) fn acting_identity(ctx: &Context<'_>, explicit: Option<&str>) -> Result<String> {
    resolve_actor_id(explicit, ctx.data_opt::<Actor>()).map_err(to_graphql_error)
}
