//! Identity guard for mutations without an explicit identity argument
//!
//! Publishing, updating and deleting content, and liking a community post,
//! act as the request actor forwarded by the gateway. Mutations that accept
//! a `sellerId`/`authorId` argument resolve their identity in the resolver
//! instead, since the argument may stand in for the header.

use async_graphql::{Context, Guard};
use tracing::debug;

use crate::error::{to_graphql_error, ApiError};
use crate::models::Actor;

/// Rejects the field with `UNAUTHORIZED` when the request carries no actor
#[derive(Debug, Clone, Copy, Default)]
pub struct ActorGuard;

impl Guard for ActorGuard {
    async fn check(&self, ctx: &Context<'_>) -> async_graphql::Result<()> {
        match ctx.data_opt::<Actor>() {
            Some(actor) => {
                debug!(actor_id = %actor.id, "Actor present for guarded mutation");
                Ok(())
            }
            None => Err(to_graphql_error(ApiError::Unauthorized)),
        }
    }
}
