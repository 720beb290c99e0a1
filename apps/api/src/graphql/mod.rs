//! GraphQL schema and resolvers for the content subgraph
//!
//! This module contains the federated async-graphql schema including:
//! - Query resolvers for blog and community content
//! - Mutation resolvers for posts, reactions and comments
//! - Entity resolvers for the federation gateway
//! - Page-number pagination shared by every list query

pub mod guards;
pub mod loaders;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, ContentSchema, SchemaBuilder};
