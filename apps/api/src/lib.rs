//! Content subgraph library
//!
//! Blog and community content served as a federated GraphQL subgraph. The
//! modules are exposed for the binary and for integration tests.

pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use graphql::{build_schema, ContentSchema, SchemaBuilder};
