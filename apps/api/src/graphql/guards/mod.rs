//! GraphQL guards for the content subgraph
//!
//! Guards run before a resolver body and reject the request without
//! touching the database.

mod actor;

pub use actor::ActorGuard;
