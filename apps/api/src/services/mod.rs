//! Business logic services for the content subgraph
//!
//! Services validate input, translate repository results into `ApiError`s
//! and log state changes. GraphQL resolvers call them through the schema
//! data.

pub mod blog;
pub mod community;
pub mod health;
pub mod validation;

pub use blog::BlogService;
pub use community::CommunityService;
pub use health::HealthService;
