//! HTTP route handlers for the content subgraph
//!
//! - `/` banner
//! - `/graphql` endpoint and playground
//! - `/health` checks

pub mod graphql;
pub mod health;

pub use graphql::{actor_from_headers, graphql_router};
pub use health::{health_router, HealthState};

use axum::{routing::get, Router};
use sqlx::PgPool;

use crate::graphql::ContentSchema;

/// Application router without the CORS and trace layers
pub fn app_router(schema: ContentSchema, pool: PgPool, playground_enabled: bool) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(graphql_router(schema, playground_enabled))
        // Nested health routes: /health, /health/live, /health/ready
        .nest("/health", health_router(HealthState::new(pool)))
}

async fn root() -> &'static str {
    "Content subgraph - blog and community GraphQL API"
}
