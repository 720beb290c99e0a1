//! GraphQL HTTP endpoint and playground
//!
//! The gateway authenticates callers and forwards their identity in the
//! `x-user-id` / `x-user-role` headers. The handler turns those into an
//! [`Actor`] in the request data; requests without them run anonymously.

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    http::HeaderMap,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};

use crate::graphql::ContentSchema;
use crate::models::actor::{Actor, ACTOR_ID_HEADER, ACTOR_ROLE_HEADER};

/// Read the forwarded identity from request headers
pub fn actor_from_headers(headers: &HeaderMap) -> Option<Actor> {
    let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());
    Actor::from_parts(header(ACTOR_ID_HEADER), header(ACTOR_ROLE_HEADER))
}

/// Execute a GraphQL request, injecting the forwarded actor when present
async fn graphql_handler(
    Extension(schema): Extension<ContentSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();

    if let Some(actor) = actor_from_headers(&headers) {
        tracing::debug!(actor_id = %actor.id, role = ?actor.role, "GraphQL request with actor");
        request = request.data(actor);
    }

    schema.execute(request).await.into()
}

/// GraphQL Playground handler for development
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

/// Routes for `/graphql` and, when enabled, `/graphql/playground`
pub fn graphql_router(schema: ContentSchema, playground_enabled: bool) -> Router {
    let mut router = Router::new().route("/graphql", post(graphql_handler));

    if playground_enabled {
        router = router.route("/graphql/playground", get(graphql_playground));
    }

    router.layer(Extension(schema))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_actor_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(ACTOR_ID_HEADER, HeaderValue::from_static("seller-9"));
        headers.insert(ACTOR_ROLE_HEADER, HeaderValue::from_static("SELLER"));

        let actor = actor_from_headers(&headers).unwrap();
        assert_eq!(actor.id, "seller-9");
        assert_eq!(actor.role.as_deref(), Some("SELLER"));
    }

    #[test]
    fn test_missing_or_blank_id_header() {
        assert!(actor_from_headers(&HeaderMap::new()).is_none());

        let mut headers = HeaderMap::new();
        headers.insert(ACTOR_ID_HEADER, HeaderValue::from_static("  "));
        headers.insert(ACTOR_ROLE_HEADER, HeaderValue::from_static("ADMIN"));
        assert!(actor_from_headers(&headers).is_none());
    }
}
