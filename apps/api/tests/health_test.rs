//! Integration tests for the HTTP surface
//!
//! Builds the real application router over a lazily-connected pool and
//! drives it with `tower::ServiceExt::oneshot`.

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use content_subgraph::routes::app_router;

fn create_test_app(playground_enabled: bool) -> Router {
    let pool = common::lazy_pool();
    app_router(common::schema(pool.clone()), pool, playground_enabled)
}

async fn body_string(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_root_endpoint() {
    let response = create_test_app(false)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Content subgraph"));
}

#[tokio::test]
async fn test_simple_health_check() {
    let response = create_test_app(false)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let response = create_test_app(false)
        .oneshot(
            Request::builder()
                .uri("/health/live")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "alive");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_playground_only_when_enabled() {
    let response = create_test_app(true)
        .oneshot(
            Request::builder()
                .uri("/graphql/playground")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = create_test_app(false)
        .oneshot(
            Request::builder()
                .uri("/graphql/playground")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_graphql_endpoint_reads_actor_header() {
    // A malformed id fails after the identity check, so the error code shows
    // whether the header reached the resolver
    let request = |with_actor: bool| {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json");
        if with_actor {
            builder = builder.header("x-user-id", "seller-1");
        }
        builder
            .body(Body::from(
                r#"{"query":"mutation { likeBlog(id: \"abc\") { id } }"}"#,
            ))
            .unwrap()
    };

    let response = create_test_app(false).oneshot(request(false)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["errors"][0]["extensions"]["code"], "UNAUTHORIZED");

    let response = create_test_app(false).oneshot(request(true)).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["errors"][0]["extensions"]["code"], "BAD_REQUEST");
}
