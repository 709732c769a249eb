use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};

use super::schema::BlogSchema;
use crate::error::Result;

/// The single route: `POST` executes queries, `GET` serves GraphiQL.
pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

pub fn router(schema: BlogSchema) -> Router {
    Router::new().route(
        GRAPHQL_PATH,
        get(graphiql).post_service(GraphQL::new(schema)),
    )
}

pub async fn run_server(schema: BlogSchema, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("GraphQL endpoint on http://{}{}", addr, GRAPHQL_PATH);

    axum::serve(listener, router(schema)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::build_schema;
    use crate::storage::BlogRepository;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    async fn test_router() -> Router {
        let repo = BlogRepository::connect_in_memory().await.unwrap();
        repo.migrate().await.unwrap();
        repo.insert("First", "Hello").await.unwrap();
        router(build_schema(repo))
    }

    #[tokio::test]
    async fn test_post_executes_query() {
        let app = test_router().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(GRAPHQL_PATH)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"query":"{ blogs { id title } }"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["data"],
            serde_json::json!({ "blogs": [{ "id": 1, "title": "First" }] })
        );
    }

    #[tokio::test]
    async fn test_post_unknown_field_reports_error() {
        let app = test_router().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(GRAPHQL_PATH)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"query":"{ authors { id } }"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(!body["errors"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_serves_graphiql() {
        let app = test_router().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(GRAPHQL_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_other_routes_are_not_found() {
        let app = test_router().await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
