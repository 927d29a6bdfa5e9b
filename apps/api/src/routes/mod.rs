pub mod health;
pub mod index;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::panic_response;
use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/generate", post(handlers::handle_generate))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::generator::tests::StubClient;
    use crate::llm_client::{CompletionClient, LlmError};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt; // for oneshot

    fn app_with(stub: StubClient) -> Router {
        build_router(AppState {
            llm: Arc::new(stub),
        })
    }

    struct PanickingClient;

    #[async_trait]
    impl CompletionClient for PanickingClient {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            panic!("completion client blew up");
        }
    }

    fn generate_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_check_endpoint() {
        let app = app_with(StubClient::replying(""));
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "shorts-api");
    }

    #[tokio::test]
    async fn test_index_serves_html() {
        let app = app_with(StubClient::replying(""));
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("/api/generate"));
        assert!(html.contains("Copied!"));
    }

    #[tokio::test]
    async fn test_generate_without_topic_is_bad_request() {
        let app = app_with(StubClient::replying("{}"));

        let response = app.oneshot(generate_request("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Topic is required" }));
    }

    #[tokio::test]
    async fn test_generate_with_empty_topic_is_bad_request() {
        let app = app_with(StubClient::replying("{}"));

        let response = app
            .oneshot(generate_request(r#"{"topic": ""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_without_topic_does_not_call_llm() {
        let stub = Arc::new(StubClient::replying("{}"));
        let app = build_router(AppState { llm: stub.clone() });

        app.oneshot(generate_request("{}")).await.unwrap();
        assert!(stub.last_prompt.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_generate_returns_parsed_package() {
        let app = app_with(StubClient::replying(
            "Sure! {\"research\":\"r\",\"hook\":\"h\",\"script\":\"s\",\"endingTwist\":\"e\",\"soraPrompt\":\"p\"}",
        ));

        let response = app
            .oneshot(generate_request(r#"{"topic": "Time travel paradoxes"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "research": "r",
                "hook": "h",
                "script": "s",
                "endingTwist": "e",
                "soraPrompt": "p"
            })
        );
    }

    #[tokio::test]
    async fn test_generate_omits_keys_missing_from_model_json() {
        let app = app_with(StubClient::replying(r#"{"hook": "only"}"#));

        let response = app
            .oneshot(generate_request(r#"{"topic": "x"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "hook": "only" }));
    }

    #[tokio::test]
    async fn test_generate_degrades_to_empty_strings() {
        let app = app_with(StubClient::replying("nothing useful here"));

        let response = app
            .oneshot(generate_request(r#"{"topic": "x"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "research": "",
                "hook": "",
                "script": "",
                "endingTwist": "",
                "soraPrompt": ""
            })
        );
    }

    #[tokio::test]
    async fn test_generate_upstream_failure_is_generic_500() {
        let app = app_with(StubClient::failing(503));

        let response = app
            .oneshot(generate_request(r#"{"topic": "x"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Failed to generate content" }));
        assert!(!body.to_string().contains("stubbed failure"));
    }

    #[tokio::test]
    async fn test_generate_malformed_body_is_generic_500() {
        let app = app_with(StubClient::replying("{}"));

        let response = app.oneshot(generate_request("{topic:")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to generate content" })
        );
    }

    #[tokio::test]
    async fn test_generate_panic_is_generic_500() {
        let app = build_router(AppState {
            llm: Arc::new(PanickingClient),
        });

        let response = app
            .oneshot(generate_request(r#"{"topic": "x"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Failed to generate content" }));
        assert!(!body.to_string().contains("blew up"));
    }

    #[tokio::test]
    async fn test_generate_numeric_topic_reaches_llm() {
        let stub = Arc::new(StubClient::replying("{}"));
        let app = build_router(AppState { llm: stub.clone() });

        let response = app
            .oneshot(generate_request(r#"{"topic": 42}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let prompt = stub.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Topic: 42\n\n"));
    }
}
