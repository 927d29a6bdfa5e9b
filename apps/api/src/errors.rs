use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Message returned for every pipeline failure. Internal detail is only logged.
pub const GENERATION_FAILURE_MESSAGE: &str = "Failed to generate content";
pub const MISSING_TOPIC_MESSAGE: &str = "Topic is required";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Topic is required")]
    MissingTopic,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Malformed request body: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingTopic => (StatusCode::BAD_REQUEST, MISSING_TOPIC_MESSAGE),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILURE_MESSAGE)
            }
            AppError::MalformedRequest(e) => {
                tracing::error!("Malformed request body: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILURE_MESSAGE)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILURE_MESSAGE)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Turns a panic caught by `CatchPanicLayer` into the generic 500.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
