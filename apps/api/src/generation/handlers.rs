//! Axum route handlers for the Generation API.

use axum::{body::Bytes, extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::generation::generator::generate_package;
use crate::models::package::GeneratedPackage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub topic: Option<Value>,
}

impl GenerateRequest {
    /// The topic as prompt text. Missing and falsy values (`null`, `false`,
    /// `0`, `""`) count as absent; other values are rendered the way a
    /// browser would stringify them.
    pub fn topic(&self) -> Option<String> {
        match self.topic.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(topic) if topic.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            value => Some(render_topic(value)),
        }
    }
}

fn render_topic(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(render_topic)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// POST /api/generate
///
/// Builds the prompt, calls the completion API once, and returns the extracted package.
/// A body that is not valid JSON is a generation failure, not a 4xx.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GeneratedPackage>, AppError> {
    let request: GenerateRequest = serde_json::from_slice(&body)?;
    let topic = request.topic().ok_or(AppError::MissingTopic)?;

    let extraction = generate_package(state.llm.as_ref(), &topic).await?;

    Ok(Json(extraction.into_package()))
}
