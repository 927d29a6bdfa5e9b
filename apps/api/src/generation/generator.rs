//! Shorts generation — orchestrates one request.
//!
//! Flow: build_prompt → completion call → extract_package.
//! One upstream call per request; any failure aborts the request.

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::extractor::{extract_package, Extraction};
use crate::generation::prompts::build_prompt;
use crate::llm_client::CompletionClient;

/// Runs the generation pipeline for a validated topic.
pub async fn generate_package(
    llm: &dyn CompletionClient,
    topic: &str,
) -> Result<Extraction, AppError> {
    let request_id = Uuid::new_v4();

    async move {
        info!("Generating package for topic {topic:?}");

        let prompt = build_prompt(topic);
        let raw = llm.complete(&prompt.combined()).await?;

        let extraction = extract_package(&raw);
        info!(
            "Extracted package via {} strategy ({} of 5 fields present)",
            extraction.strategy(),
            extraction.package().present_fields()
        );

        Ok::<_, AppError>(extraction)
    }
    .instrument(info_span!("generate", %request_id))
    .await
}
