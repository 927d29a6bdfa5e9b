// Shorts package generation.
// Implements: prompt building, the completion call, response extraction, and the HTTP handler.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod extractor;
pub mod generator;
pub mod handlers;
pub mod prompts;
