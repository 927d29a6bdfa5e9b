//! Response Extractor — turns raw model text into a `GeneratedPackage`.
//!
//! Two strategies, tried in order:
//! 1. JSON: the span from the first `{` to the last `}` is deserialized as-is.
//!    The span is greedy, not brace-balanced; stray braces in prose make it
//!    unparseable and the scan below takes over.
//! 2. Markers: ordered, case-sensitive substring search for section headings.
//!
//! Extraction never fails. Worst case is a package of empty strings.

use std::fmt;

use tracing::warn;

use crate::models::package::GeneratedPackage;

/// Section headings in scan order. Each section runs until the next heading.
const RESEARCH: &str = "RESEARCH";
const HOOK: &str = "HOOK";
const SCRIPT: &str = "SCRIPT";
const ENDING: &str = "ENDING";
const SORA: &str = "SORA";

/// Which strategy produced the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Json,
    Markers,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Json => write!(f, "json"),
            Strategy::Markers => write!(f, "markers"),
        }
    }
}

/// Outcome of extraction, tagged by the strategy that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Parsed(GeneratedPackage),
    Scanned(GeneratedPackage),
}

impl Extraction {
    pub fn strategy(&self) -> Strategy {
        match self {
            Extraction::Parsed(_) => Strategy::Json,
            Extraction::Scanned(_) => Strategy::Markers,
        }
    }

    pub fn package(&self) -> &GeneratedPackage {
        match self {
            Extraction::Parsed(p) | Extraction::Scanned(p) => p,
        }
    }

    pub fn into_package(self) -> GeneratedPackage {
        match self {
            Extraction::Parsed(p) | Extraction::Scanned(p) => p,
        }
    }
}

/// Runs the JSON strategy, falling back to the marker scan.
pub fn extract_package(text: &str) -> Extraction {
    if let Some(span) = json_span(text) {
        match serde_json::from_str::<GeneratedPackage>(span) {
            Ok(package) => return Extraction::Parsed(package),
            Err(e) => warn!("JSON span did not parse, scanning for markers: {e}"),
        }
    }

    Extraction::Scanned(scan_markers(text))
}

/// Greedy span from the first `{` to the last `}` after it.
fn json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Fills every field from section headings; missing headings give `""`.
fn scan_markers(text: &str) -> GeneratedPackage {
    GeneratedPackage {
        research: Some(section(text, RESEARCH, Some(HOOK))),
        hook: Some(section(text, HOOK, Some(SCRIPT))),
        script: Some(section(text, SCRIPT, Some(ENDING))),
        ending_twist: Some(section(text, ENDING, Some(SORA))),
        sora_prompt: Some(section(text, SORA, None)),
    }
}

/// Text between the end of `start` and the next `end` after it, trimmed.
/// Runs to end of text when `end` is `None` or does not occur.
fn section(text: &str, start: &str, end: Option<&str>) -> String {
    let Some(start_idx) = text.find(start) else {
        return String::new();
    };
    let rest = &text[start_idx + start.len()..];

    let body = match end.and_then(|marker| rest.find(marker)) {
        Some(end_idx) => &rest[..end_idx],
        None => rest,
    };

    body.trim().to_string()
}
