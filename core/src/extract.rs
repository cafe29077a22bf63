//! Splitting raw model output into conversational text and the A2UI JSON
//! segment, plus allow-list extraction from the orchestrator stage.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Marker separating conversational prose from the A2UI JSON payload.
/// This is the wire contract with every downstream renderer; do not change it.
pub const A2UI_DELIMITER: &str = "---a2ui_JSON---";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Delimiter '{A2UI_DELIMITER}' not found")]
    DelimiterMissing,

    #[error("JSON segment after the delimiter is empty")]
    EmptyJsonSegment,
}

/// Result of splitting one raw model response.
#[derive(Debug, Clone)]
pub struct ExtractedResponse {
    /// Prose before the delimiter, trimmed.
    pub conversational: String,
    /// JSON segment with any Markdown code fence removed; what gets validated.
    pub json_text: String,
    /// JSON segment as the model produced it (trimmed only). Kept verbatim so
    /// the accepted response can be re-joined without formatting drift.
    pub json_raw: String,
}

/// Split `raw` at the first occurrence of [`A2UI_DELIMITER`].
///
/// Never panics on malformed input; every failure is a typed error the retry
/// loop can fold into the next corrective prompt.
pub fn split_response(raw: &str) -> Result<ExtractedResponse, ExtractionError> {
    let idx = raw.find(A2UI_DELIMITER).ok_or(ExtractionError::DelimiterMissing)?;
    let before = &raw[..idx];
    let after = raw[idx + A2UI_DELIMITER.len()..].trim();

    if after.is_empty() {
        return Err(ExtractionError::EmptyJsonSegment);
    }

    let cleaned = strip_code_fence(after);
    if cleaned.is_empty() {
        return Err(ExtractionError::EmptyJsonSegment);
    }

    Ok(ExtractedResponse {
        conversational: before.trim().to_string(),
        json_text: cleaned,
        json_raw: after.to_string(),
    })
}

/// Remove a wrapping Markdown code fence, line-oriented: if the first line is
/// a fence marker (``` or ```json), drop it, and drop the last line too when
/// it is exactly the closing fence.
fn strip_code_fence(text: &str) -> String {
    let mut lines: Vec<&str> = text.lines().collect();
    if lines.first().map(|l| l.trim_start().starts_with("```")).unwrap_or(false) {
        lines.remove(0);
        if lines.last().map(|l| l.trim() == "```").unwrap_or(false) {
            lines.pop();
        }
    }
    lines.join("\n").trim().to_string()
}

/// Parse the UI orchestrator's structured output into the ordered list of
/// allowed component names, lower-cased.
///
/// Expected shape: `{"widgets": [{"name": "..."} , ...]}`. Anything else
/// (parse failure, wrong shape, empty list) yields `None`, meaning "apply no
/// restriction".
pub fn extract_allowed_components(raw: &str) -> Option<Vec<String>> {
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            debug!(target: "extract", error = %e, "Orchestrator output is not JSON; no restriction");
            return None;
        }
    };

    let widgets = parsed.get("widgets")?.as_array()?;
    let names: Vec<String> = widgets
        .iter()
        .filter_map(|w| w.get("name").and_then(|n| n.as_str()))
        .map(|n| n.to_lowercase())
        .collect();

    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}
