//! Fixed per-turn stage chain: data orchestration, component selection,
//! UI assembly, and follow-up suggestions.

use crate::assembly::{AssemblyOptions, GenerationService, UiAssemblyAgent, UiResponse};
use crate::catalog::{ComponentCatalog, ComponentDescriptor};
use crate::prompts;
use crate::tools::catalog::{CustomComponentCatalogTool, NativeComponentCatalogTool};
use crate::tools::data::{EnergyDataTool, IndustryDataTool, OutageDataTool};
use crate::tools::ToolRegistry;
use crate::Result;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

const CONTENT_TRUNCATION_LENGTH: usize = 50;

/// Progress event surfaced to the caller as each stage runs.
#[derive(Debug, Clone)]
pub struct StageUpdate {
    pub stage: String,
    pub message: String,
    pub detail: String,
    pub at: DateTime<Utc>,
}

impl StageUpdate {
    fn new(stage: &str, message: String, detail: String) -> Self {
        Self {
            stage: stage.to_string(),
            message,
            detail,
            at: Utc::now(),
        }
    }
}

/// Aggregated result of one turn.
#[derive(Debug, Clone)]
pub struct TurnOutput {
    pub content: String,
    pub messages: Option<Value>,
    pub suggestions: Vec<String>,
    pub updates: Vec<StageUpdate>,
}

/// Runs the stage chain once per user query, no branching:
/// backend orchestrator -> UI orchestrator -> UI assembly, with the
/// suggestions generator alongside the assembly stage.
pub struct Pipeline {
    service: Arc<dyn GenerationService>,
    assembly: UiAssemblyAgent,
    data_tools: ToolRegistry,
    selection_tools: ToolRegistry,
    empty_tools: ToolRegistry,
}

impl Pipeline {
    pub fn new(
        service: Arc<dyn GenerationService>,
        catalog: Arc<ComponentCatalog>,
        inline: Vec<ComponentDescriptor>,
        options: AssemblyOptions,
    ) -> Self {
        let data_tools = ToolRegistry::new();
        data_tools.register(Arc::new(OutageDataTool));
        data_tools.register(Arc::new(EnergyDataTool));
        data_tools.register(Arc::new(IndustryDataTool));

        // The selection stage only browses the catalogs; unrestricted view.
        let selection_view = Arc::new((*catalog).clone().with_inline(inline.clone()));
        let selection_tools = ToolRegistry::new();
        selection_tools.register(Arc::new(CustomComponentCatalogTool::new(
            selection_view.clone(),
        )));
        selection_tools.register(Arc::new(NativeComponentCatalogTool::new(selection_view)));

        let assembly = UiAssemblyAgent::new(service.clone(), catalog, inline, options);

        Self {
            service,
            assembly,
            data_tools,
            selection_tools,
            empty_tools: ToolRegistry::new(),
        }
    }

    /// Run the full chain for one query.
    pub async fn run(&self, query: &str) -> Result<TurnOutput> {
        let mut updates: Vec<StageUpdate> = Vec::new();

        info!(target: "pipeline", query = %truncate(query), "Starting turn");
        updates.push(StageUpdate::new(
            "backend_orchestrator",
            format!("Current query: {}", truncate(query)),
            format!("Query in process at backend_orchestrator:\n{query}"),
        ));

        let data_context = self
            .service
            .generate(
                prompts::BACKEND_ORCHESTRATOR_INSTRUCTIONS,
                query,
                &self.data_tools,
            )
            .await?;
        updates.push(StageUpdate::new(
            "backend_orchestrator",
            "backend_orchestrator responded".to_string(),
            format!(
                "backend_orchestrator response:\n{}...",
                truncate(&data_context)
            ),
        ));

        let selection_query = format!("User query: {query}\n\nAvailable data:\n{data_context}");
        let orchestrator_data = self
            .service
            .generate(
                prompts::UI_ORCHESTRATOR_INSTRUCTIONS,
                &selection_query,
                &self.selection_tools,
            )
            .await?;
        updates.push(StageUpdate::new(
            "ui_orchestrator",
            "ui_orchestrator responded".to_string(),
            format!(
                "ui_orchestrator response:\n{}...",
                truncate(&orchestrator_data)
            ),
        ));

        // Assembly and suggestions run off the same orchestrator output.
        let (ui, suggestions) = tokio::join!(
            self.assembly.run(&orchestrator_data, &data_context),
            self.suggestions(&orchestrator_data, &data_context),
        );

        for attempt in &ui.attempts {
            updates.push(StageUpdate::new(
                "ui_assembly",
                format!(
                    "ui_assembly attempt {} {}",
                    attempt.attempt,
                    if attempt.is_valid { "validated" } else { "failed" }
                ),
                attempt.error.clone().unwrap_or_default(),
            ));
        }

        let UiResponse {
            content, messages, ..
        } = ui;
        info!(target: "pipeline", suggestions = suggestions.len(), "Turn complete");

        Ok(TurnOutput {
            content,
            messages,
            suggestions,
            updates,
        })
    }

    /// Generate 1-3 follow-up questions; canned fallbacks when the model
    /// yields nothing parseable.
    async fn suggestions(&self, orchestrator_data: &str, data_context: &str) -> Vec<String> {
        let prompt =
            format!("Context for question generation:\n{orchestrator_data}\n{data_context}");

        let raw = match self
            .service
            .generate(prompts::SUGGESTION_QUERY, &prompt, &self.empty_tools)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!(target: "pipeline", error = %e, "Suggestions generation failed; using fallbacks");
                return fallback_suggestions();
            }
        };

        match parse_suggestions(&raw) {
            Some(list) if !list.is_empty() => list,
            _ => {
                debug!(target: "pipeline", "Suggestions output unparseable; using fallbacks");
                fallback_suggestions()
            }
        }
    }
}

fn fallback_suggestions() -> Vec<String> {
    prompts::FALLBACK_SUGGESTIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Parse `{"suggested_questions": [...]}` out of the model reply, tolerating
/// surrounding prose by scanning for the outermost JSON object.
fn parse_suggestions(raw: &str) -> Option<Vec<String>> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    let parsed: Value = serde_json::from_str(&raw[start..=end]).ok()?;
    let questions = parsed.get("suggested_questions")?.as_array()?;
    Some(
        questions
            .iter()
            .filter_map(|q| q.as_str().map(|s| s.to_string()))
            .collect(),
    )
}

fn truncate(text: &str) -> &str {
    let mut end = CONTENT_TRUNCATION_LENGTH.min(text.len());
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suggestions_with_surrounding_prose() {
        let raw = "Sure!\n{\"suggested_questions\": [\"What about wind?\", \"Show outages\"]}";
        let parsed = parse_suggestions(raw).unwrap();
        assert_eq!(parsed, vec!["What about wind?", "Show outages"]);
    }

    #[test]
    fn rejects_garbage_suggestions() {
        assert!(parse_suggestions("no json here").is_none());
        assert!(parse_suggestions("{\"other\": 1}").is_none());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let s = "é".repeat(60);
        let t = truncate(&s);
        assert!(t.len() <= CONTENT_TRUNCATION_LENGTH);
        assert!(s.starts_with(t));
    }
}
