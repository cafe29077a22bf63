//! UI assembly agent: generation with schema validation and bounded retry.

use crate::catalog::{ComponentCatalog, ComponentDescriptor};
use crate::extract::{extract_allowed_components, split_response, A2UI_DELIMITER};
use crate::prompts;
use crate::schema::{array_validator, compose, native_message_schema};
use crate::tools::catalog::{
    CustomComponentCatalogTool, CustomComponentExampleTool, NativeComponentCatalogTool,
    NativeComponentExampleTool,
};
use crate::tools::ToolRegistry;
use crate::validate::UiValidator;
use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Shown when every attempt failed validation. Surfaced as content, not as
/// an error: the conversation keeps going.
pub const RETRY_EXHAUSTED_MESSAGE: &str = "I'm sorry, I'm having trouble generating the interface for that request right now. Please try again in a moment.";

/// Shown when the composed schema cannot be compiled. No retry: the model
/// cannot fix a broken schema.
pub const CONFIG_ERROR_MESSAGE: &str =
    "I'm sorry, I'm facing an internal configuration error with my UI components.";

/// The only seam to the language model.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        prompt: &str,
        tools: &ToolRegistry,
    ) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct AssemblyOptions {
    /// Retries after the first attempt; total attempts = max_retries + 1.
    pub max_retries: u32,
    /// Deadline per generation attempt; expiry feeds the retry path.
    pub attempt_timeout: Duration,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            max_retries: 1,
            attempt_timeout: Duration::from_secs(120),
        }
    }
}

/// One attempt of the generate/validate loop, recorded for logging.
#[derive(Debug, Clone)]
pub struct GenerationAttempt {
    pub attempt: u32,
    pub prompt: String,
    pub raw_response: Option<String>,
    pub is_valid: bool,
    pub error: Option<String>,
    pub started_at: DateTime<Utc>,
}

/// Outcome of one assembly run. `messages` is the parsed A2UI message array
/// when validation succeeded, `None` on the apology paths.
#[derive(Debug, Clone)]
pub struct UiResponse {
    pub content: String,
    pub messages: Option<Value>,
    pub attempts: Vec<GenerationAttempt>,
}

/// Agent in charge of generating the ordered UI messages selected by the
/// UI orchestrator, validated against the composed A2UI schema.
pub struct UiAssemblyAgent {
    service: Arc<dyn GenerationService>,
    catalog: Arc<ComponentCatalog>,
    inline: Vec<ComponentDescriptor>,
    options: AssemblyOptions,
}

impl UiAssemblyAgent {
    pub fn new(
        service: Arc<dyn GenerationService>,
        catalog: Arc<ComponentCatalog>,
        inline: Vec<ComponentDescriptor>,
        options: AssemblyOptions,
    ) -> Self {
        Self {
            service,
            catalog,
            inline,
            options,
        }
    }

    /// One full turn: extract the allow-list from the orchestrator output,
    /// compose and compile the schema, then generate with validation and
    /// retry. Always returns a response; validation dead-ends surface as
    /// apology content.
    pub async fn run(&self, orchestrator_data: &str, data_context: &str) -> UiResponse {
        let allowed = extract_allowed_components(orchestrator_data);

        let composed = compose(&native_message_schema(), &self.inline, allowed.as_deref());
        let validator = match UiValidator::new(&array_validator(&composed)) {
            Ok(v) => v,
            Err(e) => {
                error!(target: "ui_assembly", error = %e, "Composed schema failed to compile; cannot validate UI output");
                return UiResponse {
                    content: CONFIG_ERROR_MESSAGE.to_string(),
                    messages: None,
                    attempts: vec![],
                };
            }
        };

        // Catalog view for this turn: inline entries shadow built-ins, and
        // the orchestrator's selection restricts custom lookups.
        let base_view = (*self.catalog).clone().with_inline(self.inline.clone());
        let view = Arc::new(match &allowed {
            Some(names) => base_view.restrict(names),
            None => base_view,
        });

        let tools = ToolRegistry::new();
        tools.register(Arc::new(CustomComponentCatalogTool::new(view.clone())));
        tools.register(Arc::new(CustomComponentExampleTool::new(view.clone())));
        tools.register(Arc::new(NativeComponentCatalogTool::new(view.clone())));
        tools.register(Arc::new(NativeComponentExampleTool::new(view)));

        let system_prompt = prompts::ui_assembly_instructions(allowed.as_deref(), data_context);

        self.generate_with_retry(
            &system_prompt,
            orchestrator_data,
            data_context,
            allowed.as_deref(),
            &validator,
            &tools,
        )
        .await
    }

    async fn generate_with_retry(
        &self,
        system_prompt: &str,
        orchestrator_data: &str,
        data_context: &str,
        allowed: Option<&[String]>,
        validator: &UiValidator,
        tools: &ToolRegistry,
    ) -> UiResponse {
        let total_attempts = self.options.max_retries + 1;
        let mut attempts: Vec<GenerationAttempt> = Vec::new();
        let mut last_error = String::new();

        for attempt in 1..=total_attempts {
            info!(target: "ui_assembly", attempt, total_attempts, "UI assembly validation attempt");

            let prompt = if attempt == 1 {
                prompts::assembly_query(orchestrator_data, data_context, allowed)
            } else {
                prompts::retry_query(orchestrator_data, data_context, &last_error)
            };

            let started_at = Utc::now();
            let generated = tokio::time::timeout(
                self.options.attempt_timeout,
                self.service.generate(system_prompt, &prompt, tools),
            )
            .await;

            let raw = match generated {
                Ok(Ok(text)) => text,
                Ok(Err(e)) => {
                    warn!(target: "ui_assembly", attempt, error = %e, "Generation failed");
                    last_error = format!("Generation failed: {e}");
                    attempts.push(GenerationAttempt {
                        attempt,
                        prompt,
                        raw_response: None,
                        is_valid: false,
                        error: Some(last_error.clone()),
                        started_at,
                    });
                    continue;
                }
                Err(_) => {
                    warn!(
                        target: "ui_assembly",
                        attempt,
                        timeout_ms = self.options.attempt_timeout.as_millis() as u64,
                        "Generation attempt timed out"
                    );
                    last_error = "Generation timed out before producing a response.".to_string();
                    attempts.push(GenerationAttempt {
                        attempt,
                        prompt,
                        raw_response: None,
                        is_valid: false,
                        error: Some(last_error.clone()),
                        started_at,
                    });
                    continue;
                }
            };

            match validate_response(&raw, validator) {
                Ok((content, messages)) => {
                    attempts.push(GenerationAttempt {
                        attempt,
                        prompt,
                        raw_response: Some(raw),
                        is_valid: true,
                        error: None,
                        started_at,
                    });
                    info!(target: "ui_assembly", attempt, "UI response validated");
                    return UiResponse {
                        content,
                        messages: Some(messages),
                        attempts,
                    };
                }
                Err(message) => {
                    warn!(target: "ui_assembly", attempt, error = %message, "UI response failed validation");
                    last_error = message;
                    attempts.push(GenerationAttempt {
                        attempt,
                        prompt,
                        raw_response: Some(raw),
                        is_valid: false,
                        error: Some(last_error.clone()),
                        started_at,
                    });
                }
            }
        }

        warn!(target: "ui_assembly", total_attempts, "All UI assembly attempts failed validation");
        UiResponse {
            content: RETRY_EXHAUSTED_MESSAGE.to_string(),
            messages: None,
            attempts,
        }
    }
}

/// Split and validate one raw model response. On success returns the final
/// content, with the model's JSON text preserved verbatim after the
/// delimiter, plus the parsed message array.
fn validate_response(
    raw: &str,
    validator: &UiValidator,
) -> std::result::Result<(String, Value), String> {
    let extracted = split_response(raw).map_err(|e| format!("Validation failed: {e}"))?;
    let messages = validator
        .validate(&extracted.json_text)
        .map_err(|e| format!("Validation failed: {e}"))?;
    let content = format!(
        "{}\n{}\n{}",
        extracted.conversational, A2UI_DELIMITER, extracted.json_raw
    );
    Ok((content, messages))
}
