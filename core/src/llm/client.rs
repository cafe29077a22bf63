use crate::assembly::GenerationService;
use crate::tools::ToolRegistry;
use crate::{Result, WeftError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Upper bound on request/tool rounds within one generation. The loop ends
/// earlier as soon as the model answers without calling a tool.
const MAX_TOOL_ROUNDS: usize = 8;

/// Configuration for LlmClient loaded from environment variables
#[derive(Debug, Clone)]
pub struct LlmClientConfig {
    pub base_url: String, // e.g., http://localhost:8000/v1
    pub model: String,    // e.g., qwen2.5-0.5b-instruct
    pub api_key: Option<String>,
    pub request_timeout_ms: u64,
    pub temperature: f32,
}

impl Default for LlmClientConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("WEFT_BASE_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "http://localhost:8000/v1".to_string()),
            model: std::env::var("WEFT_MODEL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "qwen2.5-0.5b-instruct".to_string()),
            api_key: std::env::var("WEFT_API_KEY").ok().filter(|s| !s.is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(30_000),
            temperature: std::env::var("WEFT_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse::<f32>().ok())
                .unwrap_or(0.7),
        }
    }
}

/// Normalized tool call parsed from model output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: Option<String>,
    pub name: String,
    pub arguments: Value,
}

/// HTTP client for an OpenAI-compatible Chat Completions endpoint.
#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    cfg: LlmClientConfig,
}

impl LlmClient {
    pub fn new(cfg: LlmClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(cfg.request_timeout_ms))
            .build()
            .map_err(|e| WeftError::GenerationError(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http, cfg })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(LlmClientConfig::default())
    }

    async fn post_chat(&self, messages: &[Value], tools: &[Value]) -> Result<Value> {
        let url = format!(
            "{}/chat/completions",
            self.cfg.base_url.trim_end_matches('/')
        );
        debug!(target: "llm_client", "POST {} via Chat Completions", url);

        let mut req = self
            .http
            .post(&url)
            .header("content-type", "application/json");
        if let Some(key) = &self.cfg.api_key {
            req = req.bearer_auth(key);
        }

        let mut body = json!({
            "model": self.cfg.model,
            "messages": messages,
            "temperature": self.cfg.temperature,
        });
        if !tools.is_empty() {
            body["tools"] = Value::Array(tools.to_vec());
            body["tool_choice"] = json!("auto");
        }

        let resp = req
            .json(&body)
            .send()
            .await
            .map_err(|e| WeftError::GenerationError(format!("Chat Completions HTTP error: {e}")))?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            error!(target: "llm_client", %status, body = %text, "Chat Completions error");
            return Err(WeftError::GenerationError(format!(
                "Chat Completions error: status={} body={}",
                status, text
            )));
        }

        resp.json::<Value>().await.map_err(|e| {
            WeftError::GenerationError(format!("Failed to parse Chat Completions JSON: {e}"))
        })
    }

    /// Run the chat loop until the model answers in text, resolving tool
    /// calls against `tools` between rounds.
    async fn chat_with_tools(
        &self,
        system_prompt: &str,
        prompt: &str,
        tools: &ToolRegistry,
    ) -> Result<String> {
        let specs = tools.specs_for_llm();
        let mut messages = vec![
            json!({"role": "system", "content": system_prompt}),
            json!({"role": "user", "content": prompt}),
        ];

        for round in 0..MAX_TOOL_ROUNDS {
            let raw = self.post_chat(&messages, &specs).await?;
            let calls = parse_tool_calls_from_chat(&raw);

            if calls.is_empty() {
                return extract_text_from_chat_completions(&raw).ok_or_else(|| {
                    WeftError::GenerationError(
                        "Missing choices[0].message.content in chat completions".into(),
                    )
                });
            }

            debug!(target: "llm_client", round, calls = calls.len(), "Resolving tool calls");

            // Echo the assistant turn back so the model sees its own calls
            if let Some(assistant) = raw
                .get("choices")
                .and_then(|c| c.get(0))
                .and_then(|c| c.get("message"))
            {
                messages.push(assistant.clone());
            }

            for call in &calls {
                let output = match tools.call(&call.name, call.arguments.clone()).await {
                    Ok(text) => text,
                    Err(e) => {
                        warn!(target: "llm_client", tool = %call.name, error = %e, "Tool call failed; reporting to model");
                        format!("Error: {e}")
                    }
                };
                messages.push(json!({
                    "role": "tool",
                    "tool_call_id": call.id.clone().unwrap_or_default(),
                    "content": output,
                }));
            }
        }

        Err(WeftError::GenerationError(format!(
            "Model did not produce a final answer within {MAX_TOOL_ROUNDS} tool rounds"
        )))
    }
}

#[async_trait]
impl GenerationService for LlmClient {
    async fn generate(
        &self,
        system_prompt: &str,
        prompt: &str,
        tools: &ToolRegistry,
    ) -> Result<String> {
        info!(target: "llm_client", model = %self.cfg.model, "Starting generation");
        self.chat_with_tools(system_prompt, prompt, tools).await
    }
}

fn extract_text_from_chat_completions(v: &Value) -> Option<String> {
    v.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(|s| s.to_string())
}

/// Parse tool calls from a Chat Completions response body. Public for testing.
pub fn parse_tool_calls_from_chat(v: &Value) -> Vec<ToolCall> {
    let mut calls = Vec::new();
    if let Some(arr) = v.get("choices").and_then(|x| x.as_array()) {
        if let Some(first) = arr.first() {
            if let Some(tc_arr) = first
                .get("message")
                .and_then(|m| m.get("tool_calls"))
                .and_then(|x| x.as_array())
            {
                for tc in tc_arr {
                    let id = tc.get("id").and_then(|x| x.as_str()).map(|s| s.to_string());
                    if let Some(func) = tc.get("function") {
                        let name = func
                            .get("name")
                            .and_then(|n| n.as_str())
                            .unwrap_or("")
                            .to_string();
                        let args = match func.get("arguments") {
                            Some(Value::String(s)) => {
                                serde_json::from_str::<Value>(s).unwrap_or(json!({}))
                            }
                            Some(v) => v.clone(),
                            None => json!({}),
                        };
                        if !name.is_empty() {
                            calls.push(ToolCall {
                                id,
                                name,
                                arguments: args,
                            });
                        }
                    }
                }
            }
        }
    }
    calls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tool_calls_with_string_arguments() {
        let body = json!({
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "function": {
                            "name": "get_energy_data",
                            "arguments": "{}"
                        }
                    }]
                }
            }]
        });
        let calls = parse_tool_calls_from_chat(&body);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "get_energy_data");
        assert_eq!(calls[0].id.as_deref(), Some("call_1"));
        assert_eq!(calls[0].arguments, json!({}));
    }

    #[test]
    fn plain_text_reply_has_no_tool_calls() {
        let body = json!({
            "choices": [{"message": {"content": "hello"}}]
        });
        assert!(parse_tool_calls_from_chat(&body).is_empty());
        assert_eq!(
            extract_text_from_chat_completions(&body).as_deref(),
            Some("hello")
        );
    }

    #[test]
    fn malformed_argument_strings_fall_back_to_empty_object() {
        let body = json!({
            "choices": [{
                "message": {
                    "tool_calls": [{
                        "function": {"name": "t", "arguments": "not json"}
                    }]
                }
            }]
        });
        let calls = parse_tool_calls_from_chat(&body);
        assert_eq!(calls[0].arguments, json!({}));
    }
}
