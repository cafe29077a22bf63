use super::error::ToolResult;
use async_trait::async_trait;
use serde_json::Value;

/// The core trait for all tools exposed to the model.
///
/// Tools return plain text: the consumer is a language model, so lookup
/// misses ("No example found for ...") are returned as data it can read and
/// react to, not as errors.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of the tool (e.g., "get_custom_component_example")
    fn name(&self) -> String;

    /// A human-readable description of what the tool does
    fn description(&self) -> String;

    /// The JSON Schema for the tool's arguments
    fn parameters(&self) -> Value;

    /// Execute the tool with the given arguments
    async fn call(&self, arguments: Value) -> ToolResult<String>;
}
