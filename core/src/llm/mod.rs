//! OpenAI-compatible chat client with a bounded tool-calling loop.

mod client;

pub use client::{parse_tool_calls_from_chat, LlmClient, LlmClientConfig, ToolCall};
