// Weft Core Library
// LLM-driven A2UI generation runtime

pub mod assembly;
pub mod catalog;
pub mod config;
pub mod extract;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod schema;
pub mod telemetry;
pub mod tools;
pub mod validate;

// Export core types
pub use assembly::{AssemblyOptions, GenerationService, UiAssemblyAgent, UiResponse};
pub use catalog::{CatalogError, ComponentCatalog, ComponentDescriptor};
pub use extract::{extract_allowed_components, split_response, ExtractedResponse, A2UI_DELIMITER};
pub use pipeline::{Pipeline, StageUpdate, TurnOutput};
pub use schema::{array_validator, compose};
pub use validate::UiValidator;

// Error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeftError {
    #[error("Generation error: {0}")]
    GenerationError(String),

    #[error("Tool error: {0}")]
    ToolError(#[from] tools::ToolError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
pub type Result<T> = std::result::Result<T, WeftError>;
