use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Tool execution failed: {0}")]
    Execution(String),

    #[error("Tool execution timed out")]
    Timeout,
}

pub type ToolResult<T> = std::result::Result<T, ToolError>;
