//! Tool layer: the capability seam the model calls into mid-generation.

pub mod catalog;
pub mod data;
mod error;
mod registry;
mod traits;

pub use error::{ToolError, ToolResult};
pub use registry::ToolRegistry;
pub use traits::Tool;
