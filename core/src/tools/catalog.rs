//! Catalog lookup tools the model calls while assembling a surface.

use super::error::{ToolError, ToolResult};
use super::traits::Tool;
use crate::catalog::{CatalogError, ComponentCatalog};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

fn component_name_arg(arguments: &Value, key: &str) -> ToolResult<String> {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ToolError::InvalidArguments(format!("missing string argument '{key}'")))
}

/// Lists the custom component names visible through the catalog view.
pub struct CustomComponentCatalogTool {
    catalog: Arc<ComponentCatalog>,
}

impl CustomComponentCatalogTool {
    pub fn new(catalog: Arc<ComponentCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for CustomComponentCatalogTool {
    fn name(&self) -> String {
        "get_custom_component_catalog".to_string()
    }

    fn description(&self) -> String {
        "Returns the list of available custom component names".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn call(&self, _arguments: Value) -> ToolResult<String> {
        let names: Vec<&str> = self
            .catalog
            .list_custom()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        serde_json::to_string(&json!({ "available_components": names }))
            .map_err(|e| ToolError::Execution(e.to_string()))
    }
}

/// Looks up the example (or schema fragment) for one custom component.
pub struct CustomComponentExampleTool {
    catalog: Arc<ComponentCatalog>,
}

impl CustomComponentExampleTool {
    pub fn new(catalog: Arc<ComponentCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for CustomComponentExampleTool {
    fn name(&self) -> String {
        "get_custom_component_example".to_string()
    }

    fn description(&self) -> String {
        "Returns the A2UI message example for a custom component".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "component_name": {
                    "type": "string",
                    "description": "Name of the custom component (e.g., \"BarGraph\")"
                }
            },
            "required": ["component_name"]
        })
    }

    async fn call(&self, arguments: Value) -> ToolResult<String> {
        let name = component_name_arg(&arguments, "component_name")?;
        // Misses are answers, not failures: the model reads them and adjusts.
        match self.catalog.get_custom(&name) {
            Ok(descriptor) => serde_json::to_string_pretty(&descriptor.payload)
                .map_err(|e| ToolError::Execution(e.to_string())),
            Err(CatalogError::NotAllowed { name, allowed }) => Ok(format!(
                "Component '{name}' is not in the allowed list: {allowed:?}"
            )),
            Err(CatalogError::NotFound(name)) => {
                Ok(format!("No example found for custom component '{name}'"))
            }
        }
    }
}

/// Lists native component names and descriptions.
pub struct NativeComponentCatalogTool {
    catalog: Arc<ComponentCatalog>,
}

impl NativeComponentCatalogTool {
    pub fn new(catalog: Arc<ComponentCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for NativeComponentCatalogTool {
    fn name(&self) -> String {
        "get_native_component_catalog".to_string()
    }

    fn description(&self) -> String {
        "Returns the list of available native component names and descriptions in JSON format"
            .to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn call(&self, _arguments: Value) -> ToolResult<String> {
        let catalog: Vec<Value> = self
            .catalog
            .list_native()
            .iter()
            .map(|d| json!({ "name": d.name, "description": d.description }))
            .collect();
        serde_json::to_string_pretty(&catalog).map_err(|e| ToolError::Execution(e.to_string()))
    }
}

/// Looks up the complete A2UI example for one native component.
pub struct NativeComponentExampleTool {
    catalog: Arc<ComponentCatalog>,
}

impl NativeComponentExampleTool {
    pub fn new(catalog: Arc<ComponentCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for NativeComponentExampleTool {
    fn name(&self) -> String {
        "get_native_component_example".to_string()
    }

    fn description(&self) -> String {
        "Returns a complete A2UI message example for the given native component".to_string()
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "component_name": {
                    "type": "string",
                    "description": "Name of the native component (e.g., \"Text\", \"Button\", \"Image\")"
                }
            },
            "required": ["component_name"]
        })
    }

    async fn call(&self, arguments: Value) -> ToolResult<String> {
        let name = component_name_arg(&arguments, "component_name")?;
        match self.catalog.get_native(&name) {
            Ok(descriptor) => serde_json::to_string_pretty(&descriptor.payload)
                .map_err(|e| ToolError::Execution(e.to_string())),
            Err(_) => Ok(format!("No example found for native component '{name}'")),
        }
    }
}
