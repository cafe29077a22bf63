//! Component registries: native platform components and custom widgets.
//!
//! Catalogs are built once from static registration lists (plus an optional
//! caller-supplied inline catalog) and are read-only afterwards; concurrent
//! reads need no synchronization.

mod native;
mod widgets;

pub use native::native_examples;
pub use widgets::widget_examples;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One registered component.
///
/// `payload` is a complete A2UI example message array for native components
/// and built-in widgets, or a JSON-Schema fragment for inline custom widgets
/// that get injected into the composed schema. Identity is `name`, compared
/// case-insensitively everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub name: String,
    pub description: String,
    pub payload: serde_json::Value,
}

impl ComponentDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            payload,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No entry found for '{0}'")]
    NotFound(String),

    #[error("Component '{name}' is not in the allowed list: {allowed:?}")]
    NotAllowed { name: String, allowed: Vec<String> },
}

/// Registry of native component examples and custom widget descriptors.
#[derive(Debug, Clone)]
pub struct ComponentCatalog {
    native: Vec<ComponentDescriptor>,
    custom: Vec<ComponentDescriptor>,
    /// Lower-cased allow-list; `None` means unrestricted.
    allowed: Option<Vec<String>>,
}

impl ComponentCatalog {
    /// Catalog with the built-in native and widget registration lists.
    pub fn builtin() -> Self {
        Self {
            native: native_examples(),
            custom: widget_examples(),
            allowed: None,
        }
    }

    /// Prepend caller-supplied custom components. Inline entries shadow
    /// built-in widgets of the same name on lookup.
    pub fn with_inline(mut self, inline: Vec<ComponentDescriptor>) -> Self {
        let mut custom = inline;
        custom.append(&mut self.custom);
        self.custom = custom;
        self
    }

    /// A restricted view of this catalog: custom lookups outside `allowed`
    /// fail with [`CatalogError::NotAllowed`] rather than [`CatalogError::NotFound`],
    /// so a calling agent can tell a mistake from a missing widget.
    pub fn restrict(&self, allowed: &[String]) -> Self {
        Self {
            native: self.native.clone(),
            custom: self.custom.clone(),
            allowed: Some(allowed.iter().map(|n| n.to_lowercase()).collect()),
        }
    }

    pub fn list_native(&self) -> &[ComponentDescriptor] {
        &self.native
    }

    pub fn get_native(&self, name: &str) -> Result<&ComponentDescriptor, CatalogError> {
        self.native
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Custom components visible through this view, in registration order.
    pub fn list_custom(&self) -> Vec<&ComponentDescriptor> {
        self.custom
            .iter()
            .filter(|d| match &self.allowed {
                Some(allow) => allow.contains(&d.name.to_lowercase()),
                None => true,
            })
            .collect()
    }

    pub fn get_custom(&self, name: &str) -> Result<&ComponentDescriptor, CatalogError> {
        if let Some(allow) = &self.allowed {
            if !allow.contains(&name.to_lowercase()) {
                return Err(CatalogError::NotAllowed {
                    name: name.to_string(),
                    allowed: allow.clone(),
                });
            }
        }
        self.custom
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }
}
