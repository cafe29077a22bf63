//! Per-agent configuration with schema-validated updates.
//!
//! Configs are plain data. Updating the store yields a fresh snapshot;
//! dependent pipeline objects are rebuilt from it, never mutated in place.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

/// Configuration for one pipeline agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentConfig {
    pub model: String,
    pub temperature: f32,
    pub name: String,
    pub system_prompt: Option<String>,
    pub tools_enabled: Vec<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown agent '{0}'")]
    UnknownAgent(String),

    #[error("Invalid agent config: {0}")]
    Invalid(String),
}

/// JSON Schema one agent config must satisfy.
pub fn agent_config_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "model": {"type": "string"},
            "temperature": {"type": "number", "minimum": 0, "maximum": 2},
            "name": {"type": "string"},
            "system_prompt": {"type": ["string", "null"]},
            "tools_enabled": {"type": "array", "items": {"type": "string"}}
        },
        "required": ["model", "temperature", "name", "tools_enabled"]
    })
}

pub const BACKEND_ORCHESTRATOR_AGENT: &str = "backend_orchestrator_agent";
pub const UI_ORCHESTRATOR_AGENT: &str = "ui_orchestrator_agent";
pub const UI_ASSEMBLY_AGENT: &str = "ui_assembly_agent";

fn default_configs() -> HashMap<String, AgentConfig> {
    let mut map = HashMap::new();
    map.insert(
        BACKEND_ORCHESTRATOR_AGENT.to_string(),
        AgentConfig {
            model: "qwen2.5-0.5b-instruct".to_string(),
            temperature: 0.7,
            name: BACKEND_ORCHESTRATOR_AGENT.to_string(),
            system_prompt: Some(crate::prompts::BACKEND_ORCHESTRATOR_INSTRUCTIONS.to_string()),
            tools_enabled: vec![
                "get_outage_data".to_string(),
                "get_energy_data".to_string(),
                "get_industry_data".to_string(),
            ],
        },
    );
    map.insert(
        UI_ORCHESTRATOR_AGENT.to_string(),
        AgentConfig {
            model: "qwen2.5-0.5b-instruct".to_string(),
            temperature: 0.7,
            name: UI_ORCHESTRATOR_AGENT.to_string(),
            system_prompt: Some(crate::prompts::UI_ORCHESTRATOR_INSTRUCTIONS.to_string()),
            tools_enabled: vec![
                "get_custom_component_catalog".to_string(),
                "get_native_component_catalog".to_string(),
            ],
        },
    );
    map.insert(
        UI_ASSEMBLY_AGENT.to_string(),
        AgentConfig {
            model: "qwen2.5-0.5b-instruct".to_string(),
            temperature: 0.7,
            name: UI_ASSEMBLY_AGENT.to_string(),
            // The assembly prompt is built per turn from the allow-list and
            // data context.
            system_prompt: None,
            tools_enabled: vec![
                "get_custom_component_catalog".to_string(),
                "get_custom_component_example".to_string(),
                "get_native_component_catalog".to_string(),
                "get_native_component_example".to_string(),
            ],
        },
    );
    map
}

/// Validated store of the per-agent configs.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    configs: HashMap<String, AgentConfig>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self {
            configs: default_configs(),
        }
    }
}

impl ConfigStore {
    pub fn get(&self, agent: &str) -> Result<&AgentConfig, ConfigError> {
        self.configs
            .get(agent)
            .ok_or_else(|| ConfigError::UnknownAgent(agent.to_string()))
    }

    pub fn agents(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(|k| k.as_str())
    }

    /// Replace one agent's config after schema validation. Returns a fresh
    /// store; the current one is left untouched.
    pub fn update(&self, agent: &str, config: AgentConfig) -> Result<ConfigStore, ConfigError> {
        if !self.configs.contains_key(agent) {
            return Err(ConfigError::UnknownAgent(agent.to_string()));
        }

        let as_value =
            serde_json::to_value(&config).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        let validator = jsonschema::validator_for(&agent_config_schema())
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if let Some(error) = validator.iter_errors(&as_value).next() {
            return Err(ConfigError::Invalid(format!(
                "'{}': {}",
                error.instance_path, error
            )));
        }

        info!(target: "config", agent, model = %config.model, "Updating agent config");
        let mut configs = self.configs.clone();
        configs.insert(agent.to_string(), config);
        Ok(ConfigStore { configs })
    }

    /// Fresh store with the built-in defaults.
    pub fn reset() -> ConfigStore {
        ConfigStore::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AgentConfig {
        AgentConfig {
            model: "qwen2.5-0.5b-instruct".to_string(),
            temperature: 0.2,
            name: UI_ASSEMBLY_AGENT.to_string(),
            system_prompt: None,
            tools_enabled: vec![],
        }
    }

    #[test]
    fn update_returns_new_store_and_keeps_old() {
        let store = ConfigStore::default();
        let updated = store.update(UI_ASSEMBLY_AGENT, sample()).unwrap();
        assert_eq!(updated.get(UI_ASSEMBLY_AGENT).unwrap().temperature, 0.2);
        assert_eq!(store.get(UI_ASSEMBLY_AGENT).unwrap().temperature, 0.7);
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let store = ConfigStore::default();
        let mut bad = sample();
        bad.temperature = 3.5;
        let err = store.update(UI_ASSEMBLY_AGENT, bad).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_agent_is_rejected() {
        let store = ConfigStore::default();
        let err = store.update("nope", sample()).unwrap_err();
        assert_eq!(err, ConfigError::UnknownAgent("nope".to_string()));
    }
}
