use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use weft_core::assembly::{
    AssemblyOptions, GenerationService, UiAssemblyAgent, CONFIG_ERROR_MESSAGE,
    RETRY_EXHAUSTED_MESSAGE,
};
use weft_core::catalog::{ComponentCatalog, ComponentDescriptor};
use weft_core::tools::ToolRegistry;
use weft_core::{Result, WeftError};

/// One scripted turn of the fake model.
enum Step {
    Reply(&'static str),
    Fail(&'static str),
    Hang,
}

/// Fake generation service that replays a script and records the prompts it
/// was given.
struct ScriptedService {
    script: Mutex<VecDeque<Step>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedService {
    fn new(script: Vec<Step>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationService for ScriptedService {
    async fn generate(
        &self,
        _system_prompt: &str,
        prompt: &str,
        _tools: &ToolRegistry,
    ) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let step = self.script.lock().unwrap().pop_front();
        match step {
            Some(Step::Reply(text)) => Ok(text.to_string()),
            Some(Step::Fail(message)) => Err(WeftError::GenerationError(message.to_string())),
            Some(Step::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(String::new())
            }
            None => panic!("fake service called more times than scripted"),
        }
    }
}

fn inline_bar_graph() -> Vec<ComponentDescriptor> {
    vec![ComponentDescriptor::new(
        "BarGraph",
        "Bar chart",
        json!({
            "type": "object",
            "properties": {
                "dataPath": {"type": "string"},
                "labelPath": {"type": "string"}
            },
            "required": ["dataPath", "labelPath"]
        }),
    )]
}

fn agent(service: Arc<ScriptedService>, options: AssemblyOptions) -> UiAssemblyAgent {
    UiAssemblyAgent::new(
        service,
        Arc::new(ComponentCatalog::builtin()),
        inline_bar_graph(),
        options,
    )
}

const ORCHESTRATOR_DATA: &str = r#"{"widgets": [{"name": "BarGraph"}]}"#;
const DATA_CONTEXT: &str = "ENERGY DATA:\nrenewable 49.5%";

const VALID_RESPONSE: &str = "Here is your energy chart.\n---a2ui_JSON---\n[{\"surfaceUpdate\": {\"surfaceId\": \"dashboard\", \"components\": [{\"id\": \"chart\", \"component\": {\"BarGraph\": {\"dataPath\": \"/values\", \"labelPath\": \"/labels\"}}}]}}]";

#[tokio::test]
async fn first_attempt_success_needs_no_retry() {
    let service = Arc::new(ScriptedService::new(vec![Step::Reply(VALID_RESPONSE)]));
    let agent = agent(service.clone(), AssemblyOptions::default());

    let response = agent.run(ORCHESTRATOR_DATA, DATA_CONTEXT).await;

    assert_eq!(response.attempts.len(), 1);
    assert!(response.attempts[0].is_valid);
    assert!(response.messages.is_some());
    assert!(response.content.starts_with("Here is your energy chart."));
    assert!(response.content.contains("\n---a2ui_JSON---\n"));
    assert_eq!(service.prompts().len(), 1);
}

#[tokio::test]
async fn invalid_then_valid_recovers_on_retry() {
    let service = Arc::new(ScriptedService::new(vec![
        Step::Reply("I forgot the payload entirely."),
        Step::Reply(VALID_RESPONSE),
    ]));
    let agent = agent(service.clone(), AssemblyOptions::default());

    let response = agent.run(ORCHESTRATOR_DATA, DATA_CONTEXT).await;

    assert_eq!(response.attempts.len(), 2);
    assert!(!response.attempts[0].is_valid);
    assert!(response.attempts[1].is_valid);
    assert!(response.messages.is_some());

    let prompts = service.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].starts_with("Your previous response was invalid."));
    assert!(prompts[1].contains("Validation failed"));
    assert!(prompts[1].contains(ORCHESTRATOR_DATA));
    assert!(prompts[1].contains(DATA_CONTEXT));
}

#[tokio::test]
async fn exhaustion_yields_apology_not_error() {
    let service = Arc::new(ScriptedService::new(vec![
        Step::Reply("no delimiter here"),
        Step::Reply("still no delimiter"),
    ]));
    let agent = agent(service.clone(), AssemblyOptions::default());

    let response = agent.run(ORCHESTRATOR_DATA, DATA_CONTEXT).await;

    assert_eq!(response.content, RETRY_EXHAUSTED_MESSAGE);
    assert!(response.messages.is_none());
    assert_eq!(response.attempts.len(), 2);
    assert!(response.attempts.iter().all(|a| !a.is_valid));
}

#[tokio::test]
async fn max_retries_bounds_total_attempts() {
    let service = Arc::new(ScriptedService::new(vec![
        Step::Reply("bad"),
        Step::Reply("bad"),
        Step::Reply("bad"),
    ]));
    let options = AssemblyOptions {
        max_retries: 2,
        ..AssemblyOptions::default()
    };
    let agent = agent(service.clone(), options);

    let response = agent.run(ORCHESTRATOR_DATA, DATA_CONTEXT).await;

    assert_eq!(response.attempts.len(), 3);
    assert_eq!(response.content, RETRY_EXHAUSTED_MESSAGE);
}

#[tokio::test]
async fn schema_violation_feeds_diagnostic_into_retry_prompt() {
    // Valid split, valid JSON, but a component outside the composed schema.
    let invalid = "Text.\n---a2ui_JSON---\n[{\"surfaceUpdate\": {\"surfaceId\": \"d\", \"components\": [{\"id\": \"x\", \"component\": {\"FancyChart\": {}}}]}}]";
    let service = Arc::new(ScriptedService::new(vec![
        Step::Reply(invalid),
        Step::Reply(VALID_RESPONSE),
    ]));
    let agent = agent(service.clone(), AssemblyOptions::default());

    let response = agent.run(ORCHESTRATOR_DATA, DATA_CONTEXT).await;
    assert!(response.attempts[1].is_valid);

    let prompts = service.prompts();
    assert!(prompts[1].contains("Schema violation"), "prompt: {}", prompts[1]);
}

#[tokio::test]
async fn generation_error_is_retried() {
    let service = Arc::new(ScriptedService::new(vec![
        Step::Fail("connection refused"),
        Step::Reply(VALID_RESPONSE),
    ]));
    let agent = agent(service.clone(), AssemblyOptions::default());

    let response = agent.run(ORCHESTRATOR_DATA, DATA_CONTEXT).await;
    assert_eq!(response.attempts.len(), 2);
    assert!(response.attempts[1].is_valid);
    assert!(response.attempts[0]
        .error
        .as_deref()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn attempt_timeout_feeds_the_retry_path() {
    let service = Arc::new(ScriptedService::new(vec![
        Step::Hang,
        Step::Reply(VALID_RESPONSE),
    ]));
    let options = AssemblyOptions {
        max_retries: 1,
        attempt_timeout: Duration::from_millis(50),
    };
    let agent = agent(service.clone(), options);

    let response = agent.run(ORCHESTRATOR_DATA, DATA_CONTEXT).await;

    assert_eq!(response.attempts.len(), 2);
    assert!(!response.attempts[0].is_valid);
    assert!(response.attempts[0]
        .error
        .as_deref()
        .unwrap()
        .contains("timed out"));
    assert!(response.attempts[1].is_valid);
}

#[tokio::test]
async fn broken_inline_schema_is_a_terminal_config_error() {
    // A schema fragment the validator cannot compile; no generation happens.
    let service = Arc::new(ScriptedService::new(vec![]));
    let inline = vec![ComponentDescriptor::new(
        "Broken",
        "bad fragment",
        json!({"type": "not-a-type"}),
    )];
    let agent = UiAssemblyAgent::new(
        service.clone(),
        Arc::new(ComponentCatalog::builtin()),
        inline,
        AssemblyOptions::default(),
    );

    let response = agent
        .run(r#"{"widgets": [{"name": "Broken"}]}"#, DATA_CONTEXT)
        .await;

    assert_eq!(response.content, CONFIG_ERROR_MESSAGE);
    assert!(response.attempts.is_empty());
    assert!(service.prompts().is_empty());
}
