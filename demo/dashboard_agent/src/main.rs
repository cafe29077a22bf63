use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};
use weft_core::assembly::AssemblyOptions;
use weft_core::catalog::{ComponentCatalog, ComponentDescriptor};
use weft_core::llm::LlmClient;
use weft_core::pipeline::Pipeline;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Logging / tracing (WEFT_LOG, then RUST_LOG, then "info")
    weft_core::telemetry::init_tracing()?;

    info!(
        target: "dashboard_agent",
        "Starting Dashboard Agent demo: query → data orchestration → component selection → A2UI assembly"
    );

    // LLM endpoint comes from WEFT_BASE_URL / WEFT_MODEL / WEFT_API_KEY
    let service = Arc::new(LlmClient::from_env()?);

    // Inline catalog: the BarGraph schema fragment the renderer registers
    let inline = vec![ComponentDescriptor::new(
        "BarGraph",
        "Bar chart bound to numeric data and labels from the data model",
        json!({
            "type": "object",
            "properties": {
                "dataPath": {"type": "string"},
                "labelPath": {"type": "string"},
                "orientation": {"type": "string", "enum": ["vertical", "horizontal"]},
                "barWidth": {"type": "number"},
                "gap": {"type": "number"}
            },
            "required": ["dataPath", "labelPath"]
        }),
    )];

    let catalog = Arc::new(ComponentCatalog::builtin());
    let pipeline = Pipeline::new(service, catalog, inline, AssemblyOptions::default());

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Show me a dashboard with some charts and graphs about energy usage".to_string());

    match pipeline.run(&query).await {
        Ok(output) => {
            for update in &output.updates {
                info!(target: "dashboard_agent", stage = %update.stage, "{}", update.message);
            }
            println!("{}", output.content);
            println!("\nSuggested follow-ups:");
            for suggestion in &output.suggestions {
                println!("  - {suggestion}");
            }
        }
        Err(e) => {
            error!(target: "dashboard_agent", error = %e, "Pipeline run failed");
            return Err(e.into());
        }
    }

    Ok(())
}
