//! Canned domain data tools for the dashboard pipeline.
//!
//! These stand in for live backends; each returns a fixed JSON document the
//! orchestrator stage can pull into the turn's data context.

use super::error::{ToolError, ToolResult};
use super::traits::Tool;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

fn no_arguments_schema() -> Value {
    json!({
        "type": "object",
        "properties": {},
        "required": []
    })
}

fn render(data: &Value) -> ToolResult<String> {
    serde_json::to_string_pretty(data).map_err(|e| ToolError::Execution(e.to_string()))
}

/// Power outage information and statistics.
pub struct OutageDataTool;

#[async_trait]
impl Tool for OutageDataTool {
    fn name(&self) -> String {
        "get_outage_data".to_string()
    }

    fn description(&self) -> String {
        "Get current power outage information and statistics, including locations, times, affected customers, and causes".to_string()
    }

    fn parameters(&self) -> Value {
        no_arguments_schema()
    }

    async fn call(&self, _arguments: Value) -> ToolResult<String> {
        info!(target: "data_tools", tool = "get_outage_data", "Serving outage data");
        render(&json!({
            "outages": [
                {
                    "location": "Downtown Seattle, WA",
                    "start_time": "2024-02-12 14:30",
                    "estimated_restoration": "2024-02-12 18:00",
                    "affected_customers": 2500,
                    "cause": "Transformer failure due to storm damage"
                },
                {
                    "location": "Portland Suburb, OR",
                    "start_time": "2024-02-12 13:15",
                    "estimated_restoration": "2024-02-12 16:30",
                    "affected_customers": 1800,
                    "cause": "Tree branch on power lines"
                },
                {
                    "location": "San Francisco Bay Area, CA",
                    "start_time": "2024-02-12 12:00",
                    "estimated_restoration": "2024-02-12 15:00",
                    "affected_customers": 3200,
                    "cause": "Equipment malfunction"
                },
                {
                    "location": "Los Angeles Downtown, CA",
                    "start_time": "2024-02-12 11:45",
                    "estimated_restoration": "2024-02-12 14:30",
                    "affected_customers": 4100,
                    "cause": "Cable damage during construction"
                }
            ],
            "total_outages": 4,
            "total_affected": 11600
        }))
    }
}

/// Energy consumption and production statistics.
pub struct EnergyDataTool;

#[async_trait]
impl Tool for EnergyDataTool {
    fn name(&self) -> String {
        "get_energy_data".to_string()
    }

    fn description(&self) -> String {
        "Get energy consumption and production statistics, including consumption by source, production by type, and efficiency metrics".to_string()
    }

    fn parameters(&self) -> Value {
        no_arguments_schema()
    }

    async fn call(&self, _arguments: Value) -> ToolResult<String> {
        info!(target: "data_tools", tool = "get_energy_data", "Serving energy data");
        render(&json!({
            "consumption": {
                "total_mwh": 850000,
                "by_source": {
                    "renewable": 420000,
                    "fossil": 380000,
                    "nuclear": 50000
                }
            },
            "production": {
                "total_mwh": 880000,
                "by_type": {
                    "solar": 180000,
                    "wind": 150000,
                    "hydro": 120000,
                    "coal": 200000,
                    "natural_gas": 180000,
                    "nuclear": 50000
                }
            },
            "efficiency_metrics": {
                "grid_efficiency": 94.2,
                "renewable_percentage": 49.5
            }
        }))
    }
}

/// Industry performance and economic statistics.
pub struct IndustryDataTool;

#[async_trait]
impl Tool for IndustryDataTool {
    fn name(&self) -> String {
        "get_industry_data".to_string()
    }

    fn description(&self) -> String {
        "Get industry performance and economic statistics, including production indices, employment numbers, growth rates, and key metrics".to_string()
    }

    fn parameters(&self) -> Value {
        no_arguments_schema()
    }

    async fn call(&self, _arguments: Value) -> ToolResult<String> {
        info!(target: "data_tools", tool = "get_industry_data", "Serving industry data");
        render(&json!({
            "industries": [
                {
                    "name": "Manufacturing",
                    "production_index": 112.5,
                    "employment": 125000,
                    "growth_rate": 3.2,
                    "key_metrics": {
                        "output_value": 450000000u64,
                        "efficiency_score": 87.3
                    }
                },
                {
                    "name": "Technology",
                    "production_index": 145.8,
                    "employment": 98000,
                    "growth_rate": 8.7,
                    "key_metrics": {
                        "output_value": 380000000u64,
                        "efficiency_score": 92.1
                    }
                },
                {
                    "name": "Healthcare",
                    "production_index": 118.3,
                    "employment": 156000,
                    "growth_rate": 4.1,
                    "key_metrics": {
                        "output_value": 520000000u64,
                        "efficiency_score": 89.5
                    }
                },
                {
                    "name": "Energy",
                    "production_index": 108.9,
                    "employment": 67000,
                    "growth_rate": 2.8,
                    "key_metrics": {
                        "output_value": 290000000u64,
                        "efficiency_score": 85.7
                    }
                },
                {
                    "name": "Transportation",
                    "production_index": 115.2,
                    "employment": 89000,
                    "growth_rate": 3.9,
                    "key_metrics": {
                        "output_value": 340000000u64,
                        "efficiency_score": 88.2
                    }
                }
            ],
            "overall_metrics": {
                "total_employment": 535000,
                "average_growth": 4.5,
                "top_performing_industry": "Technology"
            }
        }))
    }
}
