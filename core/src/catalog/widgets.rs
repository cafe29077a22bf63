//! Static registration list of built-in custom widget examples.

use serde_json::json;

use super::ComponentDescriptor;

pub fn widget_examples() -> Vec<ComponentDescriptor> {
    vec![
        ComponentDescriptor::new(
            "BarGraph",
            "component designed to display bar charts comparing data values with labels. Requires dataPath for values and labelPath for categories.",
            json!([
                { "beginRendering": { "surfaceId": "bar-chart-view", "root": "main-container" } },
                { "surfaceUpdate": {
                    "surfaceId": "bar-chart-view",
                    "components": [
                        { "id": "main-container", "component": { "Column": { "children": { "explicitList": ["bar-chart"] } } } },
                        { "id": "bar-chart", "component": { "BarGraph": {
                            "dataPath": "/chartData",
                            "labelPath": "/chartLabels",
                            "title": "Outages comparison by regions"
                        } } }
                    ]
                } },
                { "dataModelUpdate": {
                    "surfaceId": "bar-chart-view",
                    "path": "/",
                    "contents": [
                        { "key": "chartData", "valueMap": [
                            { "key": "0", "valueNumber": 150 },
                            { "key": "1", "valueNumber": 200 },
                            { "key": "2", "valueNumber": 100 },
                            { "key": "3", "valueNumber": 300 }
                        ] },
                        { "key": "chartLabels", "valueMap": [
                            { "key": "0", "valueString": "Q1" },
                            { "key": "1", "valueString": "Q2" },
                            { "key": "2", "valueString": "Q3" },
                            { "key": "3", "valueString": "Q4" }
                        ] }
                    ]
                } }
            ]),
        ),
        ComponentDescriptor::new(
            "LineGraph",
            "component designed to display line charts with multiple series, showing trends over time or categories. Requires x-axis labels and series data with names, colors, and value arrays.",
            json!([
                { "beginRendering": { "surfaceId": "line-chart-view", "root": "main-container" } },
                { "surfaceUpdate": {
                    "surfaceId": "line-chart-view",
                    "components": [
                        { "id": "main-container", "component": { "Column": { "children": { "explicitList": ["title", "line-chart"] } } } },
                        { "id": "title", "component": { "Text": { "usageHint": "h2", "text": { "literalString": "Trend Analysis" } } } },
                        { "id": "line-chart", "component": { "LineGraph": {
                            "labelPath": "/lineLabels",
                            "seriesPath": "/lineSeries",
                            "title": "Energy production by quarter"
                        } } }
                    ]
                } },
                { "dataModelUpdate": {
                    "surfaceId": "line-chart-view",
                    "path": "/",
                    "contents": [
                        { "key": "lineLabels", "valueMap": [
                            { "key": "0", "valueString": "Q1" },
                            { "key": "1", "valueString": "Q2" },
                            { "key": "2", "valueString": "Q3" },
                            { "key": "3", "valueString": "Q4" }
                        ] },
                        { "key": "lineSeries", "valueMap": [
                            { "key": "0", "valueMap": [
                                { "key": "name", "valueString": "Solar" },
                                { "key": "color", "valueString": "#f5a623" },
                                { "key": "values", "valueMap": [
                                    { "key": "0", "valueNumber": 120 },
                                    { "key": "1", "valueNumber": 160 },
                                    { "key": "2", "valueNumber": 210 },
                                    { "key": "3", "valueNumber": 180 }
                                ] }
                            ] }
                        ] }
                    ]
                } }
            ]),
        ),
        ComponentDescriptor::new(
            "KpiCard",
            "component designed to display key performance indicators in card format with values, labels, icons, and change indicators. Requires KPI data with label, value, and optional unit, change, icon, and color fields.",
            json!([
                { "beginRendering": { "surfaceId": "kpi-dashboard", "root": "main-container" } },
                { "surfaceUpdate": {
                    "surfaceId": "kpi-dashboard",
                    "components": [
                        { "id": "main-container", "component": { "Column": { "children": { "explicitList": ["title", "kpi-card"] } } } },
                        { "id": "title", "component": { "Text": { "usageHint": "h2", "text": { "literalString": "Key Performance Indicators" } } } },
                        { "id": "kpi-card", "component": { "KpiCard": { "dataPath": "/kpiData" } } }
                    ]
                } },
                { "dataModelUpdate": {
                    "surfaceId": "kpi-dashboard",
                    "path": "/",
                    "contents": [
                        { "key": "kpiData", "valueMap": [
                            { "key": "label", "valueString": "Grid Efficiency" },
                            { "key": "value", "valueNumber": 94.2 },
                            { "key": "unit", "valueString": "%" },
                            { "key": "change", "valueNumber": 1.3 },
                            { "key": "icon", "valueString": "bolt" },
                            { "key": "color", "valueString": "#2ecc71" }
                        ] }
                    ]
                } }
            ]),
        ),
        ComponentDescriptor::new(
            "OutageTable",
            "component designed to display tabular data for outages with columns for ID, location, status, severity, start time, estimated restoration, and affected customers. Requires array of outage record objects.",
            json!([
                { "beginRendering": { "surfaceId": "outage-table-view", "root": "main-container" } },
                { "surfaceUpdate": {
                    "surfaceId": "outage-table-view",
                    "components": [
                        { "id": "main-container", "component": { "Column": { "children": { "explicitList": ["title", "outage-table"] } } } },
                        { "id": "title", "component": { "Text": { "usageHint": "h2", "text": { "literalString": "Active Outages" } } } },
                        { "id": "outage-table", "component": { "OutageTable": { "dataPath": "/outageData" } } }
                    ]
                } },
                { "dataModelUpdate": {
                    "surfaceId": "outage-table-view",
                    "path": "/",
                    "contents": [
                        { "key": "outageData", "valueMap": [
                            { "key": "0", "valueMap": [
                                { "key": "id", "valueString": "OUT-001" },
                                { "key": "location", "valueString": "Downtown Seattle, WA" },
                                { "key": "status", "valueString": "active" },
                                { "key": "severity", "valueString": "high" },
                                { "key": "startTime", "valueString": "2024-02-12 14:30" },
                                { "key": "estimatedRestoration", "valueString": "2024-02-12 18:00" },
                                { "key": "affectedCustomers", "valueNumber": 2500 }
                            ] }
                        ] }
                    ]
                } }
            ]),
        ),
        ComponentDescriptor::new(
            "MapComponent",
            "component designed to display pins over a map at a given location. Requires exact coordinates and exact coordinates placement for the place of interest",
            json!([
                { "beginRendering": { "surfaceId": "map-view", "root": "main-column" } },
                { "surfaceUpdate": {
                    "surfaceId": "map-view",
                    "components": [
                        { "id": "main-column", "component": { "Column": { "children": { "explicitList": ["title", "location-map"] } } } },
                        { "id": "title", "component": { "Text": { "usageHint": "h2", "text": { "literalString": "Location Map" } } } },
                        { "id": "location-map", "component": { "MapComponent": { "dataPath": "/mapData" } } }
                    ]
                } },
                { "dataModelUpdate": {
                    "surfaceId": "map-view",
                    "path": "/",
                    "contents": [
                        { "key": "mapData", "valueMap": [
                            { "key": "0", "valueMap": [
                                { "key": "label", "valueString": "Downtown Seattle" },
                                { "key": "latitude", "valueNumber": 47.6062 },
                                { "key": "longitude", "valueNumber": -122.3321 }
                            ] }
                        ] }
                    ]
                } }
            ]),
        ),
        ComponentDescriptor::new(
            "TimelineComponent",
            "component designed to show the history of events ocurred over a time span. Requires good time definition and description of events.",
            json!([
                { "beginRendering": { "surfaceId": "timeline-view", "root": "main-column" } },
                { "surfaceUpdate": {
                    "surfaceId": "timeline-view",
                    "components": [
                        { "id": "main-column", "component": { "Column": { "children": { "explicitList": ["title", "event-timeline"] } } } },
                        { "id": "title", "component": { "Text": { "usageHint": "h2", "text": { "literalString": "Event Timeline" } } } },
                        { "id": "event-timeline", "component": { "TimelineComponent": { "dataPath": "/timelineData" } } }
                    ]
                } },
                { "dataModelUpdate": {
                    "surfaceId": "timeline-view",
                    "path": "/",
                    "contents": [
                        { "key": "timelineData", "valueMap": [
                            { "key": "0", "valueMap": [
                                { "key": "time", "valueString": "2024-02-12 14:30" },
                                { "key": "title", "valueString": "Transformer failure" },
                                { "key": "description", "valueString": "Storm damage took a downtown transformer offline." }
                            ] },
                            { "key": "1", "valueMap": [
                                { "key": "time", "valueString": "2024-02-12 18:00" },
                                { "key": "title", "valueString": "Service restored" },
                                { "key": "description", "valueString": "Crews replaced the damaged unit and restored power." }
                            ] }
                        ] }
                    ]
                } }
            ]),
        ),
    ]
}
