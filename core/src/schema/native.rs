//! The native A2UI single-message schema.
//!
//! One message is exactly one of `beginRendering`, `surfaceUpdate` or
//! `dataModelUpdate`. Component properties are either literal values or
//! `{"path": "/json/pointer"}` data-model references.

use serde_json::{json, Value};

/// Component names owned by the platform. Custom widget schemas may never
/// shadow these keys in the composed schema.
pub const RESERVED_COMPONENT_NAMES: &[&str] =
    &["Text", "Image", "Row", "Column", "Card", "Button", "Icon"];

/// Schema for a string property that is either a literal or a data binding.
fn string_binding() -> Value {
    json!({
        "type": "object",
        "properties": {
            "literalString": { "type": "string" },
            "path": { "type": "string" }
        },
        "additionalProperties": false,
        "minProperties": 1,
        "maxProperties": 1
    })
}

/// Schema for a child-list property (`{"explicitList": ["id", ...]}` or a
/// data binding).
fn children_binding() -> Value {
    json!({
        "type": "object",
        "properties": {
            "explicitList": { "type": "array", "items": { "type": "string" } },
            "path": { "type": "string" }
        },
        "additionalProperties": false,
        "minProperties": 1,
        "maxProperties": 1
    })
}

fn native_component_bag() -> Value {
    json!({
        "Text": {
            "type": "object",
            "properties": {
                "text": string_binding(),
                "usageHint": { "type": "string" }
            },
            "required": ["text"],
            "additionalProperties": false
        },
        "Image": {
            "type": "object",
            "properties": {
                "url": string_binding(),
                "fit": { "type": "string" },
                "usageHint": { "type": "string" }
            },
            "required": ["url"],
            "additionalProperties": false
        },
        "Row": {
            "type": "object",
            "properties": {
                "children": children_binding(),
                "distribution": { "type": "string" },
                "alignment": { "type": "string" }
            },
            "required": ["children"],
            "additionalProperties": false
        },
        "Column": {
            "type": "object",
            "properties": {
                "children": children_binding(),
                "distribution": { "type": "string" },
                "alignment": { "type": "string" }
            },
            "required": ["children"],
            "additionalProperties": false
        },
        "Card": {
            "type": "object",
            "properties": {
                "child": { "type": "string" }
            },
            "required": ["child"],
            "additionalProperties": false
        },
        "Button": {
            "type": "object",
            "properties": {
                "child": { "type": "string" },
                "primary": { "type": "boolean" },
                "action": {
                    "type": "object",
                    "properties": { "name": { "type": "string" } },
                    "required": ["name"]
                }
            },
            "required": ["child"],
            "additionalProperties": false
        },
        "Icon": {
            "type": "object",
            "properties": {
                "name": string_binding()
            },
            "required": ["name"],
            "additionalProperties": false
        }
    })
}

/// One `dataModelUpdate` content entry: a key plus exactly one tagged value.
/// Nested `valueMap` entries are validated shallowly (objects), matching the
/// tolerance of the renderer.
fn data_content_entry() -> Value {
    json!({
        "type": "object",
        "properties": {
            "key": { "type": "string" },
            "valueString": { "type": "string" },
            "valueNumber": { "type": "number" },
            "valueMap": { "type": "array", "items": { "type": "object" } }
        },
        "required": ["key"],
        "additionalProperties": false
    })
}

/// Build the base schema for one A2UI message.
///
/// `additionalProperties: false` at every level is what makes validation
/// meaningful: an unknown message kind or an un-injected component name is a
/// schema violation, not silently accepted noise.
pub fn native_message_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "A2UI Message",
        "type": "object",
        "properties": {
            "beginRendering": {
                "type": "object",
                "properties": {
                    "surfaceId": { "type": "string" },
                    "root": { "type": "string" },
                    "styles": { "type": "object" }
                },
                "required": ["surfaceId", "root"],
                "additionalProperties": false
            },
            "surfaceUpdate": {
                "type": "object",
                "properties": {
                    "surfaceId": { "type": "string" },
                    "components": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "id": { "type": "string" },
                                "component": {
                                    "type": "object",
                                    "properties": native_component_bag(),
                                    "additionalProperties": false,
                                    "minProperties": 1,
                                    "maxProperties": 1
                                }
                            },
                            "required": ["id", "component"],
                            "additionalProperties": false
                        }
                    }
                },
                "required": ["surfaceId", "components"],
                "additionalProperties": false
            },
            "dataModelUpdate": {
                "type": "object",
                "properties": {
                    "surfaceId": { "type": "string" },
                    "path": { "type": "string" },
                    "contents": { "type": "array", "items": data_content_entry() }
                },
                "required": ["surfaceId", "contents"],
                "additionalProperties": false
            }
        },
        "additionalProperties": false,
        "minProperties": 1,
        "maxProperties": 1
    })
}
