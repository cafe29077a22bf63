//! Static registration list of native component examples.
//!
//! Each example is a complete, renderable A2UI message array the assembly
//! agent can copy structure from; the examples are served to the model
//! through the catalog tools, never injected into the validation schema.

use serde_json::json;

use super::ComponentDescriptor;

pub fn native_examples() -> Vec<ComponentDescriptor> {
    vec![
        ComponentDescriptor::new(
            "Text",
            "Displays text content with various styling options like headings, body text, or captions.",
            json!([
                { "beginRendering": { "surfaceId": "text-demo", "root": "text-comp" } },
                { "surfaceUpdate": {
                    "surfaceId": "text-demo",
                    "components": [
                        { "id": "text-comp", "component": { "Text": { "usageHint": "h2", "text": { "literalString": "Hello World" } } } }
                    ]
                } },
                { "dataModelUpdate": { "surfaceId": "text-demo", "path": "/", "contents": [] } }
            ]),
        ),
        ComponentDescriptor::new(
            "Image",
            "Displays images with configurable sizing, fitting options, and usage hints for different contexts.",
            json!([
                { "beginRendering": { "surfaceId": "image-demo", "root": "image-comp" } },
                { "surfaceUpdate": {
                    "surfaceId": "image-demo",
                    "components": [
                        { "id": "image-comp", "component": { "Image": { "url": { "literalString": "https://example.com/image.jpg" }, "fit": "cover", "usageHint": "mediumFeature" } } }
                    ]
                } },
                { "dataModelUpdate": { "surfaceId": "image-demo", "path": "/", "contents": [] } }
            ]),
        ),
        ComponentDescriptor::new(
            "Row",
            "Horizontal layout container that arranges child components side by side with configurable distribution and alignment.",
            json!([
                { "beginRendering": { "surfaceId": "row-demo", "root": "row-comp" } },
                { "surfaceUpdate": {
                    "surfaceId": "row-demo",
                    "components": [
                        { "id": "row-comp", "component": { "Row": {
                            "children": { "explicitList": ["text-1", "text-2", "text-3"] },
                            "distribution": "spaceEvenly",
                            "alignment": "center"
                        } } },
                        { "id": "text-1", "component": { "Text": { "text": { "literalString": "Left" } } } },
                        { "id": "text-2", "component": { "Text": { "text": { "literalString": "Center" }, "usageHint": "h2" } } },
                        { "id": "text-3", "component": { "Text": { "text": { "literalString": "Right" } } } }
                    ]
                } },
                { "dataModelUpdate": { "surfaceId": "row-demo", "path": "/", "contents": [] } }
            ]),
        ),
        ComponentDescriptor::new(
            "Column",
            "Vertical layout container that arranges child components in a column with configurable distribution and alignment.",
            json!([
                { "beginRendering": { "surfaceId": "column-demo", "root": "column-comp" } },
                { "surfaceUpdate": {
                    "surfaceId": "column-demo",
                    "components": [
                        { "id": "column-comp", "component": { "Column": {
                            "children": { "explicitList": ["title", "subtitle", "content"] },
                            "distribution": "start",
                            "alignment": "stretch"
                        } } },
                        { "id": "title", "component": { "Text": { "text": { "literalString": "Main Title" }, "usageHint": "h1" } } },
                        { "id": "subtitle", "component": { "Text": { "text": { "literalString": "Subtitle text here" }, "usageHint": "h3" } } },
                        { "id": "content", "component": { "Text": { "text": { "literalString": "This is the main content area with more detailed information." }, "usageHint": "body" } } }
                    ]
                } },
                { "dataModelUpdate": { "surfaceId": "column-demo", "path": "/", "contents": [] } }
            ]),
        ),
        ComponentDescriptor::new(
            "Card",
            "Container component that wraps content in a visually distinct card with padding and styling.",
            json!([
                { "beginRendering": { "surfaceId": "card-demo", "root": "card-comp" } },
                { "surfaceUpdate": {
                    "surfaceId": "card-demo",
                    "components": [
                        { "id": "card-comp", "component": { "Card": { "child": "content-column" } } },
                        { "id": "content-column", "component": { "Column": {
                            "children": { "explicitList": ["card-title", "card-text"] }
                        } } },
                        { "id": "card-title", "component": { "Text": { "text": { "literalString": "Card Title" }, "usageHint": "h3" } } },
                        { "id": "card-text", "component": { "Text": { "text": { "literalString": "This is content inside a card component. Cards provide visual separation and grouping for related content." }, "usageHint": "body" } } }
                    ]
                } },
                { "dataModelUpdate": { "surfaceId": "card-demo", "path": "/", "contents": [] } }
            ]),
        ),
        ComponentDescriptor::new(
            "Button",
            "Interactive button component that can trigger client-side actions when clicked.",
            json!([
                { "beginRendering": { "surfaceId": "button-demo", "root": "button-comp" } },
                { "surfaceUpdate": {
                    "surfaceId": "button-demo",
                    "components": [
                        { "id": "button-comp", "component": { "Button": { "child": "btn-text", "primary": true, "action": { "name": "click_action" } } } },
                        { "id": "btn-text", "component": { "Text": { "text": { "literalString": "Click Me" } } } }
                    ]
                } },
                { "dataModelUpdate": { "surfaceId": "button-demo", "path": "/", "contents": [] } }
            ]),
        ),
        ComponentDescriptor::new(
            "Icon",
            "Displays predefined icons for visual elements and user interface indicators.",
            json!([
                { "beginRendering": { "surfaceId": "icon-demo", "root": "icon-comp" } },
                { "surfaceUpdate": {
                    "surfaceId": "icon-demo",
                    "components": [
                        { "id": "icon-comp", "component": { "Icon": { "name": { "literalString": "info" } } } }
                    ]
                } },
                { "dataModelUpdate": { "surfaceId": "icon-demo", "path": "/", "contents": [] } }
            ]),
        ),
    ]
}
