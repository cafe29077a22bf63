use serde_json::json;
use weft_core::schema::native_message_schema;
use weft_core::validate::ValidationError;
use weft_core::{array_validator, UiValidator};

fn validator() -> UiValidator {
    UiValidator::new(&array_validator(&native_message_schema())).unwrap()
}

#[test]
fn accepts_a_complete_message_array() {
    let messages = json!([
        {
            "beginRendering": {
                "surfaceId": "dashboard",
                "root": "main-container",
                "styles": {"font": "Arial", "primaryColor": "#007bff"}
            }
        },
        {
            "surfaceUpdate": {
                "surfaceId": "dashboard",
                "components": [
                    {
                        "id": "main-container",
                        "component": {"Column": {"children": {"explicitList": ["title"]}}}
                    },
                    {
                        "id": "title",
                        "component": {"Text": {"text": {"literalString": "Energy"}, "usageHint": "h2"}}
                    }
                ]
            }
        },
        {
            "dataModelUpdate": {
                "surfaceId": "dashboard",
                "contents": [
                    {"key": "values", "valueMap": [{"key": "0", "valueNumber": 3.2}]}
                ]
            }
        }
    ]);

    let validated = validator().validate(&messages.to_string()).unwrap();
    assert_eq!(validated, messages);
}

#[test]
fn malformed_json_is_reported_as_such() {
    let err = validator().validate("[{not json").unwrap_err();
    assert!(matches!(err, ValidationError::MalformedJson(_)));
}

#[test]
fn non_array_payload_is_a_schema_violation() {
    let err = validator()
        .validate(r#"{"beginRendering": {"surfaceId": "s", "root": "r"}}"#)
        .unwrap_err();
    assert!(matches!(err, ValidationError::SchemaViolation { .. }));
}

#[test]
fn message_with_two_kinds_is_rejected() {
    let messages = json!([{
        "beginRendering": {"surfaceId": "s", "root": "r"},
        "surfaceUpdate": {"surfaceId": "s", "components": []}
    }]);
    let err = validator().validate(&messages.to_string()).unwrap_err();
    assert!(matches!(err, ValidationError::SchemaViolation { .. }));
}

#[test]
fn unknown_component_is_rejected_with_instance_path() {
    let messages = json!([{
        "surfaceUpdate": {
            "surfaceId": "dashboard",
            "components": [{
                "id": "chart",
                "component": {"FancyChart": {"dataPath": "/x"}}
            }]
        }
    }]);
    match validator().validate(&messages.to_string()).unwrap_err() {
        ValidationError::SchemaViolation { path, .. } => {
            assert!(path.contains("/0/surfaceUpdate/components/0"), "path was {path}");
        }
        other => panic!("expected SchemaViolation, got {other:?}"),
    }
}

#[test]
fn component_entry_must_hold_exactly_one_component() {
    let messages = json!([{
        "surfaceUpdate": {
            "surfaceId": "dashboard",
            "components": [{
                "id": "both",
                "component": {
                    "Text": {"text": {"literalString": "a"}},
                    "Card": {"child": "x"}
                }
            }]
        }
    }]);
    assert!(validator().validate(&messages.to_string()).is_err());
}

#[test]
fn bad_schema_fails_at_compile_time_not_validation() {
    let broken = json!({"type": "array", "items": {"type": "not-a-type"}});
    assert!(UiValidator::new(&broken).is_err());
}
