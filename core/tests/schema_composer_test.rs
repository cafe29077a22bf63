use serde_json::json;
use weft_core::catalog::ComponentDescriptor;
use weft_core::schema::{compose, native_message_schema, COMPONENT_BAG_PATH};
use weft_core::{array_validator, UiValidator};

fn bar_graph() -> ComponentDescriptor {
    ComponentDescriptor::new(
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
    )
}

fn component_bag(schema: &serde_json::Value) -> &serde_json::Map<String, serde_json::Value> {
    let mut node = schema;
    for key in COMPONENT_BAG_PATH {
        node = node.get(key).expect("component bag path present");
    }
    node.as_object().expect("bag is an object")
}

#[test]
fn injects_custom_schema_into_component_bag() {
    let base = native_message_schema();
    let composed = compose(&base, &[bar_graph()], None);

    let bag = component_bag(&composed);
    assert!(bag.contains_key("BarGraph"));
    assert!(bag.contains_key("Text"), "native entries survive composition");
}

#[test]
fn composition_is_idempotent() {
    let base = native_message_schema();
    let custom = [bar_graph()];
    let once = compose(&base, &custom, None);
    let twice = compose(&once, &custom, None);
    assert_eq!(once, twice);
}

#[test]
fn allow_list_filters_case_insensitively() {
    let base = native_message_schema();
    let allowed = vec!["bargraph".to_string()];
    let composed = compose(
        &base,
        &[
            bar_graph(),
            ComponentDescriptor::new("LineGraph", "Line chart", json!({"type": "object"})),
        ],
        Some(&allowed),
    );

    let bag = component_bag(&composed);
    assert!(bag.contains_key("BarGraph"));
    assert!(!bag.contains_key("LineGraph"));
}

#[test]
fn unselected_custom_component_never_validates() {
    let base = native_message_schema();
    let allowed = vec!["bargraph".to_string()];
    let composed = compose(
        &base,
        &[
            bar_graph(),
            ComponentDescriptor::new(
                "LineGraph",
                "Line chart",
                json!({"type": "object", "properties": {"dataPath": {"type": "string"}}}),
            ),
        ],
        Some(&allowed),
    );
    let validator = UiValidator::new(&array_validator(&composed)).unwrap();

    let with_line_graph = json!([{
        "surfaceUpdate": {
            "surfaceId": "dashboard",
            "components": [{
                "id": "chart",
                "component": {"LineGraph": {"dataPath": "/values"}}
            }]
        }
    }]);
    assert!(validator.validate(&with_line_graph.to_string()).is_err());

    let with_bar_graph = json!([{
        "surfaceUpdate": {
            "surfaceId": "dashboard",
            "components": [{
                "id": "chart",
                "component": {"BarGraph": {"dataPath": "/values", "labelPath": "/labels"}}
            }]
        }
    }]);
    assert!(validator.validate(&with_bar_graph.to_string()).is_ok());
}

#[test]
fn reserved_native_names_are_never_overwritten() {
    let base = native_message_schema();
    let malicious = ComponentDescriptor::new("Text", "shadow", json!({"type": "object"}));
    let composed = compose(&base, &[malicious], None);

    let bag = component_bag(&composed);
    // The native Text schema still requires its text property.
    assert_eq!(
        bag["Text"]["required"],
        json!(["text"]),
        "native Text schema must survive a colliding custom entry"
    );
}

#[test]
fn missing_component_bag_fails_soft() {
    let base = json!({"type": "object", "properties": {}});
    let composed = compose(&base, &[bar_graph()], None);
    assert_eq!(composed, base, "base returned unchanged when the bag is absent");
}

#[test]
fn empty_custom_list_returns_base_unchanged() {
    let base = native_message_schema();
    assert_eq!(compose(&base, &[], None), base);
}

#[test]
fn array_validator_wraps_single_message_schema() {
    let single = json!({"type": "object"});
    let wrapped = array_validator(&single);
    assert_eq!(wrapped["type"], "array");
    assert_eq!(wrapped["items"], single);
}
