//! Merges custom widget schemas into the native A2UI message schema.

use serde_json::{json, Value};
use tracing::warn;

use crate::catalog::ComponentDescriptor;

use super::native::RESERVED_COMPONENT_NAMES;

/// Nesting path from the message schema root down to the component property
/// bag that custom widget schemas are injected into.
pub const COMPONENT_BAG_PATH: &[&str] = &[
    "properties",
    "surfaceUpdate",
    "properties",
    "components",
    "items",
    "properties",
    "component",
    "properties",
];

/// Inject custom component schemas into `base`, optionally filtered to
/// `allowed` (case-insensitive).
///
/// Composition fails soft: if `base` does not contain the expected component
/// bag, the base schema is returned unchanged with a warning. A degraded
/// schema still validates native messages; a hard stop would validate
/// nothing. Composition is idempotent for fixed inputs.
pub fn compose(
    base: &Value,
    custom: &[ComponentDescriptor],
    allowed: Option<&[String]>,
) -> Value {
    let mut schema = base.clone();
    if custom.is_empty() {
        return schema;
    }

    let bag = match component_bag_mut(&mut schema) {
        Some(bag) => bag,
        None => {
            warn!(
                target: "schema",
                "Base schema is missing the component bag; returning it unchanged"
            );
            return schema;
        }
    };

    let allowed_folded: Option<Vec<String>> =
        allowed.map(|names| names.iter().map(|n| n.to_lowercase()).collect());

    for descriptor in custom {
        if let Some(ref allow) = allowed_folded {
            if !allow.contains(&descriptor.name.to_lowercase()) {
                continue;
            }
        }
        // Reserved native keys are never overwritten; a colliding custom
        // schema is dropped rather than shadowing the platform component.
        if RESERVED_COMPONENT_NAMES
            .iter()
            .any(|r| r.eq_ignore_ascii_case(&descriptor.name))
        {
            warn!(
                target: "schema",
                component = %descriptor.name,
                "Custom schema collides with a reserved native component; skipping"
            );
            continue;
        }
        bag.insert(descriptor.name.clone(), descriptor.payload.clone());
    }

    schema
}

fn component_bag_mut(schema: &mut Value) -> Option<&mut serde_json::Map<String, Value>> {
    let mut node = schema;
    for key in COMPONENT_BAG_PATH {
        node = node.get_mut(key)?;
    }
    node.as_object_mut()
}

/// Wrap a single-message schema as the array-of-messages validator shape.
pub fn array_validator(single_message_schema: &Value) -> Value {
    json!({ "type": "array", "items": single_message_schema })
}
