//! A2UI message schema: the native base schema and composition with custom
//! widget schemas.

mod composer;
mod native;

pub use composer::{array_validator, compose, COMPONENT_BAG_PATH};
pub use native::{native_message_schema, RESERVED_COMPONENT_NAMES};
