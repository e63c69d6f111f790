/*
 * schema.rs
 * Copyright (c) 2026 Featured Image Caption contributors
 *
 * Block type schema extension.
 */

//! Block type schema extension.
//!
//! Registers the `showCaption` attribute on the featured image block's
//! type settings so the host parses, validates, and persists it. Once
//! declared, every instance of the block carries the attribute; absence
//! is equivalent to `false`.

use serde_json::{Map, Value, json};

use crate::block::{BlockMetadata, SHOW_CAPTION_ATTR, TARGET_BLOCK};

/// Merge the `showCaption` attribute schema into a block type's
/// in-progress settings.
///
/// Only settings for [`TARGET_BLOCK`] are touched; any other block
/// type's settings pass through unchanged. Non-object settings input is
/// replaced with an empty object rather than failing. Idempotent: a
/// second application writes the identical entry.
pub fn extend_block_schema(settings: Value, metadata: &BlockMetadata) -> Value {
    let mut settings = match settings {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    if metadata.name == TARGET_BLOCK {
        let attributes = settings
            .entry("attributes")
            .or_insert_with(|| Value::Object(Map::new()));
        if !attributes.is_object() {
            *attributes = Value::Object(Map::new());
        }
        if let Some(map) = attributes.as_object_mut() {
            map.insert(
                SHOW_CAPTION_ATTR.to_string(),
                json!({"type": "boolean", "default": false}),
            );
        }
    }

    Value::Object(settings)
}
