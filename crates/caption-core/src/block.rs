/*
 * block.rs
 * Copyright (c) 2026 Featured Image Caption contributors
 *
 * Block identity and attribute access.
 */

//! Block identity and attribute access.
//!
//! The host hands block data across its boundary as untyped JSON. This
//! module resolves that data into typed values once, at the boundary:
//!
//! - [`BlockKind`] classifies a block type name a single time instead
//!   of repeating string comparisons per instance.
//! - [`BlockInstance`] wraps one instance's attribute mapping with
//!   lenient construction, so a misbehaving upstream integration can
//!   never break a render.

use serde::Deserialize;
use serde_json::{Map, Value};

/// The block type this plugin extends.
pub const TARGET_BLOCK: &str = "core/post-featured-image";

/// The attribute carrying the caption flag.
pub const SHOW_CAPTION_ATTR: &str = "showCaption";

/// Class name of the block's outer wrapper element.
pub const BLOCK_CLASS: &str = "wp-block-post-featured-image";

/// Semantic class name applied to injected caption elements.
pub const CAPTION_CLASS: &str = "wp-element-caption";

/// Whether a block type is the one this plugin extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    FeaturedImage,
    Other,
}

impl BlockKind {
    /// Classify a block type name. Exact, case-sensitive comparison;
    /// resolved once per instance at the host boundary.
    pub fn from_name(name: &str) -> Self {
        if name == TARGET_BLOCK {
            Self::FeaturedImage
        } else {
            Self::Other
        }
    }
}

/// Registration metadata for a block type, as passed to the schema
/// extension hook.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockMetadata {
    pub name: String,
}

/// Read the caption flag from a flat attribute mapping.
///
/// Absent means `false`. Present values use host-style truthiness so
/// documents persisted by older host versions (which may store the
/// flag as `1` or `"1"`) keep working.
pub fn show_caption_in(attributes: &Value) -> bool {
    attributes.get(SHOW_CAPTION_ATTR).is_some_and(is_truthy)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// One block instance's resolved identity and attributes.
#[derive(Debug, Clone)]
pub struct BlockInstance {
    kind: BlockKind,
    attributes: Value,
}

impl BlockInstance {
    /// Build from the host's parsed block record as passed to the
    /// render filter: `{"attrs": {...}, ...}`. Tolerates any JSON
    /// shape; a record without a usable `attrs` object behaves like a
    /// block with no attributes.
    pub fn from_render_record(name: &str, record: &Value) -> Self {
        let attributes = record
            .get("attrs")
            .filter(|attrs| attrs.is_object())
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        Self {
            kind: BlockKind::from_name(name),
            attributes,
        }
    }

    /// Build from a flat attribute mapping (the editor-side shape).
    pub fn from_attributes(name: &str, attributes: Value) -> Self {
        let attributes = if attributes.is_object() {
            attributes
        } else {
            Value::Object(Map::new())
        };
        Self {
            kind: BlockKind::from_name(name),
            attributes,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn attributes(&self) -> &Value {
        &self.attributes
    }

    /// Whether this instance asked for a caption.
    pub fn show_caption(&self) -> bool {
        show_caption_in(&self.attributes)
    }
}

/// Coerce host-provided markup to a string.
///
/// A misbehaving upstream integration can pass any JSON value through
/// the render filter; anything but a string becomes the empty string.
pub fn coerce_markup(markup: &Value) -> String {
    markup.as_str().unwrap_or("").to_string()
}
