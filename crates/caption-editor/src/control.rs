/*
 * control.rs
 * Copyright (c) 2026 Featured Image Caption contributors
 *
 * Toolbar toggle for the caption attribute.
 */

//! Toolbar toggle for the caption attribute.

use caption_core::{SHOW_CAPTION_ATTR, show_caption_in};
use serde_json::{Map, Value};

/// Description of the caption toggle button as the host toolbar renders
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarButton {
    pub label: &'static str,
    pub is_active: bool,
}

/// Build the toggle button for the current caption state.
///
/// The labels reuse the host's own strings so existing translations
/// carry over.
pub fn caption_toggle_button(show_caption: bool) -> ToolbarButton {
    ToolbarButton {
        label: if show_caption {
            "Remove caption"
        } else {
            "Add caption"
        },
        is_active: show_caption,
    }
}

/// Invert the `showCaption` attribute in a flat attribute mapping.
///
/// Pure: returns the updated mapping; persisting it is the host's job.
/// A non-object mapping is treated as empty, so toggling from a
/// malformed state yields `{"showCaption": true}`.
pub fn toggle_show_caption(attributes: &Value) -> Value {
    let mut map = match attributes {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    map.insert(
        SHOW_CAPTION_ATTR.to_string(),
        Value::Bool(!show_caption_in(attributes)),
    );
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_button_mirrors_state() {
        let on = caption_toggle_button(true);
        assert_eq!(on.label, "Remove caption");
        assert!(on.is_active);

        let off = caption_toggle_button(false);
        assert_eq!(off.label, "Add caption");
        assert!(!off.is_active);
    }

    #[test]
    fn test_toggle_from_absent() {
        let toggled = toggle_show_caption(&json!({}));
        assert_eq!(toggled, json!({"showCaption": true}));
    }

    #[test]
    fn test_toggle_inverts_and_preserves_others() {
        let attrs = json!({"showCaption": true, "align": "wide"});
        let toggled = toggle_show_caption(&attrs);
        assert_eq!(toggled, json!({"showCaption": false, "align": "wide"}));

        let back = toggle_show_caption(&toggled);
        assert_eq!(back, json!({"showCaption": true, "align": "wide"}));
    }

    #[test]
    fn test_toggle_from_malformed() {
        assert_eq!(toggle_show_caption(&json!("junk")), json!({"showCaption": true}));
    }
}
