/*
 * config.rs
 * Copyright (c) 2026 Featured Image Caption contributors
 *
 * Plugin configuration.
 */

//! Plugin configuration.
//!
//! Every field has a default, so an empty JSON object (or no
//! configuration at all) yields a working setup:
//!
//! ```json
//! {
//!     "editor_placeholder": "Caption goes here.",
//!     "style_handle": "wp-block-post-featured-image",
//!     "style_in_editor": true
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::Result;

/// Configuration for the caption plugin.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CaptionConfig {
    /// Placeholder text shown in the editor canvas while the caption
    /// toggle is on. The real caption lives on the media item and is
    /// only resolved at render time.
    pub editor_placeholder: String,

    /// Handle the caption stylesheet is registered and attached under.
    pub style_handle: String,

    /// Attach the stylesheet unconditionally in editor contexts, where
    /// on-demand attachment is not possible during preview composition.
    pub style_in_editor: bool,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            editor_placeholder: "(Any caption provided for the current featured image \
                                 in the Media Library will go here.)"
                .to_string(),
            style_handle: "wp-block-post-featured-image".to_string(),
            style_in_editor: true,
        }
    }
}

impl CaptionConfig {
    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
