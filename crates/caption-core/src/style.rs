/*
 * style.rs
 * Copyright (c) 2026 Featured Image Caption contributors
 *
 * Caption stylesheet: minification, registration, provisioning.
 */

//! Caption stylesheet handling.
//!
//! The stylesheet source is embedded at compile time and minified
//! through a deterministic, order-sensitive sequence of rewrites. It is
//! attached to the page on demand: only when a caption was actually
//! injected during the render, or unconditionally in editor contexts
//! (where on-demand attachment is not possible during preview
//! composition).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::CaptionConfig;
use crate::error::CaptionError;
use crate::render::{RenderContext, RenderMode, StyleSink};
use crate::Result;

/// Caption stylesheet source, embedded at compile time.
pub const CAPTION_CSS: &str = include_str!("../resources/caption.css");

/// Version stamp for the registered style resource.
pub const STYLE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `/* ... */` comment blocks, including multi-line ones.
static COMMENT_BLOCKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Tabs and line breaks.
static TABS_AND_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\r\n]").unwrap());

/// Semicolons directly before a closing brace.
static TRAILING_SEMICOLONS: Lazy<Regex> = Lazy::new(|| Regex::new(r";+\}").unwrap());

/// Spaces before an opening brace.
static SPACE_BEFORE_BRACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" +\{").unwrap());

/// Spaces after a property colon.
static SPACE_AFTER_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r": +").unwrap());

/// Minify a CSS fragment.
///
/// The rewrites run in a fixed order: strip comment blocks, strip tabs
/// and newlines, strip trailing semicolons before a closing brace,
/// strip spaces before an opening brace, strip spaces after a property
/// colon. Deterministic and idempotent.
pub fn minify_css(css: &str) -> String {
    let css = COMMENT_BLOCKS.replace_all(css, "");
    let css = TABS_AND_NEWLINES.replace_all(&css, "");
    let css = TRAILING_SEMICOLONS.replace_all(&css, "}");
    let css = SPACE_BEFORE_BRACE.replace_all(&css, "{");
    SPACE_AFTER_COLON.replace_all(&css, ":").into_owned()
}

/// A named, versioned style resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleResource {
    pub handle: String,
    pub version: String,
    pub css: String,
}

impl StyleResource {
    pub fn new(
        handle: impl Into<String>,
        version: impl Into<String>,
        css: impl Into<String>,
    ) -> Self {
        Self {
            handle: handle.into(),
            version: version.into(),
            css: css.into(),
        }
    }

    /// The caption stylesheet, minified and versioned with the crate
    /// version, under the configured handle.
    pub fn caption(config: &CaptionConfig) -> Self {
        Self::new(&config.style_handle, STYLE_VERSION, minify_css(CAPTION_CSS))
    }
}

/// Registry of named style resources.
///
/// Registering the same resource twice is a no-op; re-registering a
/// handle with different content is an error.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    styles: HashMap<String, StyleResource>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, resource: StyleResource) -> Result<()> {
        match self.styles.get(&resource.handle) {
            Some(existing) if *existing == resource => Ok(()),
            Some(_) => Err(CaptionError::StyleConflict {
                handle: resource.handle.clone(),
            }),
            None => {
                self.styles.insert(resource.handle.clone(), resource);
                Ok(())
            }
        }
    }

    pub fn get(&self, handle: &str) -> Option<&StyleResource> {
        self.styles.get(handle)
    }
}

/// Attach the caption stylesheet to the host style pipeline if this
/// render needs it.
///
/// Attachment happens when at least one caption was injected during the
/// render, or (with `style_in_editor` enabled) whenever the render
/// runs in editor mode. At most one attachment per render context, no
/// matter how often this is called.
pub fn provision_styles(
    resource: &StyleResource,
    config: &CaptionConfig,
    ctx: &mut RenderContext<'_>,
    sink: &mut dyn StyleSink,
) {
    let editor_fallback = config.style_in_editor && ctx.mode() == RenderMode::Editor;
    if !ctx.style_needed() && !editor_fallback {
        return;
    }
    if !ctx.claim_style_attachment() {
        return;
    }
    tracing::debug!(handle = %resource.handle, "Attaching caption stylesheet");
    sink.add_inline_style(&resource.handle, &resource.css);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MediaMetadata;

    const MINIFIED: &str = ".wp-block-post-featured-image :where(figcaption)\
        {margin-bottom:1em;margin-top:.5em}\
        .wp-block-post-featured-image figcaption a{display:inline;height:auto}";

    struct NoCaption;

    impl MediaMetadata for NoCaption {
        fn featured_image_caption(&self) -> String {
            String::new()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        attached: Vec<(String, String)>,
    }

    impl StyleSink for RecordingSink {
        fn add_inline_style(&mut self, handle: &str, css: &str) {
            self.attached.push((handle.to_string(), css.to_string()));
        }
    }

    #[test]
    fn test_minify_embedded_stylesheet() {
        assert_eq!(minify_css(CAPTION_CSS), MINIFIED);
    }

    #[test]
    fn test_minified_output_clean() {
        let out = minify_css(CAPTION_CSS);
        assert!(!out.contains('\t'));
        assert!(!out.contains('\n'));
        assert!(!out.contains("/*"));
        assert!(!out.contains(";}"));
    }

    #[test]
    fn test_minify_idempotent() {
        let once = minify_css(CAPTION_CSS);
        assert_eq!(minify_css(&once), once);

        let other = "a {\n\tcolor: red;;\n}\n/* gone */\nb   {top: 0;}";
        let once = minify_css(other);
        assert_eq!(minify_css(&once), once);
        assert_eq!(once, "a{color:red}b{top:0}");
    }

    #[test]
    fn test_caption_resource() {
        let resource = StyleResource::caption(&CaptionConfig::default());
        assert_eq!(resource.handle, "wp-block-post-featured-image");
        assert_eq!(resource.version, STYLE_VERSION);
        assert_eq!(resource.css, MINIFIED);
    }

    #[test]
    fn test_registry_idempotent_and_conflicting() {
        let config = CaptionConfig::default();
        let mut registry = StyleRegistry::new();
        registry.register(StyleResource::caption(&config)).unwrap();
        registry.register(StyleResource::caption(&config)).unwrap();
        assert!(registry.get(&config.style_handle).is_some());

        let conflicting = StyleResource::new(&config.style_handle, "9.9.9", "p{}");
        let err = registry.register(conflicting).unwrap_err();
        assert!(matches!(err, CaptionError::StyleConflict { .. }));
    }

    #[test]
    fn test_provision_only_when_needed() {
        let config = CaptionConfig::default();
        let resource = StyleResource::caption(&config);
        let media = NoCaption;
        let mut sink = RecordingSink::default();

        let mut ctx = RenderContext::new(RenderMode::FrontEnd, &media);
        provision_styles(&resource, &config, &mut ctx, &mut sink);
        assert!(sink.attached.is_empty());

        ctx.request_style();
        provision_styles(&resource, &config, &mut ctx, &mut sink);
        assert_eq!(sink.attached.len(), 1);
        assert_eq!(sink.attached[0].0, config.style_handle);
    }

    #[test]
    fn test_provision_deduplicated_within_render() {
        let config = CaptionConfig::default();
        let resource = StyleResource::caption(&config);
        let media = NoCaption;
        let mut sink = RecordingSink::default();

        let mut ctx = RenderContext::new(RenderMode::FrontEnd, &media);
        ctx.request_style();
        for _ in 0..5 {
            provision_styles(&resource, &config, &mut ctx, &mut sink);
        }
        assert_eq!(sink.attached.len(), 1);
    }

    #[test]
    fn test_editor_mode_fallback() {
        let config = CaptionConfig::default();
        let resource = StyleResource::caption(&config);
        let media = NoCaption;

        // Fallback on: attach even though no caption rendered.
        let mut sink = RecordingSink::default();
        let mut ctx = RenderContext::new(RenderMode::Editor, &media);
        provision_styles(&resource, &config, &mut ctx, &mut sink);
        assert_eq!(sink.attached.len(), 1);

        // Fallback off: editor renders behave like the front end.
        let config = CaptionConfig {
            style_in_editor: false,
            ..CaptionConfig::default()
        };
        let mut sink = RecordingSink::default();
        let mut ctx = RenderContext::new(RenderMode::Editor, &media);
        provision_styles(&resource, &config, &mut ctx, &mut sink);
        assert!(sink.attached.is_empty());
    }
}
