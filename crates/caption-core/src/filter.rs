/*
 * filter.rs
 * Copyright (c) 2026 Featured Image Caption contributors
 *
 * Render-time caption injection filter.
 */

//! Render-time caption injection filter.
//!
//! Intercepts the final markup of a featured image block instance and,
//! when the instance asked for a caption, splices the sanitized caption
//! text in as the wrapper's last child:
//!
//! 1. `showCaption` absent or falsy: return the markup unchanged. This
//!    is the dominant path and short-circuits before any caption
//!    resolution or sanitization work.
//! 2. Resolve the caption from the media metadata service; empty
//!    (including after sanitization) means nothing to do.
//! 3. Sanitize through the caption allow-list.
//! 4. Splice a `<figcaption>` immediately before the wrapper's closing
//!    tag. If there is no closing tag the filter never produces
//!    malformed output.
//! 5. Signal once that the caption stylesheet is needed on this page.

use crate::block::{BlockInstance, CAPTION_CLASS};
use crate::pipeline::BlockFilter;
use crate::render::RenderContext;
use crate::sanitize::sanitize_caption;

/// Closing tag of the block's outer wrapper element.
const WRAPPER_CLOSE: &str = "</figure>";

/// The caption injection stage.
pub struct CaptionFilter;

impl CaptionFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CaptionFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockFilter for CaptionFilter {
    fn name(&self) -> &str {
        "featured-image-caption"
    }

    fn apply(&self, markup: String, block: &BlockInstance, ctx: &mut RenderContext) -> String {
        if !block.show_caption() {
            return markup;
        }

        let caption = ctx.media().featured_image_caption();
        if caption.trim().is_empty() {
            return markup;
        }

        // An empty caption element is never injected, so check again
        // after sanitization: adversarial input may reduce to nothing.
        let caption = sanitize_caption(&caption);
        if caption.trim().is_empty() {
            return markup;
        }

        // The wrapper's closing tag is the one the well-formed markup
        // ends with; splice the caption in as its last child.
        let Some(at) = markup.rfind(WRAPPER_CLOSE) else {
            return markup;
        };

        let mut out = String::with_capacity(markup.len() + caption.len() + 64);
        out.push_str(&markup[..at]);
        out.push_str("<figcaption class=\"");
        out.push_str(CAPTION_CLASS);
        out.push_str("\">");
        out.push_str(&caption);
        out.push_str("</figcaption>");
        out.push_str(&markup[at..]);

        tracing::debug!(filter = self.name(), "Injected featured image caption");
        ctx.request_style();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::TARGET_BLOCK;
    use crate::render::{MediaMetadata, RenderMode};
    use serde_json::json;

    struct FixedCaption(&'static str);

    impl MediaMetadata for FixedCaption {
        fn featured_image_caption(&self) -> String {
            self.0.to_string()
        }
    }

    const MARKUP: &str = "<figure class=\"wp-block-post-featured-image\"><img src=\"a.jpg\"/></figure>";

    fn run(markup: &str, record: serde_json::Value, caption: &'static str) -> (String, bool) {
        let media = FixedCaption(caption);
        let mut ctx = RenderContext::new(RenderMode::FrontEnd, &media);
        let block = BlockInstance::from_render_record(TARGET_BLOCK, &record);
        let out = CaptionFilter::new().apply(markup.to_string(), &block, &mut ctx);
        (out, ctx.style_needed())
    }

    #[test]
    fn test_flag_absent_short_circuits() {
        let (out, style) = run(MARKUP, json!({"attrs": {}}), "A caption");
        assert_eq!(out, MARKUP);
        assert!(!style);
    }

    #[test]
    fn test_flag_false_short_circuits() {
        let (out, style) = run(MARKUP, json!({"attrs": {"showCaption": false}}), "A caption");
        assert_eq!(out, MARKUP);
        assert!(!style);
    }

    #[test]
    fn test_empty_caption_injects_nothing() {
        for caption in ["", "   ", "\n\t"] {
            let media = FixedCaption(caption);
            let mut ctx = RenderContext::new(RenderMode::FrontEnd, &media);
            let block = BlockInstance::from_render_record(
                TARGET_BLOCK,
                &json!({"attrs": {"showCaption": true}}),
            );
            let out = CaptionFilter::new().apply(MARKUP.to_string(), &block, &mut ctx);
            assert_eq!(out, MARKUP);
            assert!(!ctx.style_needed());
        }
    }

    #[test]
    fn test_caption_sanitized_to_nothing_injects_nothing() {
        let (out, style) = run(
            MARKUP,
            json!({"attrs": {"showCaption": true}}),
            "<script>alert(1)</script>",
        );
        assert_eq!(out, MARKUP);
        assert!(!style);
    }

    #[test]
    fn test_injects_before_closing_wrapper() {
        let (out, style) = run(MARKUP, json!({"attrs": {"showCaption": true}}), "A sunset");
        assert_eq!(
            out,
            "<figure class=\"wp-block-post-featured-image\"><img src=\"a.jpg\"/>\
             <figcaption class=\"wp-element-caption\">A sunset</figcaption></figure>"
        );
        assert!(style);
        assert_eq!(out.matches("<figcaption").count(), 1);
    }

    #[test]
    fn test_adversarial_caption_sanitized() {
        let (out, _) = run(
            MARKUP,
            json!({"attrs": {"showCaption": true}}),
            "Hello <script>bad()</script> <strong>world</strong>",
        );
        assert_eq!(
            out,
            "<figure class=\"wp-block-post-featured-image\"><img src=\"a.jpg\"/>\
             <figcaption class=\"wp-element-caption\">Hello  <strong>world</strong>\
             </figcaption></figure>"
        );
    }

    #[test]
    fn test_missing_wrapper_returns_input() {
        let markup = "<div>not a figure</div>";
        let (out, style) = run(markup, json!({"attrs": {"showCaption": true}}), "A caption");
        assert_eq!(out, markup);
        assert!(!style);
    }

    #[test]
    fn test_splices_at_outermost_closing_tag() {
        let markup = "<figure><figure><img/></figure></figure>";
        let (out, _) = run(markup, json!({"attrs": {"showCaption": true}}), "c");
        assert_eq!(
            out,
            "<figure><figure><img/></figure>\
             <figcaption class=\"wp-element-caption\">c</figcaption></figure>"
        );
    }

    #[test]
    fn test_deterministic() {
        let record = json!({"attrs": {"showCaption": true}});
        let (a, _) = run(MARKUP, record.clone(), "Same in, same out");
        let (b, _) = run(MARKUP, record, "Same in, same out");
        assert_eq!(a, b);
    }
}
