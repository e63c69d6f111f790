/*
 * inject.rs
 * Copyright (c) 2026 Featured Image Caption contributors
 *
 * Higher-order wrapper over a block's edit-mode renderer.
 */

//! Higher-order wrapper over a block's edit-mode renderer.
//!
//! For the featured image block the wrapper renders the original edit
//! UI unchanged as a base layer, adds the caption toggle to the
//! toolbar, and while the flag is on shows an inline placeholder
//! caption beneath the image so authors get WYSIWYG feedback. The
//! placeholder is editor-only; the front end resolves the real caption
//! from the media library at render time.
//!
//! Every other block type delegates to the original renderer with no
//! observable difference.

use caption_core::{BLOCK_CLASS, BlockInstance, BlockKind, CAPTION_CLASS, CaptionConfig};

use crate::control::{ToolbarButton, caption_toggle_button};

/// Edit-mode renderer for a block type (host editor boundary).
pub trait BlockEdit {
    fn render_edit(&self, block: &BlockInstance) -> String;
}

/// Rendered edit-mode view of a block: toolbar controls plus canvas
/// markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub toolbar: Vec<ToolbarButton>,
    pub markup: String,
}

/// Wraps an existing edit-mode renderer with the caption control.
pub struct WithCaptionControl<E> {
    inner: E,
    config: CaptionConfig,
}

impl<E: BlockEdit> WithCaptionControl<E> {
    pub fn new(inner: E, config: CaptionConfig) -> Self {
        Self { inner, config }
    }

    pub fn render(&self, block: &BlockInstance) -> EditorView {
        let base = self.inner.render_edit(block);
        match block.kind() {
            BlockKind::Other => EditorView {
                toolbar: Vec::new(),
                markup: base,
            },
            BlockKind::FeaturedImage => {
                let show_caption = block.show_caption();
                let mut markup = String::with_capacity(base.len() + 128);
                markup.push_str("<figure class=\"");
                markup.push_str(BLOCK_CLASS);
                markup.push_str("\">");
                markup.push_str(&base);
                if show_caption {
                    markup.push_str("<figcaption class=\"");
                    markup.push_str(CAPTION_CLASS);
                    markup.push_str("\">");
                    markup.push_str(&self.config.editor_placeholder);
                    markup.push_str("</figcaption>");
                }
                markup.push_str("</figure>");
                EditorView {
                    toolbar: vec![caption_toggle_button(show_caption)],
                    markup,
                }
            }
        }
    }
}
