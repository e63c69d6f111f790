/*
 * render.rs
 * Copyright (c) 2026 Featured Image Caption contributors
 *
 * Per-render context and host boundary traits.
 */

//! Per-render context and host boundary traits.
//!
//! A [`RenderContext`] is created at the start of one page render and
//! dropped at its end. Rendering is single-threaded and request-scoped:
//! one synchronous pass over the page's block instances, in document
//! order. The context carries the only mutable cell in the system, the
//! style-needed flag, as an explicit field rather than a process-wide
//! global, so its lifetime is exactly the render's.

/// Which surface a render runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Front-end page render.
    FrontEnd,
    /// Editor preview composition, where on-demand style attachment is
    /// not possible.
    Editor,
}

/// Media metadata service boundary.
///
/// Resolves the caption text for the current post's featured image.
/// This is a synchronous local lookup that does not fail; a missing
/// image or caption resolves to the empty string.
pub trait MediaMetadata {
    fn featured_image_caption(&self) -> String;
}

/// Host style pipeline boundary: attach an inline style fragment to the
/// current page under a named handle.
pub trait StyleSink {
    fn add_inline_style(&mut self, handle: &str, css: &str);
}

/// Mutable state for one page render.
pub struct RenderContext<'a> {
    mode: RenderMode,
    media: &'a dyn MediaMetadata,
    style_needed: bool,
    style_attached: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(mode: RenderMode, media: &'a dyn MediaMetadata) -> Self {
        Self {
            mode,
            media,
            style_needed: false,
            style_attached: false,
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn media(&self) -> &'a dyn MediaMetadata {
        self.media
    }

    /// Signal that the caption stylesheet is needed on this page.
    ///
    /// Monotonic: the flag moves false to true and is never reset
    /// within a render cycle, no matter how many block instances
    /// request it.
    pub fn request_style(&mut self) {
        self.style_needed = true;
    }

    pub fn style_needed(&self) -> bool {
        self.style_needed
    }

    /// Claim the one style attachment this render is allowed.
    ///
    /// Returns `true` exactly once per context.
    pub(crate) fn claim_style_attachment(&mut self) -> bool {
        if self.style_attached {
            return false;
        }
        self.style_attached = true;
        true
    }
}
