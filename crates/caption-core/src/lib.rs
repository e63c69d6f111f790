//! Server-side caption rendering for the featured image block
//!
//! This crate contains the render-time half of the featured image
//! caption plugin: schema extension, the caption injection filter, and
//! on-demand stylesheet provisioning.
//!
//! # Architecture
//!
//! Rendering is organized around these key types:
//!
//! - [`RenderContext`] - Per-render mutable state threaded through the
//!   filter pipeline, including the one style-dedup flag
//! - [`RenderPipeline`] - Explicitly composed, named filter stages run
//!   in a fixed order
//! - [`BlockInstance`] / [`BlockKind`] - Typed block identity resolved
//!   once at the host boundary
//! - [`StyleResource`] - The named, versioned caption stylesheet
//!
//! # Example
//!
//! ```ignore
//! use caption_core::{
//!     build_caption_pipeline, render_block, provision_styles,
//!     CaptionConfig, RenderContext, RenderMode, StyleResource,
//! };
//!
//! let config = CaptionConfig::default();
//! let pipeline = build_caption_pipeline();
//! let mut ctx = RenderContext::new(RenderMode::FrontEnd, &media);
//!
//! // One call per block instance, in document order
//! let html = render_block(name, &markup, &record, &pipeline, &mut ctx);
//!
//! // After the page's blocks are done
//! let resource = StyleResource::caption(&config);
//! provision_styles(&resource, &config, &mut ctx, &mut sink);
//! ```

pub mod block;
pub mod config;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod render;
pub mod sanitize;
pub mod schema;
pub mod style;

// Re-export commonly used types
pub use block::{
    BLOCK_CLASS, BlockInstance, BlockKind, BlockMetadata, CAPTION_CLASS, SHOW_CAPTION_ATTR,
    TARGET_BLOCK, coerce_markup, show_caption_in,
};
pub use config::CaptionConfig;
pub use error::{CaptionError, Result};
pub use filter::CaptionFilter;
pub use pipeline::{BlockFilter, RenderPipeline, build_caption_pipeline, render_block};
pub use render::{MediaMetadata, RenderContext, RenderMode, StyleSink};
pub use sanitize::sanitize_caption;
pub use schema::extend_block_schema;
pub use style::{
    CAPTION_CSS, STYLE_VERSION, StyleRegistry, StyleResource, minify_css, provision_styles,
};
