/*
 * pipeline.rs
 * Copyright (c) 2026 Featured Image Caption contributors
 *
 * Render pipeline for block markup filters.
 */

//! Render pipeline for block markup filters.
//!
//! Instead of the host's string-keyed global hook registry, filters are
//! composed explicitly: a [`RenderPipeline`] holds named stages and
//! passes each block's markup through them in a fixed, documented
//! order.
//!
//! ## Failure policy
//!
//! A [`BlockFilter`] cannot fail a render: its signature takes a
//! markup string and returns a best-effort markup string. A filter with
//! nothing to do returns its input unchanged.
//!
//! # Example
//!
//! ```ignore
//! use caption_core::pipeline::{BlockFilter, RenderPipeline};
//!
//! struct MyFilter;
//!
//! impl BlockFilter for MyFilter {
//!     fn name(&self) -> &str { "my-filter" }
//!
//!     fn apply(&self, markup: String, block: &BlockInstance, ctx: &mut RenderContext) -> String {
//!         markup
//!     }
//! }
//!
//! let mut pipeline = RenderPipeline::new();
//! pipeline.push(Box::new(MyFilter));
//! ```

use serde_json::Value;

use crate::block::{BlockInstance, BlockKind, coerce_markup};
use crate::filter::CaptionFilter;
use crate::render::RenderContext;

/// A named stage transforming one block instance's rendered markup.
///
/// Filters must be `Send + Sync` so a pipeline can be shared across
/// request handlers.
pub trait BlockFilter: Send + Sync {
    /// Human-readable name, used for logging.
    fn name(&self) -> &str;

    /// Transform the markup for one block instance.
    ///
    /// Fail-soft by contract: always returns a usable string, falling
    /// back to the input when there is nothing to do.
    fn apply(&self, markup: String, block: &BlockInstance, ctx: &mut RenderContext) -> String;
}

/// An ordered pipeline of block filters.
///
/// Filters run in insertion order.
pub struct RenderPipeline {
    filters: Vec<Box<dyn BlockFilter>>,
}

impl RenderPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    ///
    /// Filters run in the order they are added.
    pub fn push(&mut self, filter: Box<dyn BlockFilter>) {
        self.filters.push(filter);
    }

    /// Add multiple filters to the pipeline.
    pub fn extend(&mut self, filters: impl IntoIterator<Item = Box<dyn BlockFilter>>) {
        self.filters.extend(filters);
    }

    /// Get the number of filters in the pipeline.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run all filters over the markup, in insertion order.
    pub fn run(
        &self,
        mut markup: String,
        block: &BlockInstance,
        ctx: &mut RenderContext,
    ) -> String {
        for filter in &self.filters {
            tracing::debug!(filter = filter.name(), "Running block filter");
            markup = filter.apply(markup, block, ctx);
        }
        markup
    }

    /// List the names of all filters in execution order.
    ///
    /// Useful for debugging and logging.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the standard caption pipeline.
///
/// Stage order:
/// 1. `CaptionFilter` - splice the featured image caption into the
///    block's markup
pub fn build_caption_pipeline() -> RenderPipeline {
    let mut pipeline = RenderPipeline::new();
    pipeline.push(Box::new(CaptionFilter::new()));
    pipeline
}

/// Hook-level entry for the host's per-block render filter.
///
/// Coerces the host's untyped markup value, classifies the block type
/// once, and runs the pipeline only for the featured image block; every
/// other block type passes through byte-identical.
pub fn render_block(
    name: &str,
    markup: &Value,
    record: &Value,
    pipeline: &RenderPipeline,
    ctx: &mut RenderContext,
) -> String {
    let markup = coerce_markup(markup);
    match BlockKind::from_name(name) {
        BlockKind::Other => markup,
        BlockKind::FeaturedImage => {
            let block = BlockInstance::from_render_record(name, record);
            pipeline.run(markup, &block, ctx)
        }
    }
}
