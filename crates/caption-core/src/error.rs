/*
 * error.rs
 * Copyright (c) 2026 Featured Image Caption contributors
 *
 * Error types for caption-core.
 */

//! Error types for caption-core.
//!
//! The render filter itself never fails: it degrades to returning its
//! input (see [`crate::pipeline::BlockFilter`]). These errors cover the
//! operations that genuinely can fail: parsing configuration and
//! registering style resources.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptionError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A style handle was re-registered with different content.
    #[error("style handle '{handle}' is already registered with different content")]
    StyleConflict { handle: String },
}

pub type Result<T> = std::result::Result<T, CaptionError>;
