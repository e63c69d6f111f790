//! Editor-side caption toggle for the featured image block
//!
//! The editor half of the caption plugin: a higher-order wrapper over a
//! block's edit-mode renderer that adds the caption toggle button and a
//! WYSIWYG placeholder to the featured image block, and delegates
//! unchanged for every other block type.
//!
//! Nothing here is persisted or sent to the front end; the wrapper only
//! wires UI state to the `showCaption` attribute. The server-side
//! render filter in `caption-core` does the real caption work.

pub mod control;
pub mod inject;

pub use control::{ToolbarButton, caption_toggle_button, toggle_show_caption};
pub use inject::{BlockEdit, EditorView, WithCaptionControl};
