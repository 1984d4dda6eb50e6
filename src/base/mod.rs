//! Foundation types for the playground core.
//!
//! This module provides the coordinate system shared by tokens,
//! diagnostics and marks:
//! - [`Position`], [`Range`] - zero-based line/column coordinates (UTF-16 columns)
//! - [`LineIndex`] - byte offset to line/column conversion
//! - [`EditorId`] - identity of one editable surface
//!
//! This module has NO dependencies on other playground modules.

mod editor_id;
mod line_index;
mod position;

pub use editor_id::EditorId;
pub use line_index::LineIndex;
pub use position::{Position, Range};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
