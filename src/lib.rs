//! editcore - in-memory text editing engine
//!
//! The data layer beneath an interactive terminal text editor: gap-buffer
//! byte storage, cursor tracking, a selection span model, and an undo/redo
//! stack with keystroke merging. The crate performs no rendering and no I/O;
//! the embedding editor drives it through byte offsets and reads lines back
//! out for display.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(dead_code)] // Public API functions not yet used internally
#![allow(clippy::module_name_repetitions)] // Allow GapBuffer, UndoStack etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::should_implement_trait)] // from_str-style naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod error;
pub mod event;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use text::{Cursor, GapBuffer, Selection, UndoEntry, UndoStack};
