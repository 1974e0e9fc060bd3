//! Text storage and editing.
//!
//! This module is the editing engine: gap-buffer byte storage, a cursor, a
//! selection span, and undo history. Byte offsets are the canonical
//! coordinate throughout; line/column is a derived view computed on demand.
//!
//! Key types:
//!
//! - [`GapBuffer`]: document bytes with a movable gap for O(1) local edits
//! - [`Cursor`]: code-point-wise edit position tracking
//! - [`Selection`]: anchor/cursor span with word/line/all selection
//! - [`UndoStack`]/[`UndoEntry`]: bounded undo/redo with keystroke merging
//!
//! # Examples
//!
//! ## Editing through the gap
//!
//! ```
//! use editcore::GapBuffer;
//!
//! let mut buf = GapBuffer::with_text("hello world");
//! buf.insert_at(5, ",");
//! assert_eq!(buf.to_string(), "hello, world");
//! ```
//!
//! ## Undo with merge grouping
//!
//! ```
//! use editcore::{GapBuffer, UndoEntry, UndoStack};
//!
//! let mut buf = GapBuffer::new();
//! let mut history = UndoStack::new();
//!
//! // Type "hi": adjacent keystrokes merge into one undo step.
//! for (pos, ch) in ["h", "i"].iter().enumerate() {
//!     buf.insert_at(pos, ch);
//!     history.push(UndoEntry::insertion(pos, *ch, pos, pos + 1));
//! }
//! assert_eq!(history.undo_depth(), 1);
//!
//! // One undo reverses the whole burst.
//! let entry = history.undo().unwrap();
//! buf.replace(entry.position, entry.position + entry.inserted.len(), "");
//! assert_eq!(buf.to_string(), "");
//! ```

mod cursor;
mod gap;
mod history;
mod selection;

pub use cursor::Cursor;
pub use gap::GapBuffer;
pub use history::{UndoEntry, UndoStack};
pub use selection::Selection;
