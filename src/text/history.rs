//! Undo history: diff records with keystroke merging.
//!
//! Every edit is described by an [`UndoEntry`] — the byte position, the text
//! deleted and/or inserted there, and the cursor offsets on either side of
//! the change. The editor constructs entries, applies the buffer mutation,
//! and pushes them here; undo/redo hand entries back for the editor to
//! replay inverted or forward.
//!
//! Consecutive fine-grained edits merge into one entry when they are
//! adjacent and land within the grouping interval, so a single undo reverses
//! one logical burst of typing. Whitespace always starts a new entry,
//! approximating word-boundary grouping.

use std::time::{Duration, Instant};

use crate::event::{LogLevel, emit_log};

/// Default maximum number of undo entries to retain.
const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Default window within which adjacent edits merge.
const DEFAULT_GROUPING_INTERVAL: Duration = Duration::from_millis(500);

/// A recorded edit: pure insertion, pure deletion, or replacement.
#[derive(Clone, Debug)]
pub struct UndoEntry {
    /// Byte offset where the change occurred.
    pub position: usize,
    /// Text removed at `position` (empty for pure insertions).
    pub deleted: String,
    /// Text added at `position` (empty for pure deletions).
    pub inserted: String,
    /// Cursor byte offset before the edit.
    pub cursor_before: usize,
    /// Cursor byte offset after the edit.
    pub cursor_after: usize,
    /// Stamped by [`UndoStack::push`]; merge eligibility reads this.
    timestamp: Instant,
}

impl UndoEntry {
    /// Record an insertion of `text` at `position`.
    #[must_use]
    pub fn insertion(
        position: usize,
        text: impl Into<String>,
        cursor_before: usize,
        cursor_after: usize,
    ) -> Self {
        Self {
            position,
            deleted: String::new(),
            inserted: text.into(),
            cursor_before,
            cursor_after,
            timestamp: Instant::now(),
        }
    }

    /// Record a deletion of `text` at `position`.
    #[must_use]
    pub fn deletion(
        position: usize,
        text: impl Into<String>,
        cursor_before: usize,
        cursor_after: usize,
    ) -> Self {
        Self {
            position,
            deleted: text.into(),
            inserted: String::new(),
            cursor_before,
            cursor_after,
            timestamp: Instant::now(),
        }
    }

    /// Record a replacement of `deleted` by `inserted` at `position`.
    #[must_use]
    pub fn replacement(
        position: usize,
        deleted: impl Into<String>,
        inserted: impl Into<String>,
        cursor_before: usize,
        cursor_after: usize,
    ) -> Self {
        Self {
            position,
            deleted: deleted.into(),
            inserted: inserted.into(),
            cursor_before,
            cursor_after,
            timestamp: Instant::now(),
        }
    }

    /// Pure insertion: added text only.
    #[must_use]
    pub fn is_insertion(&self) -> bool {
        !self.inserted.is_empty() && self.deleted.is_empty()
    }

    /// Pure deletion: removed text only.
    #[must_use]
    pub fn is_deletion(&self) -> bool {
        !self.deleted.is_empty() && self.inserted.is_empty()
    }

    /// Replacement: both sides non-empty. Replacements never merge.
    #[must_use]
    pub fn is_replacement(&self) -> bool {
        !self.deleted.is_empty() && !self.inserted.is_empty()
    }

    fn is_noop(&self) -> bool {
        self.deleted.is_empty() && self.inserted.is_empty()
    }
}

/// Bounded undo/redo stacks with merge grouping.
#[derive(Clone, Debug)]
pub struct UndoStack {
    undo: Vec<UndoEntry>,
    redo: Vec<UndoEntry>,
    /// Maximum retained undo entries; oldest are evicted past this.
    max_entries: usize,
    /// Window within which adjacent edits merge into the top entry.
    grouping_interval: Duration,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            max_entries: DEFAULT_MAX_ENTRIES,
            grouping_interval: DEFAULT_GROUPING_INTERVAL,
        }
    }
}

impl UndoStack {
    /// Create an empty stack with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack with a custom maximum entry count.
    #[must_use]
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            max_entries,
            ..Self::default()
        }
    }

    /// Set the maximum retained entry count. Excess entries are pruned on
    /// the next push.
    pub fn set_max_entries(&mut self, max_entries: usize) {
        self.max_entries = max_entries;
    }

    /// Current maximum retained entry count.
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Set the merge grouping window. `Duration::ZERO` effectively disables
    /// merging.
    pub fn set_grouping_interval(&mut self, interval: Duration) {
        self.grouping_interval = interval;
    }

    /// Current merge grouping window.
    #[must_use]
    pub fn grouping_interval(&self) -> Duration {
        self.grouping_interval
    }

    /// Record an edit.
    ///
    /// Stamps the entry's timestamp, merges it into the top entry when
    /// eligible, evicts the oldest entry past the size limit, and clears
    /// the redo stack. Entries describing no change are ignored.
    pub fn push(&mut self, mut entry: UndoEntry) {
        if entry.is_noop() {
            return;
        }
        let now = Instant::now();
        entry.timestamp = now;

        if self.should_merge(&entry, now) {
            if let Some(top) = self.undo.last_mut() {
                merge_entries(top, &entry);
            }
        } else {
            self.undo.push(entry);
            if self.undo.len() > self.max_entries {
                let excess = self.undo.len() - self.max_entries;
                self.undo.drain(..excess);
                emit_log(
                    LogLevel::Debug,
                    &format!("undo history evicted {excess} oldest entries"),
                );
            }
        }
        self.redo.clear();
    }

    /// Whether `entry` should merge into the current top of the undo stack.
    ///
    /// Requires the top entry to be recent (within the grouping interval)
    /// and the edits to be same-kind and adjacent:
    /// - insertions: `entry` appends directly after `top` and adds exactly
    ///   one non-whitespace code point;
    /// - deletions: `entry` removes the bytes just before `top` (backspace)
    ///   or at `top`'s own position (forward delete).
    fn should_merge(&self, entry: &UndoEntry, now: Instant) -> bool {
        let Some(top) = self.undo.last() else {
            return false;
        };
        if now.duration_since(top.timestamp) > self.grouping_interval {
            return false;
        }

        if top.is_insertion() && entry.is_insertion() {
            let mut chars = entry.inserted.chars();
            let Some(ch) = chars.next() else {
                return false;
            };
            chars.next().is_none()
                && !matches!(ch, ' ' | '\t' | '\n')
                && entry.position == top.position + top.inserted.len()
        } else if top.is_deletion() && entry.is_deletion() {
            entry.position + entry.deleted.len() == top.position
                || entry.position == top.position
        } else {
            false
        }
    }

    /// Undo: move the top undo entry onto the redo stack and return it.
    ///
    /// The caller replays the inverse: delete `inserted` at `position`,
    /// insert `deleted` at `position`, move the cursor to `cursor_before`.
    pub fn undo(&mut self) -> Option<UndoEntry> {
        let entry = self.undo.pop()?;
        self.redo.push(entry.clone());
        Some(entry)
    }

    /// Redo: move the top redo entry back onto the undo stack and return it.
    ///
    /// The caller replays forward: delete `deleted` at `position`, insert
    /// `inserted` at `position`, move the cursor to `cursor_after`.
    pub fn redo(&mut self) -> Option<UndoEntry> {
        let entry = self.redo.pop()?;
        self.undo.push(entry.clone());
        Some(entry)
    }

    /// True when an undo entry is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// True when a redo entry is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of entries on the undo stack.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of entries on the redo stack.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drop all history (used when the document is replaced).
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

/// Fold `entry` into `top`, refreshing the cursor-after offset and the
/// timestamp so a steady stream of keystrokes keeps merging.
fn merge_entries(top: &mut UndoEntry, entry: &UndoEntry) {
    if entry.is_insertion() {
        top.inserted.push_str(&entry.inserted);
    } else if entry.position == top.position {
        // Forward delete: removed bytes follow the ones already recorded.
        top.deleted.push_str(&entry.deleted);
    } else {
        // Backspace: removed bytes precede the ones already recorded.
        top.deleted.insert_str(0, &entry.deleted);
        top.position = entry.position;
    }
    top.cursor_after = entry.cursor_after;
    top.timestamp = entry.timestamp;
}
