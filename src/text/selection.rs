//! Selection: an anchor/cursor byte-offset span over a [`GapBuffer`].
//!
//! The span is directionless — either endpoint may be the larger one, and
//! [`normalize`](Selection::normalize) returns document order. The selection
//! holds no buffer reference; extraction and the word/line helpers borrow
//! the buffer per call.

use crate::text::GapBuffer;
use crate::unicode::is_continuation;

/// Character class used by word selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharClass {
    /// Letters, digits, underscore.
    Word,
    /// Space or tab.
    Space,
    /// Any other punctuation or symbol.
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_alphanumeric() || c == '_' {
            Self::Word
        } else if c == ' ' || c == '\t' {
            Self::Space
        } else {
            Self::Other
        }
    }
}

/// A selection span between an anchor and a live end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    active: bool,
    anchor: usize,
    cursor: usize,
}

impl Selection {
    /// Create an inactive selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the selection with both endpoints at `pos`.
    pub fn start(&mut self, pos: usize) {
        self.active = true;
        self.anchor = pos;
        self.cursor = pos;
    }

    /// Move the live end to `pos`. No-op while inactive.
    pub fn update(&mut self, pos: usize) {
        if self.active {
            self.cursor = pos;
        }
    }

    /// Deactivate the selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True while a span is being tracked (it may still be empty).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True when inactive or zero-length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.active || self.anchor == self.cursor
    }

    /// Anchor endpoint (where the drag started).
    #[must_use]
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Live endpoint (where the drag currently is).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Smaller endpoint.
    #[must_use]
    pub fn start_pos(&self) -> usize {
        self.anchor.min(self.cursor)
    }

    /// Larger endpoint.
    #[must_use]
    pub fn end_pos(&self) -> usize {
        self.anchor.max(self.cursor)
    }

    /// Span length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end_pos() - self.start_pos()
    }

    /// Endpoints in document order, regardless of drag direction.
    #[must_use]
    pub fn normalize(&self) -> (usize, usize) {
        (self.start_pos(), self.end_pos())
    }

    /// Selected text; empty when inactive or empty.
    #[must_use]
    pub fn text(&self, buf: &GapBuffer) -> String {
        if self.is_empty() {
            return String::new();
        }
        buf.substring(self.start_pos(), self.end_pos())
    }

    /// Span the whole document.
    pub fn select_all(&mut self, buf: &GapBuffer) {
        self.active = true;
        self.anchor = 0;
        self.cursor = buf.len();
    }

    /// Select the run of like-classed code points around `pos`.
    ///
    /// The code point at `pos` picks one of three classes (word characters,
    /// space/tab, other); the span extends in both directions while the
    /// class matches. A `pos` at the end of the buffer classifies the
    /// preceding code point.
    pub fn select_word(&mut self, buf: &GapBuffer, pos: usize) {
        if buf.is_empty() {
            self.start(0);
            return;
        }
        let mut p = pos.min(buf.len());
        if p == buf.len() {
            p = buf.prev_char_start(p).unwrap_or(0);
        }
        while p > 0 && buf.byte_at(p).is_some_and(is_continuation) {
            p -= 1;
        }
        let Some(anchor_char) = buf.char_at(p) else {
            self.start(p);
            return;
        };
        let class = CharClass::of(anchor_char);

        let mut start = p;
        while let Some(q) = buf.prev_char_start(start) {
            match buf.char_at(q) {
                Some(c) if CharClass::of(c) == class => start = q,
                _ => break,
            }
        }
        let mut end = p;
        while let Some(c) = buf.char_at(end) {
            if CharClass::of(c) == class {
                end += c.len_utf8();
            } else {
                break;
            }
        }

        self.active = true;
        self.anchor = start;
        self.cursor = end;
    }

    /// Select the line containing `pos`, including its trailing newline when
    /// one exists.
    pub fn select_line(&mut self, buf: &GapBuffer, pos: usize) {
        let (line, _) = buf.position_to_line_col(pos);
        let start = buf.line_start(line);
        let mut end = buf.line_end(line);
        if end < buf.len() {
            end += 1;
        }
        self.active = true;
        self.anchor = start;
        self.cursor = end;
    }
}
