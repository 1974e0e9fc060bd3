//! Cursor: a byte-offset edit position over a [`GapBuffer`].
//!
//! The cursor holds only a logical byte offset and borrows the buffer per
//! call, so replacing the buffer wholesale simply means constructing a fresh
//! cursor. Every movement steps whole code points, keeping the offset on a
//! UTF-8 boundary; line navigation reapplies the byte column clamped (and
//! boundary-snapped) to the target line.
//!
//! Buffer mutation is position-explicit ([`GapBuffer::insert_at`],
//! [`GapBuffer::replace`]), so there is no gap state for the cursor to
//! resynchronize before an edit.

use crate::text::GapBuffer;

/// Is `c` part of a word (letters, digits, or underscore)?
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A logical edit position in a buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    offset: usize,
}

impl Cursor {
    /// Create a cursor at the start of the document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw byte offset.
    #[must_use]
    pub fn byte_offset(&self) -> usize {
        self.offset
    }

    /// Set the byte offset, clamped to `[0, buf.len()]` and snapped back to
    /// a code-point boundary.
    pub fn set_byte_offset(&mut self, buf: &GapBuffer, offset: usize) {
        let mut off = offset.min(buf.len());
        while off > 0 && buf.char_at(off).is_none() && off < buf.len() {
            off -= 1;
        }
        self.offset = off;
    }

    /// Derived `(line, col)` position, 0-indexed, column in bytes.
    #[must_use]
    pub fn position(&self, buf: &GapBuffer) -> (usize, usize) {
        buf.position_to_line_col(self.offset)
    }

    /// Line containing the cursor.
    #[must_use]
    pub fn line(&self, buf: &GapBuffer) -> usize {
        self.position(buf).0
    }

    /// Byte column within the cursor's line.
    #[must_use]
    pub fn col(&self, buf: &GapBuffer) -> usize {
        self.position(buf).1
    }

    /// Place the cursor at `(line, col)`, clamped to the buffer.
    pub fn set_position(&mut self, buf: &GapBuffer, line: usize, col: usize) {
        self.offset = buf.line_col_to_position(line, col);
    }

    /// Step one code point left. Returns `false` at the start of the buffer.
    pub fn move_left(&mut self, buf: &GapBuffer) -> bool {
        match buf.prev_char_start(self.offset) {
            Some(p) => {
                self.offset = p;
                true
            }
            None => false,
        }
    }

    /// Step one code point right. Returns `false` at the end of the buffer.
    pub fn move_right(&mut self, buf: &GapBuffer) -> bool {
        match buf.next_char_start(self.offset) {
            Some(p) => {
                self.offset = p;
                true
            }
            None => false,
        }
    }

    /// Move to the previous line, reapplying the current column (clamped to
    /// the target line's length). Returns `false` on the first line.
    pub fn move_up(&mut self, buf: &GapBuffer) -> bool {
        let (line, col) = self.position(buf);
        if line == 0 {
            return false;
        }
        self.offset = buf.line_col_to_position(line - 1, col);
        true
    }

    /// Move to the next line, reapplying the current column (clamped to the
    /// target line's length). Returns `false` on the last line.
    pub fn move_down(&mut self, buf: &GapBuffer) -> bool {
        let (line, col) = self.position(buf);
        if line + 1 >= buf.line_count() {
            return false;
        }
        self.offset = buf.line_col_to_position(line + 1, col);
        true
    }

    /// Move to the start of the current line.
    pub fn move_to_line_start(&mut self, buf: &GapBuffer) {
        self.offset = buf.line_start(self.line(buf));
    }

    /// Move to the end of the current line (before its newline).
    pub fn move_to_line_end(&mut self, buf: &GapBuffer) {
        self.offset = buf.line_end(self.line(buf));
    }

    /// Move to the start of the buffer.
    pub fn move_to_start(&mut self) {
        self.offset = 0;
    }

    /// Move to the end of the buffer.
    pub fn move_to_end(&mut self, buf: &GapBuffer) {
        self.offset = buf.len();
    }

    /// Move right to the start of the next word (or the end of the buffer).
    ///
    /// Skips the remainder of the current word, then any non-word
    /// characters. Returns `false` if the cursor did not move.
    pub fn move_word_right(&mut self, buf: &GapBuffer) -> bool {
        let start = self.offset;
        while let Some(c) = buf.char_at(self.offset) {
            if is_word_char(c) {
                self.offset += c.len_utf8();
            } else {
                break;
            }
        }
        while let Some(c) = buf.char_at(self.offset) {
            if is_word_char(c) {
                break;
            }
            self.offset += c.len_utf8();
        }
        self.offset != start
    }

    /// Move left to the start of the previous word. Mirror of
    /// [`move_word_right`](Self::move_word_right).
    pub fn move_word_left(&mut self, buf: &GapBuffer) -> bool {
        let start = self.offset;
        while let Some(p) = buf.prev_char_start(self.offset) {
            match buf.char_at(p) {
                Some(c) if !is_word_char(c) => self.offset = p,
                _ => break,
            }
        }
        while let Some(p) = buf.prev_char_start(self.offset) {
            match buf.char_at(p) {
                Some(c) if is_word_char(c) => self.offset = p,
                _ => break,
            }
        }
        self.offset != start
    }
}
