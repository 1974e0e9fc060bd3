//! Gap buffer: byte storage for efficient local editing.
//!
//! The document lives in a contiguous `Vec<u8>` with a movable free region
//! (the gap) kept at the current edit point:
//!
//! ```text
//!  [ text before gap | gap (unused) | text after gap ]
//!    0..gap_start      gap_start..gap_end   gap_end..data.len()
//! ```
//!
//! The logical text is the concatenation of the two outer regions, and is
//! always valid UTF-8. Edits at the gap are O(1) amortized; relocating the
//! gap costs O(distance moved), which amortizes well because edits cluster.
//!
//! All positions are **byte offsets** into the logical text. Offsets handed
//! to byte-level operations must fall on code-point boundaries; the cursor
//! and selection APIs guarantee that by stepping whole code points.

use std::fmt;

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::unicode::{is_continuation, last_grapheme_len, utf8_len};

/// Minimum gap capacity, also the initial gap size for new buffers.
const MIN_GAP_SIZE: usize = 1024;

/// A gap buffer holding UTF-8 encoded text.
#[derive(Clone)]
pub struct GapBuffer {
    /// Backing store: pre-gap text, gap, post-gap text.
    data: Vec<u8>,
    /// First unused byte of the gap.
    gap_start: usize,
    /// One past the last unused byte of the gap.
    gap_end: usize,
}

impl GapBuffer {
    /// Create an empty buffer with the default gap capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: vec![0; MIN_GAP_SIZE],
            gap_start: 0,
            gap_end: MIN_GAP_SIZE,
        }
    }

    /// Create a buffer pre-loaded with `text`, gap at the end.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let len = text.len();
        let mut data = Vec::with_capacity(len + MIN_GAP_SIZE);
        data.extend_from_slice(text.as_bytes());
        data.resize(len + MIN_GAP_SIZE, 0);
        Self {
            data,
            gap_start: len,
            gap_end: len + MIN_GAP_SIZE,
        }
    }

    // ==================== Queries ====================

    /// Logical length in bytes (excluding the gap).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    /// True if the buffer holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current gap position in logical coordinates.
    #[must_use]
    pub fn gap_position(&self) -> usize {
        self.gap_start
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    fn region_before(&self) -> &[u8] {
        &self.data[..self.gap_start]
    }

    fn region_after(&self) -> &[u8] {
        &self.data[self.gap_end..]
    }

    /// Iterate the logical bytes in order, skipping the gap.
    fn logical_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.region_before()
            .iter()
            .chain(self.region_after().iter())
            .copied()
    }

    /// Byte at logical position `pos`, or `None` out of range.
    #[must_use]
    pub fn byte_at(&self, pos: usize) -> Option<u8> {
        if pos >= self.len() {
            return None;
        }
        let physical = if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        };
        Some(self.data[physical])
    }

    /// Decode the code point starting at logical position `pos`.
    ///
    /// Returns `None` out of range or when `pos` does not start a code point.
    #[must_use]
    pub fn char_at(&self, pos: usize) -> Option<char> {
        let first = self.byte_at(pos)?;
        if is_continuation(first) {
            return None;
        }
        let n = utf8_len(first);
        let mut bytes = [0u8; 4];
        for (i, slot) in bytes.iter_mut().enumerate().take(n) {
            *slot = self.byte_at(pos + i)?;
        }
        std::str::from_utf8(&bytes[..n]).ok()?.chars().next()
    }

    /// Start of the code point preceding `pos`, scanning backward over
    /// continuation bytes. `None` at the start of the buffer.
    #[must_use]
    pub fn prev_char_start(&self, pos: usize) -> Option<usize> {
        let pos = pos.min(self.len());
        if pos == 0 {
            return None;
        }
        let mut p = pos - 1;
        while p > 0 && self.byte_at(p).is_some_and(is_continuation) {
            p -= 1;
        }
        Some(p)
    }

    /// Start of the code point following the one at `pos`. `None` at the end
    /// of the buffer.
    #[must_use]
    pub fn next_char_start(&self, pos: usize) -> Option<usize> {
        let first = self.byte_at(pos)?;
        Some((pos + utf8_len(first)).min(self.len()))
    }

    // ==================== Gap management ====================

    /// Relocate the gap so the next edit at `pos` is O(1).
    ///
    /// `pos` is clamped to `[0, len()]`. Cost is proportional to the
    /// distance between the current gap position and `pos`.
    pub fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());
        if pos < self.gap_start {
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            let shift = pos - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Grow the gap in place to at least `min_size` bytes.
    ///
    /// The gap position is preserved: `insert` relies on the gap staying
    /// where `move_gap_to` left it.
    fn ensure_gap(&mut self, min_size: usize) {
        if self.gap_len() >= min_size {
            return;
        }
        let needed = min_size - self.gap_len();
        let growth = (needed * 2).max(MIN_GAP_SIZE);

        let old_len = self.data.len();
        let post_len = old_len - self.gap_end;
        let new_size = old_len + growth;
        self.data.resize(new_size, 0);
        if post_len > 0 {
            self.data.copy_within(self.gap_end..old_len, new_size - post_len);
        }
        self.gap_end = new_size - post_len;
        emit_log(
            LogLevel::Debug,
            &format!("gap buffer grown to {new_size} bytes"),
        );
    }

    // ==================== Mutation ====================

    /// Insert `text` at the current gap position.
    pub fn insert(&mut self, text: &str) {
        self.ensure_gap(text.len());
        self.data[self.gap_start..self.gap_start + text.len()]
            .copy_from_slice(text.as_bytes());
        self.gap_start += text.len();
    }

    /// Insert a single code point at the current gap position.
    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert(ch.encode_utf8(&mut buf));
    }

    /// Insert `text` at logical position `pos` (clamped).
    pub fn insert_at(&mut self, pos: usize, text: &str) {
        self.move_gap_to(pos);
        self.insert(text);
    }

    /// Delete up to `n` bytes before the gap, returning the removed text.
    pub fn delete_before(&mut self, n: usize) -> String {
        let n = n.min(self.gap_start);
        if n == 0 {
            return String::new();
        }
        self.gap_start -= n;
        bytes_to_string(&self.data[self.gap_start..self.gap_start + n])
    }

    /// Delete up to `n` bytes after the gap, returning the removed text.
    pub fn delete_after(&mut self, n: usize) -> String {
        let n = n.min(self.data.len() - self.gap_end);
        if n == 0 {
            return String::new();
        }
        let removed = bytes_to_string(&self.data[self.gap_end..self.gap_end + n]);
        self.gap_end += n;
        removed
    }

    /// Delete the whole code point before the gap (backspace).
    pub fn delete_char_before(&mut self) -> Option<char> {
        let start = self.prev_char_start(self.gap_start)?;
        let removed = self.delete_before(self.gap_start - start);
        removed.chars().next()
    }

    /// Delete the whole code point after the gap (forward delete).
    pub fn delete_char_after(&mut self) -> Option<char> {
        let first = self.byte_at(self.gap_start)?;
        let n = utf8_len(first).min(self.len() - self.gap_start);
        let removed = self.delete_after(n);
        removed.chars().next()
    }

    /// Delete the whole grapheme cluster before the gap, returning it.
    ///
    /// ZWJ emoji sequences and combining marks delete as one unit. Returns
    /// an empty string at the start of the buffer.
    pub fn delete_grapheme_before(&mut self) -> String {
        let pos = self.gap_start;
        if pos == 0 {
            return String::new();
        }
        let (_, col) = self.position_to_line_col(pos);
        if col == 0 {
            // A cluster never spans the newline; take the code point path.
            return self.delete_char_before().map(String::from).unwrap_or_default();
        }
        let head = self.substring(pos - col, pos);
        let n = last_grapheme_len(&head).max(1);
        self.delete_before(n)
    }

    /// Replace `[start, end)` with `text`, returning the deleted bytes.
    ///
    /// Composite of gap relocation, backward deletion, and insertion, so it
    /// shares the gap cost model. The range is clamped and normalized.
    pub fn replace(&mut self, start: usize, end: usize, text: &str) -> String {
        let s = start.min(self.len());
        let e = end.min(self.len());
        let (start, end) = if s <= e { (s, e) } else { (e, s) };
        self.move_gap_to(end);
        let deleted = self.delete_before(end - start);
        self.insert(text);
        deleted
    }

    // ==================== Content extraction ====================

    /// Content of the logical range `[start, end)`.
    ///
    /// Out-of-range offsets are clamped and an inverted range is swapped.
    #[must_use]
    pub fn substring(&self, start: usize, end: usize) -> String {
        let s = start.min(self.len());
        let e = end.min(self.len());
        let (start, end) = if s <= e { (s, e) } else { (e, s) };
        if start == end {
            return String::new();
        }

        let mut out = Vec::with_capacity(end - start);
        if start < self.gap_start {
            let hi = end.min(self.gap_start);
            out.extend_from_slice(&self.data[start..hi]);
        }
        if end > self.gap_start {
            let lo = start.max(self.gap_start);
            out.extend_from_slice(
                &self.data[self.gap_end + (lo - self.gap_start)..self.gap_end + (end - self.gap_start)],
            );
        }
        bytes_to_string(&out)
    }

    /// Strict variant of [`substring`](Self::substring): rejects inverted or
    /// out-of-range input instead of normalizing it.
    pub fn try_substring(&self, start: usize, end: usize) -> Result<String> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        if end > self.len() {
            return Err(Error::OutOfBounds { pos: end, len: self.len() });
        }
        Ok(self.substring(start, end))
    }

    // ==================== Line addressing ====================
    //
    // Lines are delimited by b'\n'. All of these are linear scans over the
    // two physical regions; the buffer keeps no line index.

    /// Number of lines; at least 1, even for an empty buffer.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.logical_bytes().filter(|&b| b == b'\n').count() + 1
    }

    /// Byte offset where `line` starts. `line` is clamped to the last line.
    #[must_use]
    pub fn line_start(&self, line: usize) -> usize {
        let line = line.min(self.line_count().saturating_sub(1));
        if line == 0 {
            return 0;
        }
        let mut seen = 0;
        for (i, b) in self.logical_bytes().enumerate() {
            if b == b'\n' {
                seen += 1;
                if seen == line {
                    return i + 1;
                }
            }
        }
        self.len()
    }

    /// Byte offset where `line` ends (at its newline, or end of buffer).
    #[must_use]
    pub fn line_end(&self, line: usize) -> usize {
        let start = self.line_start(line);
        for (i, b) in self.logical_bytes().enumerate().skip(start) {
            if b == b'\n' {
                return i;
            }
        }
        self.len()
    }

    /// Content of `line`, without its trailing newline.
    #[must_use]
    pub fn line(&self, line: usize) -> String {
        self.substring(self.line_start(line), self.line_end(line))
    }

    /// All lines, split on newline. A trailing newline yields a final empty
    /// line, matching [`line_count`](Self::line_count).
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.to_string().split('\n').map(String::from).collect()
    }

    /// Convert a byte offset (clamped to `len()`) to 0-indexed `(line, col)`.
    /// The column is a byte offset within the line.
    #[must_use]
    pub fn position_to_line_col(&self, pos: usize) -> (usize, usize) {
        let pos = pos.min(self.len());
        let mut line = 0;
        let mut line_start = 0;
        for (i, b) in self.logical_bytes().enumerate().take(pos) {
            if b == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }
        (line, pos - line_start)
    }

    /// Convert `(line, col)` to a byte offset.
    ///
    /// `line` clamps to the last line and `col` to the line length; a column
    /// landing inside a multi-byte code point snaps back to its start.
    #[must_use]
    pub fn line_col_to_position(&self, line: usize, col: usize) -> usize {
        let start = self.line_start(line);
        let end = self.line_end(line);
        let mut pos = start + col.min(end - start);
        while pos > start && self.byte_at(pos).is_some_and(is_continuation) {
            pos -= 1;
        }
        pos
    }
}

fn bytes_to_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.region_before()))?;
        f.write_str(&String::from_utf8_lossy(self.region_after()))
    }
}

impl fmt::Debug for GapBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GapBuffer")
            .field("len", &self.len())
            .field("gap_start", &self.gap_start)
            .field("gap_len", &self.gap_len())
            .finish()
    }
}
