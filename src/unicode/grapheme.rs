//! Grapheme cluster iteration and backward boundary lookup.

use unicode_segmentation::UnicodeSegmentation;

/// Iterate over grapheme clusters in a string.
pub fn graphemes(s: &str) -> impl Iterator<Item = &str> {
    s.graphemes(true)
}

/// Iterate over grapheme clusters with byte indices.
pub fn grapheme_indices(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.grapheme_indices(true)
}

/// Byte length of the last grapheme cluster in `s`, or 0 for an empty string.
#[must_use]
pub fn last_grapheme_len(s: &str) -> usize {
    s.graphemes(true).next_back().map_or(0, str::len)
}

/// Byte offset where the grapheme cluster preceding `idx` starts.
///
/// Returns `None` when `idx` is 0 or no cluster starts before it.
#[must_use]
pub fn prev_grapheme_start(s: &str, idx: usize) -> Option<usize> {
    s.grapheme_indices(true)
        .take_while(|(i, _)| *i < idx)
        .last()
        .map(|(i, _)| i)
}
