//! Unicode utilities backing code-point and grapheme aware editing.

mod boundary;
mod grapheme;

pub use boundary::{is_continuation, utf8_len};
pub use grapheme::{grapheme_indices, graphemes, last_grapheme_len, prev_grapheme_start};
