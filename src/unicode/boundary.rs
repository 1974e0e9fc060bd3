//! UTF-8 code point boundary scanning.
//!
//! The gap buffer addresses text by byte offset, so stepping a whole code
//! point means scanning over continuation bytes. These helpers are the only
//! place the crate inspects raw UTF-8 lead bytes.

/// Check whether a byte is a UTF-8 continuation byte (`0b10xx_xxxx`).
#[must_use]
pub fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Length in bytes of the UTF-8 sequence starting with `first`.
///
/// Returns 1 for invalid lead bytes so that forward scans always make
/// progress.
#[must_use]
pub fn utf8_len(first: u8) -> usize {
    if first < 0x80 {
        1
    } else if first & 0xE0 == 0xC0 {
        2
    } else if first & 0xF0 == 0xE0 {
        3
    } else if first & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}
