//! Fuzz target for editing operation sequences.
//!
//! Replays arbitrary op sequences against a GapBuffer and a shadow String
//! model, asserting the two agree after every step. This exercises gap
//! relocation, growth, code-point deletion, and range replace together.

#![no_main]

use editcore::GapBuffer;
use libfuzzer_sys::fuzz_target;

/// Snap an arbitrary index to a char boundary of `s`.
fn snap(s: &str, mut idx: usize) -> usize {
    idx = idx.min(s.len());
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fuzz_target!(|data: &[u8]| {
    let mut buf = GapBuffer::new();
    let mut model = String::new();
    let mut bytes = data.iter().copied();

    const MAX_STEPS: usize = 2000;
    let mut steps = 0;

    while let Some(op) = bytes.next() {
        steps += 1;
        if steps > MAX_STEPS {
            break;
        }
        let arg = usize::from(bytes.next().unwrap_or(0));

        match op % 5 {
            0 => {
                // Insert a small string at an arbitrary position.
                let p = snap(&model, arg);
                let ch = char::from_u32(u32::from(bytes.next().unwrap_or(b'a')))
                    .filter(|c| !c.is_control() || *c == '\n')
                    .unwrap_or('a');
                let mut tmp = [0u8; 4];
                let text = ch.encode_utf8(&mut tmp);
                buf.insert_at(p, text);
                model.insert(p, ch);
            }
            1 => {
                // Move the gap; content must be unaffected.
                buf.move_gap_to(snap(&model, arg));
            }
            2 => {
                // Backspace one code point at an arbitrary position.
                let p = snap(&model, arg);
                buf.move_gap_to(p);
                let removed = buf.delete_char_before();
                let expect = model[..p].chars().next_back();
                assert_eq!(removed, expect);
                if let Some(ch) = expect {
                    model.remove(p - ch.len_utf8());
                }
            }
            3 => {
                // Forward-delete one code point.
                let p = snap(&model, arg);
                buf.move_gap_to(p);
                let removed = buf.delete_char_after();
                let expect = model[p..].chars().next();
                assert_eq!(removed, expect);
                if expect.is_some() {
                    model.remove(p);
                }
            }
            _ => {
                // Replace an arbitrary range with a fixed string.
                let a = snap(&model, arg);
                let b = snap(&model, usize::from(bytes.next().unwrap_or(0)));
                let (start, end) = (a.min(b), a.max(b));
                let deleted = buf.replace(start, end, "yz");
                assert_eq!(deleted, model[start..end].to_string());
                model.replace_range(start..end, "yz");
            }
        }

        assert_eq!(buf.len(), model.len());
        assert_eq!(buf.to_string(), model);

        // Line bookkeeping must agree with the model too.
        assert_eq!(buf.line_count(), model.matches('\n').count() + 1);
    }
});
