//! Integration tests for editor-driven editing workflows.
//!
//! These tests play the role of the embedding editor: every edit builds an
//! `UndoEntry`, applies the buffer mutation, moves the cursor, and pushes
//! the entry — and undo/redo replay entries back through the buffer. This is
//! the orchestration contract the engine is consumed through.

#![allow(clippy::uninlined_format_args)] // Clarity over style in test code

use editcore::{Cursor, GapBuffer, Selection, UndoEntry, UndoStack};

// ============================================================================
// Editor orchestration helpers
// ============================================================================

/// Type one character at the cursor, recording it for undo.
fn type_char(buf: &mut GapBuffer, cursor: &mut Cursor, history: &mut UndoStack, ch: char) {
    let pos = cursor.byte_offset();
    let mut tmp = [0u8; 4];
    let text: &str = ch.encode_utf8(&mut tmp);
    buf.insert_at(pos, text);
    cursor.set_byte_offset(buf, pos + text.len());
    history.push(UndoEntry::insertion(pos, text, pos, cursor.byte_offset()));
}

/// Backspace one code point at the cursor, recording it for undo.
fn backspace(buf: &mut GapBuffer, cursor: &mut Cursor, history: &mut UndoStack) -> Option<char> {
    let pos = cursor.byte_offset();
    buf.move_gap_to(pos);
    let ch = buf.delete_char_before()?;
    let new_pos = pos - ch.len_utf8();
    cursor.set_byte_offset(buf, new_pos);
    history.push(UndoEntry::deletion(new_pos, ch.to_string(), pos, new_pos));
    Some(ch)
}

/// Replace the active selection with `text`, recording it for undo.
fn replace_selection(
    buf: &mut GapBuffer,
    cursor: &mut Cursor,
    selection: &mut Selection,
    history: &mut UndoStack,
    text: &str,
) {
    let (start, end) = selection.normalize();
    let before = cursor.byte_offset();
    let deleted = buf.replace(start, end, text);
    cursor.set_byte_offset(buf, start + text.len());
    history.push(UndoEntry::replacement(
        start,
        deleted,
        text,
        before,
        cursor.byte_offset(),
    ));
    selection.clear();
}

/// Pop one undo entry and replay its inverse against the buffer.
fn apply_undo(buf: &mut GapBuffer, cursor: &mut Cursor, history: &mut UndoStack) -> bool {
    let Some(entry) = history.undo() else {
        return false;
    };
    if !entry.inserted.is_empty() {
        buf.replace(entry.position, entry.position + entry.inserted.len(), "");
    }
    if !entry.deleted.is_empty() {
        buf.insert_at(entry.position, &entry.deleted);
    }
    cursor.set_byte_offset(buf, entry.cursor_before);
    true
}

/// Pop one redo entry and replay it forward against the buffer.
fn apply_redo(buf: &mut GapBuffer, cursor: &mut Cursor, history: &mut UndoStack) -> bool {
    let Some(entry) = history.redo() else {
        return false;
    };
    if !entry.deleted.is_empty() {
        buf.replace(entry.position, entry.position + entry.deleted.len(), "");
    }
    if !entry.inserted.is_empty() {
        buf.insert_at(entry.position, &entry.inserted);
    }
    cursor.set_byte_offset(buf, entry.cursor_after);
    true
}

// ============================================================================
// Core editing scenarios
// ============================================================================

#[test]
fn test_insert_comma_into_hello_world() {
    let mut buf = GapBuffer::with_text("hello world");
    buf.move_gap_to(5);
    buf.insert(",");
    assert_eq!(buf.to_string(), "hello, world");
}

#[test]
fn test_backspace_multibyte_from_end() {
    let mut buf = GapBuffer::with_text("hi🎉!");
    let mut cursor = Cursor::new();
    let mut history = UndoStack::new();
    cursor.move_to_end(&buf);

    assert_eq!(backspace(&mut buf, &mut cursor, &mut history), Some('!'));
    assert_eq!(backspace(&mut buf, &mut cursor, &mut history), Some('🎉'));
    assert_eq!(buf.to_string(), "hi");
    assert_eq!(cursor.byte_offset(), 2);
}

#[test]
fn test_replace_range() {
    let mut buf = GapBuffer::with_text("hello world");
    let deleted = buf.replace(6, 11, "there");
    assert_eq!(buf.to_string(), "hello there");
    assert_eq!(deleted, "world");
}

#[test]
fn test_select_word_underscore() {
    let buf = GapBuffer::with_text("foo bar_baz 123");
    let mut sel = Selection::new();
    sel.select_word(&buf, 7);
    assert_eq!(sel.text(&buf), "bar_baz");
}

#[test]
fn test_merged_insertions_undo_as_one() {
    let mut buf = GapBuffer::new();
    let mut cursor = Cursor::new();
    let mut history = UndoStack::with_max_entries(1000);

    for ch in ['a', 'b', 'c'] {
        type_char(&mut buf, &mut cursor, &mut history, ch);
    }
    assert_eq!(buf.to_string(), "abc");
    assert_eq!(history.undo_depth(), 1);

    assert!(apply_undo(&mut buf, &mut cursor, &mut history));
    assert_eq!(buf.to_string(), "");
    assert_eq!(cursor.byte_offset(), 0);
}

// ============================================================================
// Undo/redo workflows
// ============================================================================

#[test]
fn test_undo_redo_symmetry() {
    let mut buf = GapBuffer::with_text("hello");
    let mut cursor = Cursor::new();
    let mut history = UndoStack::new();
    cursor.move_to_end(&buf);

    type_char(&mut buf, &mut cursor, &mut history, 'x');
    assert_eq!(buf.to_string(), "hellox");

    assert!(apply_undo(&mut buf, &mut cursor, &mut history));
    assert_eq!(buf.to_string(), "hello");
    assert_eq!(cursor.byte_offset(), 5);

    assert!(apply_redo(&mut buf, &mut cursor, &mut history));
    assert_eq!(buf.to_string(), "hellox");
    assert_eq!(cursor.byte_offset(), 6);
}

#[test]
fn test_space_starts_new_undo_step() {
    let mut buf = GapBuffer::new();
    let mut cursor = Cursor::new();
    let mut history = UndoStack::new();

    for ch in "ab cd".chars() {
        type_char(&mut buf, &mut cursor, &mut history, ch);
    }
    assert_eq!(buf.to_string(), "ab cd");
    // "ab" merged, " " alone, "cd" merged
    assert_eq!(history.undo_depth(), 3);

    assert!(apply_undo(&mut buf, &mut cursor, &mut history));
    assert_eq!(buf.to_string(), "ab ");
    assert!(apply_undo(&mut buf, &mut cursor, &mut history));
    assert_eq!(buf.to_string(), "ab");
    assert!(apply_undo(&mut buf, &mut cursor, &mut history));
    assert_eq!(buf.to_string(), "");
    assert!(!apply_undo(&mut buf, &mut cursor, &mut history));
}

#[test]
fn test_backspace_run_undoes_as_one() {
    let mut buf = GapBuffer::with_text("abc");
    let mut cursor = Cursor::new();
    let mut history = UndoStack::new();
    cursor.move_to_end(&buf);

    while backspace(&mut buf, &mut cursor, &mut history).is_some() {}
    assert_eq!(buf.to_string(), "");
    assert_eq!(history.undo_depth(), 1);

    assert!(apply_undo(&mut buf, &mut cursor, &mut history));
    assert_eq!(buf.to_string(), "abc");
    assert_eq!(cursor.byte_offset(), 3);
}

#[test]
fn test_new_edit_discards_redo_branch() {
    let mut buf = GapBuffer::new();
    let mut cursor = Cursor::new();
    let mut history = UndoStack::new();

    type_char(&mut buf, &mut cursor, &mut history, 'a');
    apply_undo(&mut buf, &mut cursor, &mut history);
    assert!(history.can_redo());

    type_char(&mut buf, &mut cursor, &mut history, 'b');
    assert!(!history.can_redo());
    assert_eq!(buf.to_string(), "b");
}

#[test]
fn test_replace_selection_round_trip() {
    let mut buf = GapBuffer::with_text("hello world");
    let mut cursor = Cursor::new();
    let mut selection = Selection::new();
    let mut history = UndoStack::new();

    selection.start(6);
    selection.update(11);
    replace_selection(&mut buf, &mut cursor, &mut selection, &mut history, "there");
    assert_eq!(buf.to_string(), "hello there");
    assert!(!selection.is_active());

    assert!(apply_undo(&mut buf, &mut cursor, &mut history));
    assert_eq!(buf.to_string(), "hello world");

    assert!(apply_redo(&mut buf, &mut cursor, &mut history));
    assert_eq!(buf.to_string(), "hello there");
    assert_eq!(cursor.byte_offset(), 11);
}

#[test]
fn test_typing_session_with_newlines() {
    let mut buf = GapBuffer::new();
    let mut cursor = Cursor::new();
    let mut history = UndoStack::new();

    for ch in "one\ntwo".chars() {
        type_char(&mut buf, &mut cursor, &mut history, ch);
    }
    assert_eq!(buf.line_count(), 2);
    assert_eq!(buf.lines(), vec!["one", "two"]);
    assert_eq!(cursor.position(&buf), (1, 3));
    // "one" merged, "\n" alone, "two" merged
    assert_eq!(history.undo_depth(), 3);

    while apply_undo(&mut buf, &mut cursor, &mut history) {}
    assert_eq!(buf.to_string(), "");
    while apply_redo(&mut buf, &mut cursor, &mut history) {}
    assert_eq!(buf.to_string(), "one\ntwo");
    eprintln!("[TEST] PASS: typing session replays cleanly through undo/redo");
}

// ============================================================================
// Document replacement
// ============================================================================

#[test]
fn test_document_replacement_discards_state() {
    let mut buf = GapBuffer::with_text("old content");
    let mut cursor = Cursor::new();
    let mut history = UndoStack::new();
    cursor.move_to_end(&buf);
    type_char(&mut buf, &mut cursor, &mut history, '!');

    // Loading a new document replaces everything; nothing is repointed.
    buf = GapBuffer::with_text("new content");
    cursor = Cursor::new();
    history.clear();

    assert_eq!(buf.to_string(), "new content");
    assert_eq!(cursor.byte_offset(), 0);
    assert!(!history.can_undo());
}

// ============================================================================
// Collaborator views
// ============================================================================

#[test]
fn test_rendering_view_of_selection() {
    // A renderer derives per-line spans from the normalized selection.
    let buf = GapBuffer::with_text("alpha\nbeta\ngamma");
    let mut sel = Selection::new();
    sel.start(13);
    sel.update(2);

    let (start, end) = sel.normalize();
    assert_eq!((start, end), (2, 13));
    assert_eq!(buf.position_to_line_col(start), (0, 2));
    assert_eq!(buf.position_to_line_col(end), (2, 2));
    assert_eq!(sel.text(&buf), "pha\nbeta\nga");
}

#[test]
fn test_clipboard_cut_paste() {
    let mut buf = GapBuffer::with_text("cut me please");
    let mut cursor = Cursor::new();
    let mut selection = Selection::new();
    let mut history = UndoStack::new();

    selection.start(0);
    selection.update(7);
    let clipboard = selection.text(&buf);
    assert_eq!(clipboard, "cut me ");
    replace_selection(&mut buf, &mut cursor, &mut selection, &mut history, "");
    assert_eq!(buf.to_string(), "please");

    // Paste at the end.
    let pos = buf.len();
    buf.insert_at(pos, &clipboard);
    assert_eq!(buf.to_string(), "pleasecut me ");
}
