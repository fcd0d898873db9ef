use super::*;
use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn starts_at_requested_position() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor_at(0);
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'a');
    assert_eq!(buf.cursor_at(1).current_char(), 'b');
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor_at(0);
    cursor.advance_n(3);
    assert_eq!(cursor.current_char(), 'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_stops_at_sentinel() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor_at(0);
    cursor.advance_char();
    cursor.advance_char();
    assert!(cursor.is_eof());
    cursor.advance_char();
    cursor.advance_n(10);
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), 0);
}

#[test]
fn advance_n_saturates() {
    let buf = SourceBuffer::new("xy");
    let mut cursor = buf.cursor_at(1);
    cursor.advance_n(u32::MAX);
    assert_eq!(cursor.pos(), 2);
}

// === EOF Detection ===

#[test]
fn is_eof_on_empty_source() {
    let buf = SourceBuffer::new("");
    assert!(buf.cursor_at(0).is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor_at(1);
    assert_eq!(cursor.current_char(), '\0');
    assert!(!cursor.is_eof());
    cursor.advance_char();
    assert_eq!(cursor.current_char(), 'b');
}

// === Characters ===

#[test]
fn current_char_decodes_ascii() {
    let buf = SourceBuffer::new("(*");
    let mut cursor = buf.cursor_at(0);
    assert_eq!(cursor.current_char(), '(');
    cursor.advance_char();
    assert_eq!(cursor.current_char(), '*');
}

#[test]
fn current_char_decodes_multibyte() {
    let buf = SourceBuffer::new("é€😀x");
    let mut cursor = buf.cursor_at(0);
    assert_eq!(cursor.current_char(), 'é');
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current_char(), '€');
    cursor.advance_char();
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current_char(), '😀');
    cursor.advance_char();
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.current_char(), 'x');
}

#[test]
fn current_char_is_nul_at_eof() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.cursor_at(0).current_char(), '\0');
}

#[test]
fn current_char_mid_sequence_is_nul() {
    let buf = SourceBuffer::new("é");
    // continuation byte
    assert_eq!(buf.cursor_at(1).current_char(), '\0');
}

#[test]
fn utf8_char_width_by_leading_byte() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
}
