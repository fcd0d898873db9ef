//! Sentinel-terminated source buffer for the reference host lexer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content, so
//! a [`Cursor`] reads the end-of-input sentinel at EOF without a bounds
//! check.
//!
//! # Byte Order Mark
//!
//! A leading UTF-8 BOM is kept in the buffer, so spans stay relative to the
//! original text, but [`SourceBuffer::content_start`] points past it. A
//! [`Session`](crate::Session) starts scanning there and never sees
//! `U+FEFF` as lookahead.

use crate::Cursor;

/// Byte length of `U+FEFF` in UTF-8.
const BOM_LEN: u32 = 3;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [bom?, source_bytes..., 0x00]
///  ^     ^                ^
///  0     content_start    source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel]`.
    buf: Vec<u8>,
    /// Length of the source content (excludes the sentinel).
    source_len: u32,
    content_start: u32,
}

impl SourceBuffer {
    /// Copy `source` into a sentinel-terminated buffer.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated to `u32::MAX`;
    /// span offsets are 32-bit.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len_u32 = u32::try_from(source_bytes.len()).unwrap_or(u32::MAX);
        let source_len = source_len_u32 as usize;

        let mut buf = Vec::with_capacity(source_len + 1);
        buf.extend_from_slice(&source_bytes[..source_len]);
        buf.push(0);

        let content_start = if source.starts_with('\u{FEFF}') {
            BOM_LEN
        } else {
            0
        };

        Self {
            buf,
            source_len: source_len_u32,
            content_start,
        }
    }

    /// Source bytes, without the sentinel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Offset of the first byte after a leading UTF-8 BOM, or `0`.
    #[inline]
    pub fn content_start(&self) -> u32 {
        self.content_start
    }

    /// A [`Cursor`] positioned at `pos`, clamped to the end of the source.
    pub fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        let mut cursor = Cursor::new(&self.buf, self.source_len);
        cursor.advance_n(pos.min(self.source_len));
        cursor
    }

    /// Source text in `start..end`, or `None` if the range is out of bounds
    /// or splits a UTF-8 character.
    pub fn text(&self, start: u32, end: u32) -> Option<&str> {
        let bytes = self.as_bytes().get(start as usize..end as usize)?;
        std::str::from_utf8(bytes).ok()
    }

    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
