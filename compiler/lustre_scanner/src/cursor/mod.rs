//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor never moves past the sentinel, so reading the current byte is
//! always in bounds and returns `0x00` at EOF.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is an interior null; a null at
//! `pos >= source_len` is the sentinel. [`Cursor::is_eof`] compares
//! positions, so the two never get confused.

/// Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// The cursor is [`Copy`], so a scan can start from a saved position and
/// the host can discard a failed attempt by dropping it.
///
/// # Invariant
///
/// `buf[source_len] == 0x00`, and `pos <= source_len`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel).
    buf: &'a [u8],
    pos: u32,
    /// Length of actual source content (excludes the sentinel).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// The byte at the current position; `0x00` at EOF.
    #[inline]
    fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// The Unicode scalar starting at the current position.
    ///
    /// Returns `'\0'` at EOF and for bytes that do not start a valid UTF-8
    /// sequence (the buffer is built from `&str`, so the latter only happens
    /// if the cursor was moved into the middle of a character).
    pub fn current_char(&self) -> char {
        let b = self.current();
        if b.is_ascii() {
            return char::from(b);
        }
        let start = self.pos as usize;
        let end = start + Self::utf8_char_width(b) as usize;
        self.buf
            .get(start..end)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .and_then(|s| s.chars().next())
            .unwrap_or('\0')
    }

    /// Advance by `n` bytes, stopping at EOF.
    #[inline]
    pub(crate) fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Number of bytes in the UTF-8 character led by `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }
}

#[cfg(test)]
mod tests;
