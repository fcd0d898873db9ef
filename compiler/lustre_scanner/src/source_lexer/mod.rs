//! Reference [`Lexer`] over a [`SourceBuffer`].
//!
//! Tracks three positions while a scan runs:
//!
//! ```text
//!   skipped     token        lookahead only
//! [ ......... | ......... | .............. ]
//! ^ origin    ^ start     ^ marked end     ^ cursor
//! ```
//!
//! Skipped characters move `start` only while nothing significant has been
//! consumed. [`SourceLexer::finish`] reports `start..end`, where `end` is the
//! last [`mark_end`](Lexer::mark_end) or the cursor if none happened. A failed
//! scan is abandoned by dropping the lexer: the [`SourceBuffer`] is never
//! mutated, and the caller still holds the origin offset.

use crate::{Cursor, Lexer, SourceBuffer, Span};

/// Host cursor for a single scan call.
#[derive(Clone, Copy, Debug)]
pub struct SourceLexer<'a> {
    cursor: Cursor<'a>,
    origin: u32,
    start: u32,
    marked_end: Option<u32>,
    /// Set by the first significant advance.
    consumed: bool,
}

impl<'a> SourceLexer<'a> {
    /// Start a scan at byte `offset` (clamped to the end of `source`).
    pub fn new(source: &'a SourceBuffer, offset: u32) -> Self {
        let cursor = source.cursor_at(offset);
        let origin = cursor.pos();
        Self {
            cursor,
            origin,
            start: origin,
            marked_end: None,
            consumed: false,
        }
    }

    /// Offset the scan started at.
    #[inline]
    pub fn origin(&self) -> u32 {
        self.origin
    }

    /// Current read position, including speculative lookahead.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Commit the scan: the span of the recognized token.
    pub fn finish(self) -> Span {
        let end = self.marked_end.unwrap_or(self.cursor.pos());
        // A mark can only precede the start if it was taken before skipped
        // characters; the token is then empty at the start.
        Span::new(self.start, end.max(self.start))
    }
}

impl Lexer for SourceLexer<'_> {
    #[inline]
    fn lookahead(&self) -> char {
        self.cursor.current_char()
    }

    fn advance(&mut self, skip: bool) {
        if self.cursor.is_eof() {
            return;
        }
        self.cursor.advance_char();
        if skip && !self.consumed {
            self.start = self.cursor.pos();
        } else {
            self.consumed = true;
        }
    }

    #[inline]
    fn mark_end(&mut self) {
        self.marked_end = Some(self.cursor.pos());
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }
}
