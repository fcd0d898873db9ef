//! Driving a [`Scanner`] across an in-memory source.
//!
//! A [`Session`] plays the part of the parsing engine: it owns the read
//! offset, starts a fresh [`SourceLexer`] for every call, and decides what
//! a result means for the stream. A match moves the offset to the end of
//! the committed span. A miss leaves both the offset and the scanner mode as
//! they were before the call, so speculative reads never leak into the next
//! scan.

use tracing::{debug, trace};

use crate::{Scanner, SourceBuffer, SourceLexer, Span, StateError, TokenKind, ValidSymbols};

/// A recognized external token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Result of one scan call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Nothing recognized; the parser falls back to its own rules.
    NoMatch,
    Matched(Token),
}

impl ScanOutcome {
    pub fn token(self) -> Option<Token> {
        match self {
            ScanOutcome::Matched(token) => Some(token),
            ScanOutcome::NoMatch => None,
        }
    }

    pub fn is_match(self) -> bool {
        matches!(self, ScanOutcome::Matched(_))
    }
}

/// Saved position of a [`Session`]: read offset plus serialized scanner
/// state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Checkpoint {
    pub offset: u32,
    pub state: Vec<u8>,
}

/// A scanner bound to one source buffer.
pub struct Session<'src> {
    source: &'src SourceBuffer,
    scanner: Scanner,
    offset: u32,
}

impl<'src> Session<'src> {
    /// Bind a fresh scanner to `source`, positioned after any leading BOM.
    pub fn new(source: &'src SourceBuffer) -> Self {
        Self {
            source,
            scanner: Scanner::new(),
            offset: source.content_start(),
        }
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[inline]
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn source(&self) -> &'src SourceBuffer {
        self.source
    }

    /// Move the read offset, clamped to the end of the source.
    ///
    /// The grammar consumes its own tokens between external scans; this is
    /// how the caller reports the offset it reached.
    pub fn seek(&mut self, offset: u32) {
        self.offset = offset.min(self.source.len());
    }

    /// Run one scan at the current offset.
    pub fn scan(&mut self, valid: ValidSymbols) -> ScanOutcome {
        let saved = self.scanner.clone();
        let mut lexer = SourceLexer::new(self.source, self.offset);

        let Some(kind) = self.scanner.scan(&mut lexer, valid) else {
            trace!(offset = self.offset, lookahead_end = lexer.pos(), "scan abandoned");
            // A miss has no effect on the session.
            self.scanner = saved;
            return ScanOutcome::NoMatch;
        };

        let span = lexer.finish();
        self.offset = span.end;
        trace!(%kind, %span, "scan matched");
        ScanOutcome::Matched(Token { kind, span })
    }

    /// Scan once per mask, stopping at the first miss.
    pub fn tokens<I>(&mut self, masks: I) -> Vec<Token>
    where
        I: IntoIterator<Item = ValidSymbols>,
    {
        masks
            .into_iter()
            .map_while(|valid| self.scan(valid).token())
            .collect()
    }

    /// Text of a token produced by this session.
    pub fn text(&self, token: Token) -> Option<&'src str> {
        self.source.text(token.span.start, token.span.end)
    }

    /// Save the offset and scanner state.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            offset: self.offset,
            state: self.scanner.snapshot(),
        }
    }

    /// Resume from a [`Checkpoint`].
    ///
    /// On error the session is left unchanged.
    pub fn restore(&mut self, checkpoint: &Checkpoint) -> Result<(), StateError> {
        self.scanner.deserialize(&checkpoint.state)?;
        self.seek(checkpoint.offset);
        debug!(offset = self.offset, mode = ?self.scanner.mode(), "session restored");
        Ok(())
    }
}
