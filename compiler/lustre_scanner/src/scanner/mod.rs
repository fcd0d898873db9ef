//! The disambiguating recognizers.
//!
//! The parser calls [`Scanner::scan`] at every position where one of the
//! external tokens may appear. Each recognizer has a cheap precondition on
//! the lookahead character; the first one whose precondition holds owns the
//! scan, and its answer is final for this call. A recognizer that gives up
//! after consuming input relies on the host to rewind (see [`Lexer`]).
//!
//! # Dispatch Order
//!
//! 1. Pragma value, when the previous token opened a pragma header.
//! 2. Qualified identifier prefix (`_`, letters).
//! 3. Single-dot real literal (digits).
//! 4. Block comment (`(`, `/`).
//! 5. Pragma start whitespace. It always matches, so it only runs when no
//!    character-driven recognizer claimed the lookahead. Under an all-valid
//!    mask (error recovery), `(* x *)` is a comment.

use tracing::{debug, trace};

use crate::chars::{is_digit, is_ident_continue, is_ident_start};
use crate::kind::{TokenKind, ValidSymbols};
use crate::lexer::Lexer;
use crate::state::{PragmaMode, StateError};

/// External scanner session.
///
/// Owns the pragma mode for the lifetime of one parse. Dropping the scanner
/// ends the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scanner {
    mode: PragmaMode,
}

impl Scanner {
    /// Start a session in [`PragmaMode::Idle`].
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> PragmaMode {
        self.mode
    }

    /// Write the session state into `buffer`, returning the byte count.
    pub fn serialize(&self, buffer: &mut [u8]) -> Result<usize, StateError> {
        self.mode.encode(buffer)
    }

    /// Owned copy of the session state.
    pub fn snapshot(&self) -> Vec<u8> {
        vec![self.mode.tag()]
    }

    /// Restore state saved by [`serialize`](Self::serialize).
    ///
    /// An empty buffer restores [`PragmaMode::Idle`]. On error the current
    /// state is left untouched.
    pub fn deserialize(&mut self, bytes: &[u8]) -> Result<(), StateError> {
        let mode = PragmaMode::decode(bytes)?;
        if mode != self.mode {
            debug!(from = ?self.mode, to = ?mode, "restored pragma mode");
        }
        self.mode = mode;
        Ok(())
    }

    /// Try to recognize one external token at the lexer's position.
    ///
    /// Returns the matched kind, always one `valid` accepts, or `None`.
    pub fn scan<L: Lexer + ?Sized>(
        &mut self,
        lexer: &mut L,
        valid: ValidSymbols,
    ) -> Option<TokenKind> {
        if valid.accepts(TokenKind::PragmaValue) && self.mode.is_awaiting_value() {
            return Some(self.pragma_value(lexer));
        }

        let c = lexer.lookahead();
        if valid.accepts(TokenKind::QualifiedIdentPrefix) && is_ident_start(c) {
            return qualified_ident_prefix(lexer);
        }
        if valid.accepts(TokenKind::SingleDotRealLiteral) && is_digit(c) {
            return single_dot_real_literal(lexer);
        }
        if valid.accepts(TokenKind::BlockComment) && matches!(c, '(' | '/') {
            return block_comment(lexer);
        }
        if valid.accepts(TokenKind::PragmaStartWhitespace) {
            return Some(self.pragma_start_whitespace(lexer));
        }

        trace!(?valid, lookahead = ?c, "no recognizer applies");
        None
    }

    fn set_mode(&mut self, mode: PragmaMode) {
        if mode != self.mode {
            debug!(from = ?self.mode, to = ?mode, "pragma mode transition");
            self.mode = mode;
        }
    }

    // ─── Pragmas ─────────────────────────────────────────────────────

    /// Skip from `(*@` to the pragma keyword.
    ///
    /// Matches even when nothing is skipped or the input ends.
    fn pragma_start_whitespace<L: Lexer + ?Sized>(&mut self, lexer: &mut L) -> TokenKind {
        self.set_mode(PragmaMode::AwaitingValue);
        while !lexer.is_eof() && !is_ident_start(lexer.lookahead()) {
            lexer.advance(true);
        }
        TokenKind::PragmaStartWhitespace
    }

    /// Consume the pragma payload up to, not including, the closing `*)`.
    ///
    /// An unterminated payload runs to end of input and still matches.
    fn pragma_value<L: Lexer + ?Sized>(&mut self, lexer: &mut L) -> TokenKind {
        self.set_mode(PragmaMode::Idle);
        loop {
            if lexer.is_eof() {
                lexer.mark_end();
                trace!("unterminated pragma value runs to end of input");
                return TokenKind::PragmaValue;
            }
            if lexer.lookahead() == '*' {
                lexer.mark_end();
                lexer.advance(false);
                if lexer.lookahead() == ')' {
                    return TokenKind::PragmaValue;
                }
            } else {
                lexer.advance(false);
            }
        }
    }
}

// ─── Identifiers ─────────────────────────────────────────────────────

/// `package` in `package::member`.
///
/// The token ends after the identifier; `::` and the first member character
/// are lookahead only.
fn qualified_ident_prefix<L: Lexer + ?Sized>(lexer: &mut L) -> Option<TokenKind> {
    lexer.advance(false); // identifier start, already validated
    while is_ident_continue(lexer.lookahead()) {
        lexer.advance(false);
    }
    lexer.mark_end();

    for _ in 0..2 {
        if lexer.lookahead() != ':' {
            trace!("identifier not followed by `::`");
            return None;
        }
        lexer.advance(false);
    }
    if !is_ident_start(lexer.lookahead()) {
        trace!(lookahead = ?lexer.lookahead(), "`::` not followed by an identifier");
        return None;
    }
    Some(TokenKind::QualifiedIdentPrefix)
}

// ─── Numeric Literals ────────────────────────────────────────────────

/// `12.` on its own: not `12.5`, `12.e3`, or the start of `12..`.
fn single_dot_real_literal<L: Lexer + ?Sized>(lexer: &mut L) -> Option<TokenKind> {
    lexer.advance(false);
    while is_digit(lexer.lookahead()) {
        lexer.advance(false);
    }
    if lexer.lookahead() != '.' {
        return None;
    }
    lexer.advance(false);

    match lexer.lookahead() {
        '.' | 'e' | 'E' => None,
        c if is_digit(c) => None,
        _ => Some(TokenKind::SingleDotRealLiteral),
    }
}

// ─── Comments ────────────────────────────────────────────────────────

/// `(* ... *)` or `/* ... */`, not nested.
///
/// `(*@` opens a pragma and is refused. Reaching end of input before the
/// closing delimiter is no match.
fn block_comment<L: Lexer + ?Sized>(lexer: &mut L) -> Option<TokenKind> {
    let opener = lexer.lookahead();
    lexer.advance(false);
    if lexer.lookahead() != '*' {
        return None;
    }
    lexer.advance(false);
    if opener == '(' && lexer.lookahead() == '@' {
        trace!("`(*@` is a pragma, not a comment");
        return None;
    }

    let closer = if opener == '(' { ')' } else { '/' };
    loop {
        if lexer.is_eof() {
            trace!(%opener, "unterminated block comment");
            return None;
        }
        if lexer.lookahead() == '*' {
            lexer.advance(false);
            // No advance on mismatch: the lookahead may be another `*`.
            if lexer.lookahead() == closer {
                lexer.advance(false);
                return Some(TokenKind::BlockComment);
            }
        } else {
            lexer.advance(false);
        }
    }
}
