//! The host cursor the scanner reads through.

/// Cursor over the parser's input, positioned at the next unconsumed
/// character when a scan starts.
///
/// # Commit and abandon
///
/// Characters consumed by [`advance`](Lexer::advance) are speculative. The
/// token a successful scan reports ends at the last [`mark_end`](Lexer::mark_end),
/// or at the current position if `mark_end` was never called. When a scan
/// reports no match, the host must rewind to the offset the scan started at;
/// nothing read during the failed scan is kept.
pub trait Lexer {
    /// The next character, or `'\0'` at end of input.
    ///
    /// A `'\0'` inside the source is also returned as `'\0'`; use
    /// [`is_eof`](Lexer::is_eof) to tell them apart.
    fn lookahead(&self) -> char;

    /// Consume the lookahead character.
    ///
    /// With `skip` set, the character is insignificant: while nothing
    /// significant has been consumed yet, the token start moves past it.
    fn advance(&mut self, skip: bool);

    /// Commit the current position as the end of the token.
    ///
    /// Later advances are lookahead only and do not extend the token.
    fn mark_end(&mut self);

    /// Returns `true` once every character has been consumed.
    fn is_eof(&self) -> bool;
}
