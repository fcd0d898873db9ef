//! Character classes shared by the recognizers.
//!
//! Lustre identifiers follow `[_a-zA-Z][_'a-zA-Z0-9]*`. Only ASCII is
//! significant; every other scalar value falls outside all three classes.

#[inline]
pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Identifier continuation. Note the prime: `x'` is a valid name.
#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c == '_' || c == '\'' || c.is_ascii_alphanumeric()
}
