//! Token kinds the external scanner can report, and the validity mask the
//! parser passes in.
//!
//! The discriminants follow the order of the grammar's `externals` list. A
//! host adapter that receives the parser's `valid_symbols` as a `&[bool]`
//! indexes it with these same discriminants.

use bitflags::bitflags;

/// A token recognized by the external scanner.
///
/// This set is closed: any token not listed here belongs to the grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    /// The `package` in `package::member`, with no whitespace around `::`.
    QualifiedIdentPrefix = 0,
    /// A real literal spelled exactly `digits.` (e.g. `12.`).
    SingleDotRealLiteral = 1,
    /// `(* ... *)` or `/* ... */`, excluding `(*@` pragmas.
    BlockComment = 2,
    /// Characters skipped between `(*@` and the pragma keyword.
    PragmaStartWhitespace = 3,
    /// The raw pragma payload, up to but excluding the closing `*)`.
    PragmaValue = 4,
}

impl TokenKind {
    /// All kinds, in external-symbol order.
    pub const ALL: [TokenKind; 5] = [
        TokenKind::QualifiedIdentPrefix,
        TokenKind::SingleDotRealLiteral,
        TokenKind::BlockComment,
        TokenKind::PragmaStartWhitespace,
        TokenKind::PragmaValue,
    ];

    /// Index of this kind in the grammar's `externals` list.
    #[inline]
    pub const fn symbol(self) -> u16 {
        self as u16
    }

    /// Kind for an external-symbol index, if it belongs to this scanner.
    pub const fn from_symbol(symbol: u16) -> Option<Self> {
        match symbol {
            0 => Some(TokenKind::QualifiedIdentPrefix),
            1 => Some(TokenKind::SingleDotRealLiteral),
            2 => Some(TokenKind::BlockComment),
            3 => Some(TokenKind::PragmaStartWhitespace),
            4 => Some(TokenKind::PragmaValue),
            _ => None,
        }
    }

    /// Node name the grammar uses for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::QualifiedIdentPrefix => "_identifier_ref_package",
            TokenKind::SingleDotRealLiteral => "_single_dot_real_literal",
            TokenKind::BlockComment => "block_comment",
            TokenKind::PragmaStartWhitespace => "_pragma_start_whitespace",
            TokenKind::PragmaValue => "pragma_value",
        }
    }

    /// The single-bit mask for this kind.
    #[inline]
    pub const fn mask(self) -> ValidSymbols {
        ValidSymbols::from_bits_truncate(1 << self as u8)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Token kinds the parser accepts at the current position.
    ///
    /// Bit `n` corresponds to the [`TokenKind`] with discriminant `n`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ValidSymbols: u8 {
        const QUALIFIED_IDENT_PREFIX = 1 << 0;
        const SINGLE_DOT_REAL_LITERAL = 1 << 1;
        const BLOCK_COMMENT = 1 << 2;
        const PRAGMA_START_WHITESPACE = 1 << 3;
        const PRAGMA_VALUE = 1 << 4;
    }
}

impl ValidSymbols {
    /// Build a mask from the parser's per-symbol flags.
    ///
    /// Entries past the last known kind are ignored, so a host may pass its
    /// whole `valid_symbols` array.
    pub fn from_flags(flags: &[bool]) -> Self {
        flags
            .iter()
            .zip(TokenKind::ALL)
            .filter_map(|(&valid, kind)| valid.then_some(kind))
            .collect()
    }

    /// Check whether `kind` may be reported at this position.
    #[inline]
    pub const fn accepts(self, kind: TokenKind) -> bool {
        self.contains(kind.mask())
    }

    /// Iterate the accepted kinds in external-symbol order.
    pub fn kinds(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL.into_iter().filter(move |&kind| self.accepts(kind))
    }
}

impl From<TokenKind> for ValidSymbols {
    fn from(kind: TokenKind) -> Self {
        kind.mask()
    }
}

impl FromIterator<TokenKind> for ValidSymbols {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, kind| acc | kind.mask())
    }
}

#[cfg(test)]
mod tests;
