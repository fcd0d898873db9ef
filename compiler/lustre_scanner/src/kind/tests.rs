use super::*;
use pretty_assertions::assert_eq;

// === TokenKind discriminants ===

#[test]
fn discriminants_follow_externals_order() {
    assert_eq!(TokenKind::QualifiedIdentPrefix as u8, 0);
    assert_eq!(TokenKind::SingleDotRealLiteral as u8, 1);
    assert_eq!(TokenKind::BlockComment as u8, 2);
    assert_eq!(TokenKind::PragmaStartWhitespace as u8, 3);
    assert_eq!(TokenKind::PragmaValue as u8, 4);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn symbol_round_trips_for_every_kind() {
    for kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_symbol(kind.symbol()), Some(kind));
    }
    assert_eq!(TokenKind::from_symbol(5), None);
    assert_eq!(TokenKind::from_symbol(u16::MAX), None);
}

#[test]
fn display_uses_grammar_name() {
    assert_eq!(TokenKind::BlockComment.to_string(), "block_comment");
    assert_eq!(TokenKind::PragmaValue.to_string(), "pragma_value");
}

// === ValidSymbols ===

#[test]
fn mask_bits_match_named_flags() {
    assert_eq!(
        TokenKind::QualifiedIdentPrefix.mask(),
        ValidSymbols::QUALIFIED_IDENT_PREFIX
    );
    assert_eq!(
        TokenKind::SingleDotRealLiteral.mask(),
        ValidSymbols::SINGLE_DOT_REAL_LITERAL
    );
    assert_eq!(TokenKind::BlockComment.mask(), ValidSymbols::BLOCK_COMMENT);
    assert_eq!(
        TokenKind::PragmaStartWhitespace.mask(),
        ValidSymbols::PRAGMA_START_WHITESPACE
    );
    assert_eq!(TokenKind::PragmaValue.mask(), ValidSymbols::PRAGMA_VALUE);
}

#[test]
fn empty_mask_accepts_nothing() {
    let valid = ValidSymbols::empty();
    for kind in TokenKind::ALL {
        assert!(!valid.accepts(kind));
    }
    assert_eq!(valid.kinds().count(), 0);
}

#[test]
fn all_mask_accepts_everything() {
    let valid = ValidSymbols::all();
    assert_eq!(valid.kinds().collect::<Vec<_>>(), TokenKind::ALL.to_vec());
}

#[test]
fn from_flags_reads_parser_array() {
    let valid = ValidSymbols::from_flags(&[false, true, true, false, false]);
    assert_eq!(
        valid,
        ValidSymbols::SINGLE_DOT_REAL_LITERAL | ValidSymbols::BLOCK_COMMENT
    );
}

#[test]
fn from_flags_ignores_extra_and_missing_entries() {
    // Shorter than the kind list: the rest count as invalid.
    assert_eq!(
        ValidSymbols::from_flags(&[true]),
        ValidSymbols::QUALIFIED_IDENT_PREFIX
    );
    // Longer (e.g. a trailing error sentinel): extra entries are dropped.
    assert_eq!(
        ValidSymbols::from_flags(&[false, false, false, false, true, true, true]),
        ValidSymbols::PRAGMA_VALUE
    );
}

#[test]
fn collect_from_kinds() {
    let valid: ValidSymbols = [TokenKind::PragmaValue, TokenKind::BlockComment]
        .into_iter()
        .collect();
    assert!(valid.accepts(TokenKind::PragmaValue));
    assert!(valid.accepts(TokenKind::BlockComment));
    assert!(!valid.accepts(TokenKind::QualifiedIdentPrefix));
    assert_eq!(
        valid.kinds().collect::<Vec<_>>(),
        vec![TokenKind::BlockComment, TokenKind::PragmaValue]
    );
}
