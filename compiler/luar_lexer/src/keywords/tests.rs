use super::*;
use pretty_assertions::assert_eq;

const SHARED: [(&str, TokenKind); 19] = [
    ("and", TokenKind::And),
    ("break", TokenKind::Break),
    ("do", TokenKind::Do),
    ("else", TokenKind::Else),
    ("elseif", TokenKind::Elseif),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("goto", TokenKind::Goto),
    ("if", TokenKind::If),
    ("in", TokenKind::In),
    ("local", TokenKind::Local),
    ("nil", TokenKind::Nil),
    ("not", TokenKind::Not),
    ("or", TokenKind::Or),
    ("repeat", TokenKind::Repeat),
    ("return", TokenKind::Return),
    ("then", TokenKind::Then),
    ("true", TokenKind::True),
    ("until", TokenKind::Until),
];

#[test]
fn shared_words_resolve_in_every_dialect() {
    for dialect in Dialect::ALL {
        let table = dialect.keywords();
        for (text, kind) in SHARED {
            assert_eq!(table.lookup(text.as_bytes()), Some(kind), "{text} in {dialect}");
        }
        assert_eq!(table.lookup(b"while"), Some(TokenKind::While));
    }
}

#[test]
fn classic_table() {
    let t = Dialect::Classic.keywords();
    assert_eq!(t.lookup(b"function"), Some(TokenKind::Function));
    assert_eq!(t.lookup(b"end"), Some(TokenKind::End));
    assert_eq!(t.lookup(b"fn"), None);
    assert_eq!(t.lookup(b"operator"), None);
    assert_eq!(t.lookup(b"using"), None);
    assert_eq!(t.lookup(b"nameof"), None);
}

#[test]
fn extended_table() {
    let t = Dialect::Extended.keywords();
    assert_eq!(t.lookup(b"function"), None);
    assert_eq!(t.lookup(b"end"), None);
    assert_eq!(t.lookup(b"fn"), Some(TokenKind::Function));
    assert_eq!(t.lookup(b"operator"), Some(TokenKind::Operator));
    assert_eq!(t.lookup(b"using"), Some(TokenKind::Using));
    assert_eq!(t.lookup(b"nameof"), Some(TokenKind::Nameof));
}

#[test]
fn dialect_rows_are_in_table_order() {
    let texts: Vec<_> = Dialect::Extended
        .keywords()
        .dialect_words()
        .iter()
        .map(|w| w.text)
        .collect();
    assert_eq!(
        texts,
        ["function", "end", "fn", "operator", "using", "nameof"]
    );
}

#[test]
fn near_misses_are_identifiers() {
    let t = Dialect::Classic.keywords();
    for text in ["And", "iff", "functions", "en", "", "returns", "whil"] {
        assert_eq!(t.lookup(text.as_bytes()), None, "{text:?}");
    }
}

#[test]
fn mode_numbers_round_trip() {
    for dialect in Dialect::ALL {
        assert_eq!(Dialect::from_mode(dialect.mode()), Some(dialect));
        assert_eq!(Dialect::from_name(dialect.name()), Some(dialect));
    }
    assert_eq!(Dialect::from_mode(2), None);
    assert_eq!(Dialect::from_mode(-1), None);
}

#[test]
fn identifier_validity_depends_on_dialect() {
    let classic = Dialect::Classic.keywords();
    let extended = Dialect::Extended.keywords();
    assert!(!classic.is_valid_identifier(b"end"));
    assert!(extended.is_valid_identifier(b"end"));
    assert!(classic.is_valid_identifier(b"fn"));
    assert!(!extended.is_valid_identifier(b"fn"));
    assert!(!classic.is_valid_identifier(b"__LRop_add"));
    assert!(!classic.is_valid_identifier(b"1abc"));
    assert!(classic.is_valid_identifier(b"_x1"));
}
