//! The process-wide syntax mode.
//!
//! Kept in its own test binary, as a single test, because every check here
//! mutates global state.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use luar_ir::{StringInterner, TokenKind};
use luar_lexer::{
    get_syntax_autoselect, get_syntax_mode, set_syntax_autoselect, set_syntax_mode, setup,
    syntax_mode, Chunk, ModeRangeError, ScanOptions, Scanner,
};
use luar_lexer_core::SliceReader;
use pretty_assertions::assert_eq;

const DIALECT_WORDS: [&str; 6] = ["function", "end", "fn", "operator", "using", "nameof"];

fn scan<'a>(src: &'a str, interner: &'a StringInterner) -> Scanner<'a, SliceReader<'a>> {
    match setup(SliceReader::new(src.as_bytes()), ScanOptions::new("=g"), interner) {
        Ok(Chunk::Text(scanner)) => scanner,
        _ => panic!("expected a text chunk"),
    }
}

fn first_kind(src: &str) -> TokenKind {
    let interner = StringInterner::new();
    scan(src, &interner).next().unwrap().kind
}

fn reserved_words() -> Vec<(&'static str, Option<TokenKind>)> {
    let table = syntax_mode::global().keyword_table();
    DIALECT_WORDS
        .iter()
        .map(|&w| (w, table.lookup(w.as_bytes())))
        .collect()
}

#[test]
fn global_syntax_mode() {
    // Defaults.
    assert_eq!(get_syntax_mode(), 0);
    assert!(!get_syntax_autoselect());

    let classic = vec![
        ("function", Some(TokenKind::Function)),
        ("end", Some(TokenKind::End)),
        ("fn", None),
        ("operator", None),
        ("using", None),
        ("nameof", None),
    ];
    let extended = vec![
        ("function", None),
        ("end", None),
        ("fn", Some(TokenKind::Function)),
        ("operator", Some(TokenKind::Operator)),
        ("using", Some(TokenKind::Using)),
        ("nameof", Some(TokenKind::Nameof)),
    ];
    assert_eq!(reserved_words(), classic);

    // Exactly the extended column after switching.
    set_syntax_mode(1).unwrap();
    assert_eq!(reserved_words(), extended);
    assert_eq!(first_kind("fn"), TokenKind::Function);

    // Switching back restores the original table.
    set_syntax_mode(0).unwrap();
    assert_eq!(reserved_words(), classic);
    set_syntax_mode(1).unwrap();
    set_syntax_mode(0).unwrap();
    assert_eq!(reserved_words(), classic);
    assert_eq!(first_kind("function"), TokenKind::Function);

    // Out-of-range modes leave the state alone.
    set_syntax_mode(1).unwrap();
    assert_eq!(set_syntax_mode(2), Err(ModeRangeError(2)));
    assert_eq!(get_syntax_mode(), 1);

    // A scanner keeps the keywords it started with.
    let interner = StringInterner::new();
    let mut early = scan("end end", &interner);
    assert_eq!(early.next().unwrap().kind, TokenKind::Name(interner.intern_str("end")));
    set_syntax_mode(0).unwrap();
    assert_eq!(early.next().unwrap().kind, TokenKind::Name(interner.intern_str("end")));
    assert_eq!(first_kind("end"), TokenKind::End);

    // Autoselect is stored and nothing else.
    set_syntax_autoselect(true);
    assert!(get_syntax_autoselect());
    assert_eq!(reserved_words(), classic);
    set_syntax_autoselect(false);
    assert!(!get_syntax_autoselect());
}
