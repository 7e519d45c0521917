use super::*;

#[test]
fn interning_is_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern(b"hello");
    let b = interner.intern(b"hello");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), b"hello");
}

#[test]
fn distinct_contents_get_distinct_names() {
    let interner = StringInterner::new();
    let a = interner.intern(b"foo");
    let b = interner.intern(b"bar");
    assert_ne!(a, b);
}

#[test]
fn empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(b""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), b"");
}

#[test]
fn non_utf8_bytes_round_trip() {
    let interner = StringInterner::new();
    let name = interner.intern(&[0xFF, 0x00, 0x80]);
    assert_eq!(interner.lookup(name), &[0xFF, 0x00, 0x80]);
    assert_eq!(interner.lookup_lossy(name), "\u{FFFD}\u{0}\u{FFFD}");
}

#[test]
fn new_interner_holds_only_the_empty_string() {
    let interner = StringInterner::new();
    assert_eq!(interner.len(), 1);
    assert!(interner.is_empty());
    interner.intern_str("function");
    assert_eq!(interner.len(), 2);
    assert!(!interner.is_empty());
}

#[test]
fn len_counts_new_entries_once() {
    let interner = StringInterner::new();
    let before = interner.len();
    interner.intern_str("fresh_identifier");
    interner.intern_str("fresh_identifier");
    assert_eq!(interner.len(), before + 1);
}
