use super::*;
use pretty_assertions::assert_eq;

#[test]
fn operator_uses_op_header() {
    assert_eq!(mangle_str(MangleKind::Operator, "+").as_deref(), Some("__LRop_+"));
}

#[test]
fn field_read_shares_op_header() {
    assert_eq!(
        mangle_str(MangleKind::FieldRead, "foo").as_deref(),
        Some("__LRop_foo")
    );
}

#[test]
fn field_write_uses_aop_header() {
    assert_eq!(
        mangle_str(MangleKind::FieldWrite, "foo").as_deref(),
        Some("__LRaop_foo")
    );
}

#[test]
fn var_name_uses_vop_header() {
    assert_eq!(
        mangle_str(MangleKind::VarName, "cross").as_deref(),
        Some("__LRvop_cross")
    );
}

#[test]
fn none_and_unknown_do_not_mangle() {
    assert_eq!(mangle(MangleKind::None, b"x"), None);
    assert_eq!(mangle(MangleKind::Unknown, b"x"), None);
}

#[test]
fn byte_and_str_forms_agree() {
    let bytes = mangle(MangleKind::FieldWrite, b"<=>");
    let text = mangle_str(MangleKind::FieldWrite, "<=>").map(String::into_bytes);
    assert_eq!(bytes, text);
}

#[test]
fn headers_are_not_prefixes_of_each_other() {
    for a in HEADERS {
        for b in HEADERS {
            if a != b {
                assert!(!a.starts_with(b), "{a} starts with {b}");
            }
        }
    }
}

#[test]
fn header_detection() {
    assert!(has_mangling_header(b"__LRop_+"));
    assert!(has_mangling_header(b"__LRaop_x"));
    assert!(has_mangling_header(b"__LRvop_"));
    assert!(!has_mangling_header(b"__LRo"));
    assert!(!has_mangling_header(b"_LRop_"));
    assert!(!has_mangling_header(b"plain"));
}

#[test]
fn demangle_recovers_kind_and_symbol() {
    assert_eq!(
        demangle(b"__LRop_..").map(|(k, s)| (k, s.to_vec())),
        Some((MangleKind::Operator, b"..".to_vec()))
    );
    assert_eq!(
        demangle(b"__LRaop_idx").map(|(k, s)| (k, s.to_vec())),
        Some((MangleKind::FieldWrite, b"idx".to_vec()))
    );
    assert_eq!(
        demangle(b"__LRvop_dot").map(|(k, s)| (k, s.to_vec())),
        Some((MangleKind::VarName, b"dot".to_vec()))
    );
    assert_eq!(demangle(b"regular"), None);
}

#[test]
fn kind_names_parse() {
    assert_eq!(MangleKind::from_name("operator"), Some(MangleKind::Operator));
    assert_eq!(MangleKind::from_name("field-write"), Some(MangleKind::FieldWrite));
    assert_eq!(MangleKind::from_name("newindex"), Some(MangleKind::FieldWrite));
    assert_eq!(MangleKind::from_name("vname"), Some(MangleKind::VarName));
    assert_eq!(MangleKind::from_name("bogus"), None);
}

mod properties {
    use super::super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mangling_is_deterministic(symbol in "[-+*/%^<>=~!&|?@$:.#a-z_]{1,8}") {
            for kind in [MangleKind::Operator, MangleKind::FieldRead, MangleKind::FieldWrite, MangleKind::VarName] {
                prop_assert_eq!(mangle_str(kind, &symbol), mangle_str(kind, &symbol));
            }
        }

        #[test]
        fn distinct_symbols_never_collide(a in "[-+*/<>=~a-z]{1,6}", b in "[-+*/<>=~a-z]{1,6}") {
            prop_assume!(a != b);
            prop_assert_ne!(
                mangle_str(MangleKind::Operator, &a),
                mangle_str(MangleKind::Operator, &b)
            );
        }

        #[test]
        fn different_headers_never_collide(a in "[-+*a-z]{0,6}", b in "[-+*a-z]{0,6}") {
            prop_assert_ne!(
                mangle_str(MangleKind::Operator, &a),
                mangle_str(MangleKind::FieldWrite, &b)
            );
            prop_assert_ne!(
                mangle_str(MangleKind::FieldWrite, &a),
                mangle_str(MangleKind::VarName, &b)
            );
        }
    }
}
