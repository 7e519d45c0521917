//! Escape sequence helpers for string literals.
//!
//! The scanner drives the escape grammar itself (it has to count newlines
//! inside `\z` and `\<newline>`); this module holds the pieces that need no
//! input: single-byte escapes, hex digits and UTF-8 encoding for `\u{...}`.

/// Largest code point accepted by `\u{...}`.
pub(crate) const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Resolve a single-letter escape to its byte.
///
/// Recognized escapes: `\a`, `\b`, `\f`, `\n`, `\r`, `\t`, `\v`, `\\`,
/// `\"`, `\'`
#[inline]
pub(crate) fn resolve_escape(c: u8) -> Option<u8> {
    match c {
        b'a' => Some(0x07),
        b'b' => Some(0x08),
        b'f' => Some(0x0C),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'v' => Some(0x0B),
        b'\\' | b'"' | b'\'' => Some(c),
        _ => None,
    }
}

#[inline]
pub(crate) fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Append the UTF-8 encoding of `cp`.
///
/// Surrogate code points are encoded like any other three-byte value, so
/// every `cp <= MAX_CODE_POINT` produces output.
#[expect(clippy::cast_possible_truncation, reason = "each byte masked to 8 bits")]
pub(crate) fn push_utf8(buf: &mut Vec<u8>, cp: u32) {
    debug_assert!(cp <= MAX_CODE_POINT);
    if cp < 0x80 {
        buf.push(cp as u8);
    } else if cp < 0x800 {
        buf.push(0xC0 | (cp >> 6) as u8);
        buf.push(0x80 | (cp & 0x3F) as u8);
    } else if cp < 0x1_0000 {
        buf.push(0xE0 | (cp >> 12) as u8);
        buf.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        buf.push(0x80 | (cp & 0x3F) as u8);
    } else {
        buf.push(0xF0 | (cp >> 18) as u8);
        buf.push(0x80 | ((cp >> 12) & 0x3F) as u8);
        buf.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        buf.push(0x80 | (cp & 0x3F) as u8);
    }
}
