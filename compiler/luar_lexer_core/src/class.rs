//! Byte classification for the scanner.
//!
//! A 256-entry table of class bits, built at compile time. Bytes `>= 0x80`
//! count as identifier characters so UTF-8 names scan as a single run.

const CNTRL: u8 = 1 << 0;
const SPACE: u8 = 1 << 1;
const DIGIT: u8 = 1 << 2;
const ALPHA: u8 = 1 << 3;
const IDENT: u8 = 1 << 4;
const OPER: u8 = 1 << 5;

/// Characters that may form a mangled operator symbol.
const OPERATOR_CHARS: &[u8] = b"+-*/%^<>=~!&|?@$:.#\\";

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        #[expect(clippy::cast_possible_truncation, reason = "i < 256")]
        let b = i as u8;
        let mut bits = 0;
        if b < 0x20 || b == 0x7F {
            bits |= CNTRL;
        }
        if matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r') {
            bits |= SPACE;
        }
        if b.is_ascii_digit() {
            bits |= DIGIT | IDENT;
        }
        if b.is_ascii_alphabetic() || b == b'_' || b >= 0x80 {
            bits |= ALPHA | IDENT;
        }
        let mut k = 0;
        while k < OPERATOR_CHARS.len() {
            if OPERATOR_CHARS[k] == b {
                bits |= OPER;
            }
            k += 1;
        }
        table[i] = bits;
        i += 1;
    }
    table
}

static TABLE: [u8; 256] = build_table();

#[inline]
fn has(b: u8, bits: u8) -> bool {
    TABLE[b as usize] & bits != 0
}

/// ASCII control byte (0x00-0x1F, 0x7F).
#[inline]
pub fn is_cntrl(b: u8) -> bool {
    has(b, CNTRL)
}

/// Whitespace, including both line-break bytes.
#[inline]
pub fn is_space(b: u8) -> bool {
    has(b, SPACE)
}

/// Line-break byte (`\n` or `\r`).
#[inline]
pub fn is_eol(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

#[inline]
pub fn is_digit(b: u8) -> bool {
    has(b, DIGIT)
}

/// Can start an identifier: letter, `_`, or a non-ASCII byte.
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    has(b, ALPHA)
}

/// Can continue an identifier.
#[inline]
pub fn is_ident(b: u8) -> bool {
    has(b, IDENT)
}

/// Can appear in a mangled operator symbol.
#[inline]
pub fn is_operator(b: u8) -> bool {
    has(b, OPER)
}

/// Does `text` have the shape of an identifier (ignoring reserved words)?
pub fn is_identifier_shape(text: &[u8]) -> bool {
    match text.split_first() {
        Some((&first, rest)) => is_ident_start(first) && rest.iter().all(|&b| is_ident(b)),
        None => false,
    }
}
