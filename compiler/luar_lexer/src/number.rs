//! Numeric literal decoding.
//!
//! The scanner first collects the maximal numeric run (identifier bytes,
//! `.`, and a sign right after an exponent letter) and hands the whole text
//! here. Anything that is not exactly one well-formed literal is rejected,
//! so `3x`, `1..2` and `0x` all come back as `None`.
//!
//! Accepted forms:
//! - decimal `12`, `1.5`, `.5`, `3.`, `1e10`, `2.5E-3`
//! - hexadecimal `0xff`, `0x1.8p3`, `0x.1P-2`
//! - integer suffixes `LL` / `ULL` (any case) on integer forms
//! - imaginary suffix `i` on any form

use luar_ir::NumberLit;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Suffix {
    None,
    Int64,
    UInt64,
    Imaginary,
}

pub(crate) fn parse_number(text: &[u8]) -> Option<NumberLit> {
    let (body, suffix) = split_suffix(text);
    let hex = body.len() > 1 && body[0] == b'0' && matches!(body[1], b'x' | b'X');
    match suffix {
        Suffix::Int64 | Suffix::UInt64 => {
            let bits = if hex {
                parse_hex_int(&body[2..])?
            } else {
                parse_dec_int(body)?
            };
            Some(if suffix == Suffix::Int64 {
                NumberLit::Int64(i64::from_ne_bytes(bits.to_ne_bytes()))
            } else {
                NumberLit::UInt64(bits)
            })
        }
        Suffix::None | Suffix::Imaginary => {
            let value = if hex {
                parse_hex_float(&body[2..])?
            } else {
                parse_dec_float(body)?
            };
            Some(if suffix == Suffix::Imaginary {
                NumberLit::imaginary(value)
            } else {
                NumberLit::num(value)
            })
        }
    }
}

fn split_suffix(text: &[u8]) -> (&[u8], Suffix) {
    let lower = |i: usize| text[text.len() - i].to_ascii_lowercase();
    let n = text.len();
    if n > 3 && lower(3) == b'u' && lower(2) == b'l' && lower(1) == b'l' {
        (&text[..n - 3], Suffix::UInt64)
    } else if n > 2 && lower(2) == b'l' && lower(1) == b'l' {
        (&text[..n - 2], Suffix::Int64)
    } else if n > 1 && lower(1) == b'i' {
        (&text[..n - 1], Suffix::Imaginary)
    } else {
        (text, Suffix::None)
    }
}

fn parse_dec_int(digits: &[u8]) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    digits.iter().try_fold(0u64, |acc, &b| {
        let d = (b as char).to_digit(10)?;
        acc.checked_mul(10)?.checked_add(u64::from(d))
    })
}

fn parse_hex_int(digits: &[u8]) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    digits.iter().try_fold(0u64, |acc, &b| {
        let d = (b as char).to_digit(16)?;
        if acc >> 60 != 0 {
            return None;
        }
        Some((acc << 4) | u64::from(d))
    })
}

/// Validate decimal float syntax, then let the standard parser round it.
fn parse_dec_float(text: &[u8]) -> Option<f64> {
    let mut i = 0;
    let mut mantissa_digits = 0;
    while i < text.len() && text[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < text.len() && text[i] == b'.' {
        i += 1;
        while i < text.len() && text[i].is_ascii_digit() {
            i += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }
    if i < text.len() && matches!(text[i], b'e' | b'E') {
        i = skip_exponent(text, i + 1)?;
    }
    if i != text.len() {
        return None;
    }
    std::str::from_utf8(text).ok()?.parse().ok()
}

/// Skip an exponent's optional sign and mandatory digits.
fn skip_exponent(text: &[u8], mut i: usize) -> Option<usize> {
    if i < text.len() && matches!(text[i], b'+' | b'-') {
        i += 1;
    }
    let start = i;
    while i < text.len() && text[i].is_ascii_digit() {
        i += 1;
    }
    (i > start).then_some(i)
}

fn parse_hex_float(text: &[u8]) -> Option<f64> {
    let mut mantissa: u64 = 0;
    let mut exp: i64 = 0;
    let mut digits = 0;
    let mut seen_dot = false;
    let mut i = 0;
    while i < text.len() {
        let b = text[i];
        if b == b'.' {
            if seen_dot {
                return None;
            }
            seen_dot = true;
        } else if let Some(d) = (b as char).to_digit(16) {
            digits += 1;
            if mantissa >> 56 == 0 {
                mantissa = (mantissa << 4) | u64::from(d);
                if seen_dot {
                    exp -= 4;
                }
            } else if !seen_dot {
                // Digits beyond the mantissa's precision only scale it.
                exp += 4;
            }
        } else {
            break;
        }
        i += 1;
    }
    if digits == 0 {
        return None;
    }
    if i < text.len() {
        if !matches!(text[i], b'p' | b'P') {
            return None;
        }
        let start = i + 1;
        let end = skip_exponent(text, start)?;
        if end != text.len() {
            return None;
        }
        exp += parse_exponent(&text[start..end]);
    }
    Some(scale(mantissa, exp))
}

/// Parse a signed decimal exponent, saturating far outside the `f64` range.
fn parse_exponent(text: &[u8]) -> i64 {
    let (negative, digits) = match text.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, text),
    };
    let magnitude = digits
        .iter()
        .fold(0i64, |acc, &b| (acc * 10 + i64::from(b - b'0')).min(100_000));
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "mantissa holds at most 60 significant bits, rounding is the intent"
)]
#[expect(clippy::cast_possible_truncation, reason = "exponent clamped to i32 range")]
fn scale(mantissa: u64, exp: i64) -> f64 {
    if mantissa == 0 {
        return 0.0;
    }
    let exp = exp.clamp(-4000, 4000) as i32;
    // Two steps so that neither factor overflows on its own.
    let half = exp / 2;
    mantissa as f64 * 2f64.powi(half) * 2f64.powi(exp - half)
}
