//! Reserved-word tables, one per syntax dialect.
//!
//! Most reserved words mean the same thing in every dialect and are found
//! through a length-bucketed match. The few words whose status depends on
//! the dialect live in [`DIALECT_WORDS`]; each dialect's [`KeywordTable`]
//! is built from that one row set at compile time, so the two tables can
//! never disagree about which words exist.
//!
//! | word       | classic    | extended   |
//! |------------|------------|------------|
//! | `function` | `function` | identifier |
//! | `end`      | `end`      | identifier |
//! | `fn`       | identifier | `function` |
//! | `operator` | identifier | `operator` |
//! | `using`    | identifier | `using`    |
//! | `nameof`   | identifier | `nameof`   |

use std::fmt;

use luar_ir::{mangle, TokenKind};
use luar_lexer_core::class;

/// Keyword-set variant selectable at run time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dialect {
    /// Stock Lua keywords.
    #[default]
    Classic = 0,
    /// `fn` replaces `function`, `end` is free, operator definitions enabled.
    Extended = 1,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Classic, Dialect::Extended];

    /// Dialect for a numeric syntax mode.
    pub const fn from_mode(mode: i32) -> Option<Self> {
        match mode {
            0 => Some(Dialect::Classic),
            1 => Some(Dialect::Extended),
            _ => None,
        }
    }

    /// Numeric syntax mode of this dialect.
    pub const fn mode(self) -> i32 {
        self as i32
    }

    pub const fn name(self) -> &'static str {
        match self {
            Dialect::Classic => "classic",
            Dialect::Extended => "extended",
        }
    }

    /// Parse a dialect from its name or numeric mode.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" | "0" => Some(Dialect::Classic),
            "extended" | "1" => Some(Dialect::Extended),
            _ => None,
        }
    }

    /// The immutable keyword table for this dialect.
    pub fn keywords(self) -> &'static KeywordTable {
        match self {
            Dialect::Classic => &CLASSIC,
            Dialect::Extended => &EXTENDED,
        }
    }

    const fn column(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Words whose keyword status depends on the dialect, with the token each
/// dialect gives them (`None`: plain identifier).
const DIALECT_WORDS: [(&str, [Option<TokenKind>; 2]); 6] = [
    ("function", [Some(TokenKind::Function), None]),
    ("end", [Some(TokenKind::End), None]),
    ("fn", [None, Some(TokenKind::Function)]),
    ("operator", [None, Some(TokenKind::Operator)]),
    ("using", [None, Some(TokenKind::Using)]),
    ("nameof", [None, Some(TokenKind::Nameof)]),
];

/// Status of one dialect-sensitive word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReservedWord {
    pub text: &'static str,
    pub token: Option<TokenKind>,
}

/// Keyword table for one dialect.
#[derive(Debug)]
pub struct KeywordTable {
    dialect: Dialect,
    words: [ReservedWord; DIALECT_WORDS.len()],
}

static CLASSIC: KeywordTable = KeywordTable::build(Dialect::Classic);
static EXTENDED: KeywordTable = KeywordTable::build(Dialect::Extended);

impl KeywordTable {
    const fn build(dialect: Dialect) -> Self {
        let mut words = [ReservedWord {
            text: "",
            token: None,
        }; DIALECT_WORDS.len()];
        let mut i = 0;
        while i < DIALECT_WORDS.len() {
            let (text, tokens) = DIALECT_WORDS[i];
            words[i] = ReservedWord {
                text,
                token: tokens[dialect.column()],
            };
            i += 1;
        }
        KeywordTable { dialect, words }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The dialect-sensitive rows, in table order.
    pub fn dialect_words(&self) -> &[ReservedWord] {
        &self.words
    }

    /// Resolve `text` to a reserved-word token, `None` for identifiers.
    #[inline]
    pub fn lookup(&self, text: &[u8]) -> Option<TokenKind> {
        common_lookup(text).or_else(|| {
            self.words
                .iter()
                .find(|w| w.text.as_bytes() == text)
                .and_then(|w| w.token)
        })
    }

    pub fn is_reserved(&self, text: &[u8]) -> bool {
        self.lookup(text).is_some()
    }

    /// Could `text` be written as a plain identifier in this dialect?
    ///
    /// It must have identifier shape, must not be reserved, and must not
    /// start with a mangling header.
    pub fn is_valid_identifier(&self, text: &[u8]) -> bool {
        class::is_identifier_shape(text)
            && !self.is_reserved(text)
            && !mangle::has_mangling_header(text)
    }
}

/// Reserved words shared by all dialects.
///
/// Uses length-bucketing for fast rejection: all shared words are 2-6
/// bytes long.
#[inline]
fn common_lookup(text: &[u8]) -> Option<TokenKind> {
    if !(2..=6).contains(&text.len()) {
        return None;
    }
    match text.len() {
        2 => match text {
            b"do" => Some(TokenKind::Do),
            b"if" => Some(TokenKind::If),
            b"in" => Some(TokenKind::In),
            b"or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            b"and" => Some(TokenKind::And),
            b"for" => Some(TokenKind::For),
            b"nil" => Some(TokenKind::Nil),
            b"not" => Some(TokenKind::Not),
            _ => None,
        },
        4 => match text {
            b"else" => Some(TokenKind::Else),
            b"goto" => Some(TokenKind::Goto),
            b"then" => Some(TokenKind::Then),
            b"true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            b"break" => Some(TokenKind::Break),
            b"false" => Some(TokenKind::False),
            b"local" => Some(TokenKind::Local),
            b"until" => Some(TokenKind::Until),
            b"while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            b"elseif" => Some(TokenKind::Elseif),
            b"repeat" => Some(TokenKind::Repeat),
            b"return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
