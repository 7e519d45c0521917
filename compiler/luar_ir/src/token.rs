//! Token types for the Luar scanner.
//!
//! One `TokenKind` value describes a token completely: reserved words and
//! operators are plain tags, literal classes carry their decoded value.
//! Everything is `Copy` so the scanner can hold the current token and a
//! buffered lookahead without cloning.

use super::Name;
use std::borrow::Cow;
use std::fmt;

/// A token together with the line it started on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, line: u32) -> Self {
        Token { kind, line }
    }
}

/// Opaque handle to a runtime value owned by the parsing collaborator.
///
/// The scanner never looks inside; it only carries the handle from a
/// substitution request to the token that answers it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ValueRef(u32);

impl ValueRef {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        ValueRef(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Base/key pair for the `=~` substituted-value construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Substitution {
    pub base: ValueRef,
    pub key: ValueRef,
}

/// Decoded numeric literal.
///
/// Floating values are stored as bits so the type stays `Eq + Hash`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberLit {
    /// Plain Lua number (IEEE double): `42`, `0x1p4`, `.5e-3`.
    Num(u64),
    /// Signed 64-bit integer literal: `42LL`.
    Int64(i64),
    /// Unsigned 64-bit integer literal: `42ULL`.
    UInt64(u64),
    /// Imaginary literal: `12.5i`.
    Imaginary(u64),
}

impl NumberLit {
    #[inline]
    pub fn num(value: f64) -> Self {
        NumberLit::Num(value.to_bits())
    }

    #[inline]
    pub fn imaginary(value: f64) -> Self {
        NumberLit::Imaginary(value.to_bits())
    }
}

impl fmt::Debug for NumberLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberLit::Num(bits) => write!(f, "Num({})", f64::from_bits(*bits)),
            NumberLit::Int64(v) => write!(f, "Int64({v})"),
            NumberLit::UInt64(v) => write!(f, "UInt64({v})"),
            NumberLit::Imaginary(bits) => write!(f, "Imaginary({})", f64::from_bits(*bits)),
        }
    }
}

impl fmt::Display for NumberLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberLit::Num(bits) => write!(f, "{}", f64::from_bits(*bits)),
            NumberLit::Int64(v) => write!(f, "{v}LL"),
            NumberLit::UInt64(v) => write!(f, "{v}ULL"),
            NumberLit::Imaginary(bits) => write!(f, "{}i", f64::from_bits(*bits)),
        }
    }
}

/// Token kinds for Luar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Reserved words. `fn` has no tag of its own: in the extended dialect
    // it resolves to `Function`.
    And,
    Break,
    Do,
    Else,
    Elseif,
    End,
    False,
    For,
    Function,
    Goto,
    If,
    In,
    Local,
    Nil,
    Not,
    Or,
    Repeat,
    Return,
    Then,
    True,
    Until,
    While,
    Operator,
    Using,
    Nameof,

    // Multi-character operators
    /// `^^`
    Pow,
    /// `..`
    Concat,
    /// `...`
    Dots,
    /// `==`
    Eq,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `~=`
    Ne,
    /// `=~`
    Subs,
    /// `::`
    Label,

    // Literal classes
    Number(NumberLit),
    Name(Name),
    String(Name),
    /// Symbol resolved against an externally supplied base/key pair.
    Substituted {
        subst: Substitution,
        symbol: Name,
    },
    /// Mangled operator symbol (`__LRop_...`).
    Oper(Name),
    /// Mangled field operator symbol (`__LRop_...` or `__LRaop_...`).
    FieldOper(Name),
    Eof,

    /// Any other single punctuation byte: `+`, `(`, `#`, ...
    Char(u8),
}

impl TokenKind {
    /// Human-readable text for diagnostics.
    ///
    /// Reserved words and operators print as written; literal classes print
    /// a `<placeholder>`; control bytes print as `char(N)`.
    pub fn text(&self) -> Cow<'static, str> {
        let s = match self {
            TokenKind::And => "and",
            TokenKind::Break => "break",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::Elseif => "elseif",
            TokenKind::End => "end",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::Goto => "goto",
            TokenKind::If => "if",
            TokenKind::In => "in",
            TokenKind::Local => "local",
            TokenKind::Nil => "nil",
            TokenKind::Not => "not",
            TokenKind::Or => "or",
            TokenKind::Repeat => "repeat",
            TokenKind::Return => "return",
            TokenKind::Then => "then",
            TokenKind::True => "true",
            TokenKind::Until => "until",
            TokenKind::While => "while",
            TokenKind::Operator => "operator",
            TokenKind::Using => "using",
            TokenKind::Nameof => "nameof",
            TokenKind::Pow => "^^",
            TokenKind::Concat => "..",
            TokenKind::Dots => "...",
            TokenKind::Eq => "==",
            TokenKind::Ge => ">=",
            TokenKind::Le => "<=",
            TokenKind::Ne => "~=",
            TokenKind::Subs => "=~",
            TokenKind::Label => "::",
            TokenKind::Number(_) => "<number>",
            TokenKind::Name(_) => "<name>",
            TokenKind::String(_) => "<string>",
            TokenKind::Substituted { .. } => "<substituted value>",
            TokenKind::Oper(_) => "<operator>",
            TokenKind::FieldOper(_) => "<field operator>",
            TokenKind::Eof => "<eof>",
            TokenKind::Char(c) if c.is_ascii_control() => {
                return Cow::Owned(format!("char({c})"));
            }
            TokenKind::Char(c) => return Cow::Owned(char::from(*c).to_string()),
        };
        Cow::Borrowed(s)
    }

    /// Reserved word tag?
    pub fn is_reserved_word(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Break
                | TokenKind::Do
                | TokenKind::Else
                | TokenKind::Elseif
                | TokenKind::End
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Function
                | TokenKind::Goto
                | TokenKind::If
                | TokenKind::In
                | TokenKind::Local
                | TokenKind::Nil
                | TokenKind::Not
                | TokenKind::Or
                | TokenKind::Repeat
                | TokenKind::Return
                | TokenKind::Then
                | TokenKind::True
                | TokenKind::Until
                | TokenKind::While
                | TokenKind::Operator
                | TokenKind::Using
                | TokenKind::Nameof
        )
    }

    /// Literal class whose diagnostic text comes from the scanned source.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Number(_) | TokenKind::Name(_) | TokenKind::String(_)
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
