//! Scanner error types.
//!
//! A `LexError` carries the four pieces of a Lua-style diagnostic: the
//! chunk's short name, the line, the message, and the text of the token the
//! scanner was looking at. Rendering follows the familiar
//! `chunk:line: message near 'token'` shape.

use std::fmt;

/// A lexical error, ready to be shown to the user.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{chunk}:{line}: {kind}{}", NearClause(.near))]
pub struct LexError {
    /// Kind of failure; its `Display` is the message.
    pub kind: LexErrorKind,
    /// Line the error is reported on.
    pub line: u32,
    /// Short display name of the chunk.
    pub chunk: String,
    /// Token or literal text at the point of error.
    pub near: Option<String>,
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, chunk: impl Into<String>, line: u32) -> Self {
        LexError {
            kind,
            line,
            chunk: chunk.into(),
            near: None,
        }
    }

    #[must_use]
    pub fn with_near(mut self, near: impl Into<String>) -> Self {
        self.near = Some(near.into());
        self
    }
}

struct NearClause<'a>(&'a Option<String>);

impl fmt::Display for NearClause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(near) => write!(f, " near '{near}'"),
            None => Ok(()),
        }
    }
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    // === Limits ===
    #[error("chunk has too many lines")]
    TooManyLines,
    #[error("chunk has too many syntax levels")]
    TooManySyntaxLevels,
    /// The string interner ran out of room for another name or string.
    #[error("too many distinct names and strings ({message})")]
    TooManyStrings { message: String },

    // === Literals ===
    #[error("malformed number")]
    MalformedNumber,
    #[error("unfinished string")]
    UnfinishedString,
    #[error("unfinished long string (starting at line {start_line})")]
    UnfinishedLongString { start_line: u32 },
    #[error("unfinished long comment (starting at line {start_line})")]
    UnfinishedLongComment { start_line: u32 },
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("invalid long string delimiter")]
    InvalidLongStringDelimiter,
    #[error("unexpected character")]
    UnexpectedCharacter { byte: u8 },

    // === Symbols ===
    /// A user identifier begins with one of the mangling headers.
    #[error("identifier uses a reserved mangling prefix")]
    ReservedPrefix,
    #[error("{what} expected")]
    SymbolExpected { what: &'static str },
    /// A substitution was requested for a number, string or end of input.
    #[error("cannot substitute this token")]
    InvalidSubstitutionTarget,

    // === Chunk routing ===
    #[error("attempt to load a binary chunk (mode is '{mode}')")]
    BinaryNotPermitted { mode: String },
    #[error("attempt to load a text chunk (mode is '{mode}')")]
    TextNotPermitted { mode: String },
    #[error("bytecode signature after a header line")]
    BytecodeAfterHeader,
    #[error("cannot read chunk: {message}")]
    ReadFailed { message: String },
}

/// The requested syntax mode is not a known dialect.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("number out of range: syntax mode {0}")]
pub struct ModeRangeError(pub i32);

#[cfg(test)]
mod tests;
