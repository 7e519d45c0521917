//! Scanner for Luar, a Lua dialect with user-definable operators.
//!
//! The scanner is pull-based: a parser asks for one token at a time and the
//! scanner pulls input from a [`Reader`](luar_lexer_core::Reader) only as
//! needed.
//!
//! # Usage
//!
//! ```
//! use luar_ir::{StringInterner, TokenKind};
//! use luar_lexer::{setup, Chunk, ScanOptions};
//! use luar_lexer_core::SliceReader;
//!
//! let interner = StringInterner::new();
//! let options = ScanOptions::new("=demo");
//! let Ok(Chunk::Text(mut scanner)) = setup(SliceReader::new(b"return x"), options, &interner)
//! else {
//!     unreachable!()
//! };
//! assert_eq!(scanner.next().map(|t| t.kind), Ok(TokenKind::Return));
//! ```
//!
//! # Dialects
//!
//! Two keyword sets exist ([`Dialect`]). The process-wide
//! [`syntax_mode`] controller picks the default for new scanners; a scanner
//! keeps the keyword table it started with.

mod chunk_name;
mod escape;
pub mod keywords;
mod lex_error;
mod load_mode;
mod number;
mod scanner;
pub mod syntax_mode;

pub use chunk_name::{ChunkName, ID_SIZE};
pub use keywords::{Dialect, KeywordTable, ReservedWord};
pub use lex_error::{LexError, LexErrorKind, ModeRangeError};
pub use load_mode::LoadMode;
pub use scanner::{
    setup, BytecodeInput, Chunk, NextRequest, ScanOptions, Scanner, BYTECODE_SIGNATURE,
    MAX_LEVEL, MAX_LINE,
};
pub use syntax_mode::{
    get_syntax_autoselect, get_syntax_mode, set_syntax_autoselect, set_syntax_mode,
    SyntaxModeController,
};

use std::borrow::Cow;

use luar_ir::TokenKind;

/// Diagnostic text for a token, independent of any scanner.
///
/// Literal classes print as `<number>`, `<name>` and so on; control bytes
/// print as `char(N)`.
pub fn token_to_string(kind: TokenKind) -> Cow<'static, str> {
    kind.text()
}
