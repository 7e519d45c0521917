//! Pull-based scanner.
//!
//! The parser drives the scanner one token at a time. Input arrives in
//! chunks from a [`Reader`]; the scanner never holds more than one chunk and
//! never reads ahead of what the current token (plus at most one lookahead
//! token) needs.
//!
//! # Architecture
//!
//! ```text
//! Reader → ByteStream → Scanner::scan → Token
//!                                 ↑
//!                       NextRequest (plain / substitute / mangle)
//! ```
//!
//! [`setup`] inspects the first bytes and routes the chunk: source text gets
//! a [`Scanner`], precompiled bytecode gets a [`BytecodeInput`] for an
//! external loader. Each scanner captures the keyword table of its dialect
//! at setup and keeps it until the chunk is done.
//!
//! # Requests
//!
//! A [`NextRequest`] is an argument of [`Scanner::next_with`], not scanner
//! state, so it can never outlive the call that made it. A request that
//! arrives while a lookahead token is buffered is applied to that token
//! without scanning again.

use std::borrow::Cow;
use std::io;

use luar_ir::{
    mangle, CompileScratch, InternError, MangleKind, Name, StringInterner, Substitution, Token,
    TokenKind,
};
use luar_lexer_core::{class, ByteStream, Reader};
use tracing::{debug, trace};

use crate::chunk_name::ChunkName;
use crate::keywords::{Dialect, KeywordTable};
use crate::load_mode::LoadMode;
use crate::number::parse_number;
use crate::{syntax_mode, LexError, LexErrorKind};

mod strings;

/// Highest line number a chunk may reach.
pub const MAX_LINE: u32 = 0x7FFF_FF00;

/// Bound on the syntax nesting counter.
pub const MAX_LEVEL: u32 = 200;

/// First byte of a precompiled chunk.
pub const BYTECODE_SIGNATURE: u8 = 0x1B;

const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Per-chunk scanner configuration.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    chunk_name: ChunkName,
    mode: Option<String>,
    dialect: Option<Dialect>,
}

impl ScanOptions {
    pub fn new(chunk_name: impl Into<String>) -> Self {
        ScanOptions {
            chunk_name: ChunkName::new(chunk_name),
            mode: None,
            dialect: None,
        }
    }

    /// Restrict the accepted chunk kinds (`"b"`, `"t"`, `"bt"`).
    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Scan with `dialect` instead of the global syntax mode.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }
}

/// How the parser wants the next token read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NextRequest {
    #[default]
    Plain,
    /// Resolve the next symbol against an externally supplied base/key pair.
    Substitute(Substitution),
    /// Read the next symbol as the name of an operator definition.
    ///
    /// Ask for this without peeking first. A fresh scan reads the longest
    /// run of operator characters (`<=>` is one symbol), but a token already
    /// buffered by [`Scanner::lookahead`] is mangled as it was split (`<=`
    /// followed by `>`).
    Mangle(MangleKind),
}

/// A chunk after its first bytes have been inspected.
pub enum Chunk<'a, R> {
    Text(Scanner<'a, R>),
    Bytecode(BytecodeInput<R>),
}

/// Precompiled input, positioned at its signature byte.
pub struct BytecodeInput<R> {
    stream: ByteStream<R>,
    chunk_name: ChunkName,
}

impl<R: Reader> BytecodeInput<R> {
    pub fn chunk_name(&self) -> &ChunkName {
        &self.chunk_name
    }

    /// Collect the whole chunk, signature included.
    pub fn read_to_end(mut self) -> Result<Vec<u8>, LexError> {
        self.stream.read_to_end().map_err(|e| {
            LexError::new(
                LexErrorKind::ReadFailed {
                    message: e.to_string(),
                },
                self.chunk_name.short(),
                1,
            )
        })
    }
}

/// Inspect the start of a chunk and prepare to consume it.
///
/// A leading UTF-8 byte-order mark and a leading `#` line are skipped.
/// Fails before any tokenization when the chunk kind is not allowed by the
/// options' mode string.
pub fn setup<R: Reader>(
    reader: R,
    options: ScanOptions,
    interner: &StringInterner,
) -> Result<Chunk<'_, R>, LexError> {
    let ScanOptions {
        chunk_name,
        mode,
        dialect,
    } = options;
    let load_mode = mode
        .as_deref()
        .map_or_else(LoadMode::default, LoadMode::from_mode_str);
    let mut stream = ByteStream::new(reader);
    let mut line = 1;
    let mut header = false;

    if stream.starts_with(&BOM) {
        for _ in BOM {
            stream.bump();
        }
        header = true;
    }
    if stream.at(b'#') {
        stream.skip_to_eol();
        if skip_newline(&mut stream) {
            line += 1;
        }
        header = true;
    }

    let refuse = |kind| Err(LexError::new(kind, chunk_name.short(), line));
    if stream.at(BYTECODE_SIGNATURE) {
        if header {
            return refuse(LexErrorKind::BytecodeAfterHeader);
        }
        if !load_mode.contains(LoadMode::BINARY) {
            return refuse(LexErrorKind::BinaryNotPermitted {
                mode: mode.unwrap_or_default(),
            });
        }
        debug!(chunk = %chunk_name, "routing chunk to bytecode loader");
        return Ok(Chunk::Bytecode(BytecodeInput { stream, chunk_name }));
    }
    if !load_mode.contains(LoadMode::TEXT) {
        return refuse(LexErrorKind::TextNotPermitted {
            mode: mode.unwrap_or_default(),
        });
    }

    let dialect = dialect.unwrap_or_else(|| syntax_mode::global().dialect());
    debug!(chunk = %chunk_name, %dialect, "scanning text chunk");
    Ok(Chunk::Text(Scanner {
        stream,
        interner,
        keywords: dialect.keywords(),
        chunk_name,
        buf: Vec::new(),
        token: Token::new(TokenKind::Eof, line),
        lookahead: None,
        line,
        last_line: line,
        level: 0,
        scratch: CompileScratch::new(),
    }))
}

/// Consume one line break (`\n`, `\r`, `\r\n` or `\n\r`).
fn skip_newline<R: Reader>(stream: &mut ByteStream<R>) -> bool {
    let Some(first) = stream.current().filter(|&b| class::is_eol(b)) else {
        return false;
    };
    stream.bump();
    if stream.current().is_some_and(|b| class::is_eol(b) && b != first) {
        stream.bump();
    }
    true
}

/// What [`Scanner::skip_trivia`] stopped on.
#[derive(Clone, Copy)]
enum Lead {
    Eof,
    /// A `-` that does not start a comment, already consumed.
    Minus,
    /// Start of a token, not yet consumed.
    Byte(u8),
}

/// Symbol text recovered from a token for substitution or mangling.
enum Symbol {
    Operator(Vec<u8>),
    Identifier(Vec<u8>),
}

/// Scanner state for one text chunk.
pub struct Scanner<'a, R> {
    stream: ByteStream<R>,
    interner: &'a StringInterner,
    keywords: &'static KeywordTable,
    chunk_name: ChunkName,
    /// Text of the literal being scanned (decoded for strings).
    buf: Vec<u8>,
    token: Token,
    lookahead: Option<Token>,
    line: u32,
    /// Line of the previous token's end, for the parser's line info.
    last_line: u32,
    level: u32,
    scratch: CompileScratch,
}

impl<'a, R: Reader> Scanner<'a, R> {
    /// Advance to the next token.
    #[allow(
        clippy::should_implement_trait,
        reason = "fallible and never ends; not an iterator"
    )]
    pub fn next(&mut self) -> Result<Token, LexError> {
        self.next_with(NextRequest::Plain)
    }

    /// Advance to the next token, reading it as `request` asks.
    pub fn next_with(&mut self, request: NextRequest) -> Result<Token, LexError> {
        self.last_line = self.line;
        let token = match self.lookahead.take() {
            Some(buffered) => self.apply_request(buffered, request)?,
            None => match request {
                NextRequest::Mangle(kind) if kind != MangleKind::None => {
                    self.scan_mangled(kind)?
                }
                _ => {
                    let token = self.scan()?;
                    self.apply_request(token, request)?
                }
            },
        };
        trace!(line = token.line, token = %token.kind, "next");
        self.token = token;
        Ok(token)
    }

    /// Peek at the token after the current one.
    ///
    /// The following advance returns this same token without reading input.
    pub fn lookahead(&mut self) -> Result<Token, LexError> {
        if let Some(token) = self.lookahead {
            return Ok(token);
        }
        let token = self.scan()?;
        trace!(line = token.line, token = %token.kind, "lookahead");
        self.lookahead = Some(token);
        Ok(token)
    }

    /// Current token. Before the first advance this is a placeholder
    /// end-of-input token.
    pub fn token(&self) -> Token {
        self.token
    }

    /// Line the input cursor is on.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn last_line(&self) -> u32 {
        self.last_line
    }

    pub fn chunk_name(&self) -> &ChunkName {
        &self.chunk_name
    }

    pub fn dialect(&self) -> Dialect {
        self.keywords.dialect()
    }

    /// Keyword table captured at setup.
    pub fn keywords(&self) -> &'static KeywordTable {
        self.keywords
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Number of reader invocations so far.
    pub fn reads(&self) -> u32 {
        self.stream.reads()
    }

    /// Enter one syntax nesting level.
    pub fn enter_level(&mut self) -> Result<(), LexError> {
        self.level += 1;
        if self.level >= MAX_LEVEL {
            return Err(self.error(LexErrorKind::TooManySyntaxLevels, None));
        }
        Ok(())
    }

    pub fn leave_level(&mut self) {
        debug_assert!(self.level > 0, "unbalanced leave_level");
        self.level = self.level.saturating_sub(1);
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Scratch stacks for the bytecode generator. The scanner only owns them.
    pub fn scratch(&self) -> &CompileScratch {
        &self.scratch
    }

    pub fn scratch_mut(&mut self) -> &mut CompileScratch {
        &mut self.scratch
    }

    /// Diagnostic text for `kind`.
    ///
    /// Dialect words print as spelled in this scanner's dialect, so
    /// `Function` reads `fn` under the extended keywords.
    pub fn token_to_string(&self, kind: TokenKind) -> Cow<'static, str> {
        self.keywords
            .dialect_words()
            .iter()
            .find(|w| w.token == Some(kind))
            .map_or_else(|| kind.text(), |w| Cow::Borrowed(w.text))
    }

    /// Build an error on the current line.
    ///
    /// For number, name and string tokens the quoted text is the literal as
    /// scanned so far; for other tokens it is the token's own text.
    pub fn error(&self, kind: LexErrorKind, near: Option<TokenKind>) -> LexError {
        let err = LexError::new(kind, self.chunk_name.short(), self.line);
        match near {
            Some(tok) if tok.is_literal() => err.with_near(String::from_utf8_lossy(&self.buf)),
            Some(tok) => err.with_near(self.token_to_string(tok)),
            None => err,
        }
    }

    fn buffer_error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.chunk_name.short(), self.line)
            .with_near(String::from_utf8_lossy(&self.buf))
    }

    #[cold]
    fn read_failed(&self, err: &io::Error) -> LexError {
        self.error(
            LexErrorKind::ReadFailed {
                message: err.to_string(),
            },
            None,
        )
    }

    #[cold]
    fn intern_failed(&self, err: &InternError) -> LexError {
        self.error(
            LexErrorKind::TooManyStrings {
                message: err.to_string(),
            },
            None,
        )
    }

    fn intern(&self, bytes: &[u8]) -> Result<Name, LexError> {
        self.interner
            .try_intern(bytes)
            .map_err(|e| self.intern_failed(&e))
    }

    // === Input helpers ===

    #[inline]
    fn save_bump(&mut self, b: u8) {
        self.buf.push(b);
        self.stream.bump();
    }

    /// Save bytes while `pred` holds.
    fn save_run(&mut self, pred: fn(u8) -> bool) {
        while let Some(b) = self.stream.current().filter(|&b| pred(b)) {
            self.save_bump(b);
        }
    }

    fn newline(&mut self) -> Result<(), LexError> {
        skip_newline(&mut self.stream);
        self.line += 1;
        if self.line >= MAX_LINE {
            return Err(self.error(LexErrorKind::TooManyLines, None));
        }
        Ok(())
    }

    /// End of input, or the read error that ended it.
    fn end_of_input(&mut self) -> Result<(), LexError> {
        match self.stream.take_error() {
            Some(e) => Err(self.read_failed(&e)),
            None => Ok(()),
        }
    }

    /// Skip whitespace, line breaks and comments.
    fn skip_trivia(&mut self) -> Result<Lead, LexError> {
        loop {
            let Some(c) = self.stream.current() else {
                self.end_of_input()?;
                return Ok(Lead::Eof);
            };
            match c {
                b'\n' | b'\r' => self.newline()?,
                b' ' | b'\t' | 0x0B | 0x0C => self.stream.bump(),
                b'-' => {
                    self.stream.bump();
                    if !self.stream.at(b'-') {
                        return Ok(Lead::Minus);
                    }
                    self.stream.bump();
                    self.comment()?;
                }
                _ => return Ok(Lead::Byte(c)),
            }
        }
    }

    // === Plain tokens ===

    fn scan(&mut self) -> Result<Token, LexError> {
        let lead = self.skip_trivia()?;
        let line = self.line;
        self.buf.clear();
        let kind = match lead {
            Lead::Eof => TokenKind::Eof,
            Lead::Minus => TokenKind::Char(b'-'),
            Lead::Byte(c) => self.scan_token(c)?,
        };
        Ok(Token::new(kind, line))
    }

    fn scan_token(&mut self, c: u8) -> Result<TokenKind, LexError> {
        if class::is_ident_start(c) {
            return self.name();
        }
        if class::is_digit(c) {
            return self.number(c);
        }
        let kind = match c {
            b'[' => return self.bracket(),
            b'"' | b'\'' => return self.short_string(c),
            b'=' => self.follow(c, &[(b'=', TokenKind::Eq), (b'~', TokenKind::Subs)]),
            b'<' => self.follow(c, &[(b'=', TokenKind::Le)]),
            b'>' => self.follow(c, &[(b'=', TokenKind::Ge)]),
            b'~' => self.follow(c, &[(b'=', TokenKind::Ne)]),
            b':' => self.follow(c, &[(b':', TokenKind::Label)]),
            b'^' => self.follow(c, &[(b'^', TokenKind::Pow)]),
            b'.' => {
                self.save_bump(c);
                if self.stream.at(b'.') {
                    self.stream.bump();
                    if self.stream.at(b'.') {
                        self.stream.bump();
                        TokenKind::Dots
                    } else {
                        TokenKind::Concat
                    }
                } else if let Some(d) = self.stream.current().filter(|&d| class::is_digit(d)) {
                    return self.number(d);
                } else {
                    TokenKind::Char(b'.')
                }
            }
            _ if class::is_cntrl(c) => {
                return Err(self.error(
                    LexErrorKind::UnexpectedCharacter { byte: c },
                    Some(TokenKind::Char(c)),
                ));
            }
            _ => {
                self.stream.bump();
                TokenKind::Char(c)
            }
        };
        Ok(kind)
    }

    /// Consume `c`, then the first matching second byte, if any.
    fn follow(&mut self, c: u8, pairs: &[(u8, TokenKind)]) -> TokenKind {
        self.stream.bump();
        for &(second, kind) in pairs {
            if self.stream.at(second) {
                self.stream.bump();
                return kind;
            }
        }
        TokenKind::Char(c)
    }

    fn name(&mut self) -> Result<TokenKind, LexError> {
        self.save_run(class::is_ident);
        if mangle::has_mangling_header(&self.buf) {
            return Err(self.buffer_error(LexErrorKind::ReservedPrefix));
        }
        match self.keywords.lookup(&self.buf) {
            Some(keyword) => Ok(keyword),
            None => self.intern(&self.buf).map(TokenKind::Name),
        }
    }

    /// Collect the maximal numeric run starting at `first`, then decode it.
    ///
    /// The buffer may already hold a leading `.`.
    fn number(&mut self, first: u8) -> Result<TokenKind, LexError> {
        let leading_zero = self.buf.is_empty() && first == b'0';
        self.save_bump(first);
        let hex = leading_zero && matches!(self.stream.current(), Some(b'x' | b'X'));
        let exponent = if hex { b'p' } else { b'e' };
        let mut prev = first;
        while let Some(c) = self.stream.current() {
            let signed_exponent =
                matches!(c, b'+' | b'-') && prev.to_ascii_lowercase() == exponent;
            if !(class::is_ident(c) || c == b'.' || signed_exponent) {
                break;
            }
            prev = c;
            self.save_bump(c);
        }
        parse_number(&self.buf)
            .map(TokenKind::Number)
            .ok_or_else(|| self.buffer_error(LexErrorKind::MalformedNumber))
    }

    // === Requests ===

    fn apply_request(&mut self, token: Token, request: NextRequest) -> Result<Token, LexError> {
        match request {
            NextRequest::Plain | NextRequest::Mangle(MangleKind::None) => Ok(token),
            NextRequest::Substitute(subst) => match self.symbol_of(token.kind) {
                Some(Symbol::Operator(text) | Symbol::Identifier(text)) => {
                    let symbol = self.intern(&text)?;
                    Ok(Token::new(TokenKind::Substituted { subst, symbol }, token.line))
                }
                None => Err(self.error(LexErrorKind::InvalidSubstitutionTarget, Some(token.kind))),
            },
            NextRequest::Mangle(kind) => {
                let mangled = match self.symbol_of(token.kind) {
                    Some(symbol) => self.mangled(kind, &symbol)?,
                    None => None,
                };
                match mangled {
                    Some(mangled) => Ok(Token::new(mangled, token.line)),
                    None => Err(self.error(symbol_expected(kind), Some(token.kind))),
                }
            }
        }
    }

    /// Symbol text of an already scanned token.
    fn symbol_of(&self, kind: TokenKind) -> Option<Symbol> {
        match kind {
            TokenKind::Name(name) => Some(Symbol::Identifier(self.interner.lookup(name).to_vec())),
            _ if kind.is_reserved_word() => Some(Symbol::Identifier(
                self.token_to_string(kind).as_bytes().to_vec(),
            )),
            TokenKind::Pow
            | TokenKind::Concat
            | TokenKind::Dots
            | TokenKind::Eq
            | TokenKind::Ge
            | TokenKind::Le
            | TokenKind::Ne
            | TokenKind::Subs
            | TokenKind::Label => Some(Symbol::Operator(kind.text().as_bytes().to_vec())),
            TokenKind::Char(c) if class::is_operator(c) => Some(Symbol::Operator(vec![c])),
            _ => None,
        }
    }

    /// Token for `symbol` defined as a `kind` operator, `None` if the
    /// shapes do not fit.
    fn mangled(&self, kind: MangleKind, symbol: &Symbol) -> Result<Option<TokenKind>, LexError> {
        let intern = |kind: MangleKind, text: &[u8]| -> Result<Option<Name>, LexError> {
            mangle::mangle(kind, text)
                .map(|bytes| self.intern(&bytes))
                .transpose()
        };
        let mangled = match (kind, symbol) {
            (MangleKind::Operator | MangleKind::Unknown, Symbol::Operator(text)) => {
                intern(MangleKind::Operator, text)?.map(TokenKind::Oper)
            }
            (
                MangleKind::FieldRead | MangleKind::FieldWrite,
                Symbol::Operator(text) | Symbol::Identifier(text),
            ) => intern(kind, text)?.map(TokenKind::FieldOper),
            (MangleKind::VarName | MangleKind::Unknown, Symbol::Identifier(text)) => {
                intern(MangleKind::VarName, text)?.map(TokenKind::Name)
            }
            _ => None,
        };
        Ok(mangled)
    }

    /// Scan a fresh symbol for an operator definition.
    ///
    /// Operator symbols are read as the maximal run of operator characters,
    /// so `<=>` is one symbol here where plain scanning would split it.
    fn scan_mangled(&mut self, kind: MangleKind) -> Result<Token, LexError> {
        let lead = self.skip_trivia()?;
        let line = self.line;
        self.buf.clear();
        let symbol = match lead {
            Lead::Minus => {
                self.buf.push(b'-');
                self.save_run(class::is_operator);
                Some(Symbol::Operator(self.buf.clone()))
            }
            Lead::Byte(c) if class::is_operator(c) => {
                self.save_run(class::is_operator);
                Some(Symbol::Operator(self.buf.clone()))
            }
            Lead::Byte(c) if class::is_ident_start(c) => {
                self.save_run(class::is_ident);
                Some(Symbol::Identifier(self.buf.clone()))
            }
            Lead::Eof | Lead::Byte(_) => None,
        };
        let mangled = match symbol {
            Some(symbol) => self.mangled(kind, &symbol)?,
            None => None,
        };
        match mangled {
            Some(mangled) => Ok(Token::new(mangled, line)),
            None if !self.buf.is_empty() => Err(self.buffer_error(symbol_expected(kind))),
            None => {
                let near = match lead {
                    Lead::Byte(c) => TokenKind::Char(c),
                    Lead::Eof | Lead::Minus => TokenKind::Eof,
                };
                Err(self.error(symbol_expected(kind), Some(near)))
            }
        }
    }
}

fn symbol_expected(kind: MangleKind) -> LexErrorKind {
    let what = match kind {
        MangleKind::FieldRead | MangleKind::FieldWrite => "field operator symbol",
        MangleKind::VarName => "operator name",
        MangleKind::None | MangleKind::Unknown | MangleKind::Operator => "operator symbol",
    };
    LexErrorKind::SymbolExpected { what }
}
