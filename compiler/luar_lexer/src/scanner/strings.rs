//! String literals, long brackets and comments.

use luar_ir::TokenKind;
use luar_lexer_core::{class, Reader};

use super::Scanner;
use crate::escape::{self, MAX_CODE_POINT};
use crate::{LexError, LexErrorKind};

/// Result of reading a long-bracket delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sep {
    /// `[` or `]` followed by `level` equals signs and the same bracket.
    Level(usize),
    /// A lone bracket.
    Bare,
    /// Equals signs without the second bracket.
    Invalid,
}

impl<R: Reader> Scanner<'_, R> {
    /// Read a `[`/`]` and any `=` run after it. The cursor ends on the
    /// second bracket when there is one.
    fn skip_sep(&mut self) -> Sep {
        let Some(delim) = self.stream.current() else {
            return Sep::Bare;
        };
        self.save_bump(delim);
        let mut level = 0;
        while self.stream.at(b'=') {
            self.save_bump(b'=');
            level += 1;
        }
        if self.stream.at(delim) {
            Sep::Level(level)
        } else if level == 0 {
            Sep::Bare
        } else {
            Sep::Invalid
        }
    }

    /// A token starting with `[`: a long string or the bracket itself.
    pub(super) fn bracket(&mut self) -> Result<TokenKind, LexError> {
        let start_line = self.line;
        match self.skip_sep() {
            Sep::Level(level) => {
                self.read_long(level, false, start_line)?;
                let delim = level + 2;
                let body = &self.buf[delim..self.buf.len() - delim];
                self.intern(body).map(TokenKind::String)
            }
            Sep::Bare => Ok(TokenKind::Char(b'[')),
            Sep::Invalid => Err(self.buffer_error(LexErrorKind::InvalidLongStringDelimiter)),
        }
    }

    /// Rest of a comment, after its `--`.
    pub(super) fn comment(&mut self) -> Result<(), LexError> {
        if self.stream.at(b'[') {
            let start_line = self.line;
            self.buf.clear();
            let sep = self.skip_sep();
            if let Sep::Level(level) = sep {
                self.read_long(level, true, start_line)?;
                self.buf.clear();
                return Ok(());
            }
            self.buf.clear();
        }
        self.stream.skip_to_eol();
        Ok(())
    }

    /// Body of a long string or comment; the cursor is on the opener's
    /// second bracket.
    ///
    /// Strings accumulate into the buffer with the delimiters included;
    /// comments only keep the current line. A newline right after the
    /// opener is dropped.
    fn read_long(&mut self, level: usize, comment: bool, start_line: u32) -> Result<(), LexError> {
        self.save_bump(b'[');
        if self.stream.current().is_some_and(class::is_eol) {
            self.newline()?;
        }
        loop {
            match self.stream.current() {
                None => {
                    self.end_of_input()?;
                    let kind = if comment {
                        LexErrorKind::UnfinishedLongComment { start_line }
                    } else {
                        LexErrorKind::UnfinishedLongString { start_line }
                    };
                    return Err(self.error(kind, Some(TokenKind::Eof)));
                }
                Some(b']') => {
                    if self.skip_sep() == Sep::Level(level) {
                        self.save_bump(b']');
                        return Ok(());
                    }
                }
                Some(b'\n' | b'\r') => {
                    if comment {
                        self.buf.clear();
                    } else {
                        self.buf.push(b'\n');
                    }
                    self.newline()?;
                }
                Some(b'-') if comment => self.nested_comment(level)?,
                Some(c) => {
                    if comment {
                        self.stream.bump();
                    } else {
                        self.save_bump(c);
                    }
                }
            }
        }
    }

    /// Inside a long comment at `level`: a `--` opener of the same level
    /// starts a nested comment.
    fn nested_comment(&mut self, level: usize) -> Result<(), LexError> {
        self.stream.bump();
        if !self.stream.at(b'-') {
            return Ok(());
        }
        self.stream.bump();
        if !self.stream.at(b'[') {
            return Ok(());
        }
        let start_line = self.line;
        if self.skip_sep() == Sep::Level(level) {
            self.enter_level()?;
            self.read_long(level, true, start_line)?;
            self.leave_level();
        }
        Ok(())
    }

    /// Quoted string. Errors are reported on the line the string started.
    pub(super) fn short_string(&mut self, delim: u8) -> Result<TokenKind, LexError> {
        let start_line = self.line;
        self.save_bump(delim);
        loop {
            match self.stream.current() {
                None => {
                    self.end_of_input()?;
                    let mut err = self.error(LexErrorKind::UnfinishedString, Some(TokenKind::Eof));
                    err.line = start_line;
                    return Err(err);
                }
                Some(b'\n' | b'\r') => {
                    let mut err = self.buffer_error(LexErrorKind::UnfinishedString);
                    err.line = start_line;
                    return Err(err);
                }
                Some(b'\\') => self.escape()?,
                Some(c) => {
                    self.save_bump(c);
                    if c == delim {
                        break;
                    }
                }
            }
        }
        let body = &self.buf[1..self.buf.len() - 1];
        self.intern(body).map(TokenKind::String)
    }

    /// Decode one escape sequence; the cursor is on the backslash.
    fn escape(&mut self) -> Result<(), LexError> {
        self.stream.bump();
        let Some(c) = self.stream.current() else {
            // Reported as an unfinished string by the caller.
            return Ok(());
        };
        if let Some(byte) = escape::resolve_escape(c) {
            self.save_bump(byte);
            return Ok(());
        }
        match c {
            b'x' => {
                self.stream.bump();
                let hi = self.hex_digit()?;
                let lo = self.hex_digit()?;
                self.buf.push((hi << 4) | lo);
            }
            b'u' => {
                self.stream.bump();
                if !self.stream.at(b'{') {
                    return Err(self.buffer_error(LexErrorKind::InvalidEscape));
                }
                self.stream.bump();
                let mut cp = u32::from(self.hex_digit()?);
                while !self.stream.at(b'}') {
                    cp = (cp << 4) | u32::from(self.hex_digit()?);
                    if cp > MAX_CODE_POINT {
                        return Err(self.buffer_error(LexErrorKind::InvalidEscape));
                    }
                }
                self.stream.bump();
                escape::push_utf8(&mut self.buf, cp);
            }
            b'z' => {
                self.stream.bump();
                while let Some(b) = self.stream.current().filter(|&b| class::is_space(b)) {
                    if class::is_eol(b) {
                        self.newline()?;
                    } else {
                        self.stream.bump();
                    }
                }
            }
            b'\n' | b'\r' => {
                self.buf.push(b'\n');
                self.newline()?;
            }
            b'0'..=b'9' => {
                let mut value = 0u32;
                for _ in 0..3 {
                    match self.stream.current().filter(u8::is_ascii_digit) {
                        Some(d) => {
                            value = value * 10 + u32::from(d - b'0');
                            self.stream.bump();
                        }
                        None => break,
                    }
                }
                let byte = u8::try_from(value)
                    .map_err(|_| self.buffer_error(LexErrorKind::InvalidEscape))?;
                self.buf.push(byte);
            }
            _ => return Err(self.buffer_error(LexErrorKind::InvalidEscape)),
        }
        Ok(())
    }

    fn hex_digit(&mut self) -> Result<u8, LexError> {
        let digit = self
            .stream
            .current()
            .and_then(escape::hex_value)
            .ok_or_else(|| self.buffer_error(LexErrorKind::InvalidEscape))?;
        self.stream.bump();
        Ok(digit)
    }
}
