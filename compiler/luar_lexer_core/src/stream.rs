//! Current-byte view over a chunked [`Reader`].
//!
//! The stream normally holds one chunk at a time; only
//! [`starts_with()`](ByteStream::starts_with) joins later chunks onto it to
//! see far enough ahead. `current()` is the byte
//! under the cursor, `None` once the input is exhausted. The reader is
//! called lazily, only when the cursor runs off the end of the held chunk,
//! and never again after it has signalled end of input.
//!
//! # Read errors
//!
//! An I/O error from the reader ends the input like a normal end-of-input
//! signal. The error is parked and can be collected with
//! [`take_error()`](ByteStream::take_error), so callers only need to check
//! for it where they would otherwise report end of input.

use std::io;

use crate::Reader;

pub struct ByteStream<R> {
    reader: R,
    /// Chunk currently being consumed.
    chunk: Vec<u8>,
    /// Index of the byte after `current` within `chunk`.
    pos: usize,
    current: Option<u8>,
    /// Reader has signalled end of input (or failed).
    exhausted: bool,
    /// Number of reader invocations so far.
    reads: u32,
    error: Option<io::Error>,
}

impl<R: Reader> ByteStream<R> {
    /// Create a stream positioned at the first available byte.
    ///
    /// This pulls the first chunk immediately.
    pub fn new(reader: R) -> Self {
        let mut stream = Self {
            reader,
            chunk: Vec::new(),
            pos: 0,
            current: None,
            exhausted: false,
            reads: 0,
            error: None,
        };
        stream.bump();
        stream
    }

    /// Byte under the cursor, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    /// Is the cursor on `byte`?
    #[inline]
    pub fn at(&self, byte: u8) -> bool {
        self.current == Some(byte)
    }

    /// Advance to the next byte, pulling a new chunk if needed.
    #[inline]
    pub fn bump(&mut self) {
        if let Some(&b) = self.chunk.get(self.pos) {
            self.pos += 1;
            self.current = Some(b);
        } else {
            self.refill();
        }
    }

    #[cold]
    fn refill(&mut self) {
        match self.pull() {
            Some(chunk) => {
                self.current = Some(chunk[0]);
                self.chunk = chunk;
                self.pos = 1;
            }
            None => self.current = None,
        }
    }

    /// Next non-empty chunk from the reader, `None` once input is over.
    fn pull(&mut self) -> Option<Vec<u8>> {
        while !self.exhausted {
            self.reads += 1;
            match self.reader.read() {
                Ok(Some(chunk)) if !chunk.is_empty() => return Some(chunk),
                Ok(_) => self.exhausted = true,
                Err(e) => {
                    self.error = Some(e);
                    self.exhausted = true;
                }
            }
        }
        None
    }

    /// Does the input continue with `prefix`, starting at `current`?
    ///
    /// Later chunks are appended to the held one until enough bytes are
    /// available, so the answer is the same wherever the reader splits its
    /// input. Nothing is consumed.
    pub fn starts_with(&mut self, prefix: &[u8]) -> bool {
        let Some((&first, rest)) = prefix.split_first() else {
            return true;
        };
        if self.current != Some(first) {
            return false;
        }
        while self.chunk.len() - self.pos < rest.len() {
            match self.pull() {
                Some(more) => self.chunk.extend_from_slice(&more),
                None => break,
            }
        }
        self.chunk[self.pos..].starts_with(rest)
    }

    /// Skip to the next line-break byte (or end of input) without examining
    /// bytes one at a time.
    ///
    /// The cursor ends on the `\n`/`\r`; nothing is consumed if it is
    /// already on one.
    pub fn skip_to_eol(&mut self) {
        loop {
            match self.current {
                None | Some(b'\n' | b'\r') => return,
                Some(_) => {}
            }
            let rest = &self.chunk[self.pos..];
            if let Some(offset) = memchr::memchr2(b'\n', b'\r', rest) {
                self.pos += offset + 1;
                self.current = Some(rest[offset]);
                return;
            }
            self.pos = self.chunk.len();
            self.refill();
        }
    }

    /// Number of times the reader has been invoked.
    pub fn reads(&self) -> u32 {
        self.reads
    }

    /// Collect a parked read error, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Drain everything from `current` to the end of input.
    ///
    /// Used to hand a chunk over to a different consumer (for instance a
    /// bytecode loader) after the first bytes have been inspected.
    pub fn read_to_end(&mut self) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        while let Some(b) = self.current {
            out.push(b);
            out.extend_from_slice(&self.chunk[self.pos..]);
            self.pos = self.chunk.len();
            self.refill();
        }
        match self.take_error() {
            Some(e) => Err(e),
            None => Ok(out),
        }
    }
}

#[cfg(test)]
mod tests;
