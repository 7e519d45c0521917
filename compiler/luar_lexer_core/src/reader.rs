//! Pull-style input callbacks.

use std::io::{self, Read};

/// Chunk size used by [`IoReader::new`].
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Source of successive byte chunks.
///
/// `Ok(None)` or an empty chunk signals end of input; once seen, the reader
/// is not called again. Any state the callback needs (file handle, string
/// cursor, host context) lives in the implementing type.
pub trait Reader {
    fn read(&mut self) -> io::Result<Option<Vec<u8>>>;
}

impl<R: Reader + ?Sized> Reader for &mut R {
    fn read(&mut self) -> io::Result<Option<Vec<u8>>> {
        (**self).read()
    }
}

impl<R: Reader + ?Sized> Reader for Box<R> {
    fn read(&mut self) -> io::Result<Option<Vec<u8>>> {
        (**self).read()
    }
}

/// Reader over an in-memory buffer, optionally split into fixed-size chunks.
#[derive(Clone, Debug)]
pub struct SliceReader<'a> {
    rest: &'a [u8],
    chunk_size: usize,
}

impl<'a> SliceReader<'a> {
    /// Deliver the whole buffer as a single chunk.
    pub fn new(source: &'a [u8]) -> Self {
        Self::chunked(source, usize::MAX)
    }

    /// Deliver the buffer in chunks of at most `chunk_size` bytes.
    pub fn chunked(source: &'a [u8], chunk_size: usize) -> Self {
        Self {
            rest: source,
            chunk_size: chunk_size.max(1),
        }
    }
}

impl Reader for SliceReader<'_> {
    fn read(&mut self) -> io::Result<Option<Vec<u8>>> {
        if self.rest.is_empty() {
            return Ok(None);
        }
        let take = self.chunk_size.min(self.rest.len());
        let (chunk, rest) = self.rest.split_at(take);
        self.rest = rest;
        Ok(Some(chunk.to_vec()))
    }
}

/// Reader adapting any [`std::io::Read`] source.
#[derive(Debug)]
pub struct IoReader<T> {
    inner: T,
    chunk_size: usize,
}

impl<T: Read> IoReader<T> {
    pub fn new(inner: T) -> Self {
        Self::with_chunk_size(inner, DEFAULT_CHUNK_SIZE)
    }

    pub fn with_chunk_size(inner: T, chunk_size: usize) -> Self {
        Self {
            inner,
            chunk_size: chunk_size.max(1),
        }
    }
}

impl<T: Read> Reader for IoReader<T> {
    fn read(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut buf = vec![0u8; self.chunk_size];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(n) => {
                    buf.truncate(n);
                    return Ok(Some(buf));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

/// Reader backed by a closure, the context being whatever it captures.
pub struct FnReader<F>(pub F);

impl<F> Reader for FnReader<F>
where
    F: FnMut() -> Option<Vec<u8>>,
{
    fn read(&mut self) -> io::Result<Option<Vec<u8>>> {
        Ok((self.0)())
    }
}

#[cfg(test)]
mod tests;
