use super::*;
use crate::{FnReader, SliceReader};
use pretty_assertions::assert_eq;

fn collect<R: Reader>(stream: &mut ByteStream<R>) -> Vec<u8> {
    let mut out = Vec::new();
    while let Some(b) = stream.current() {
        out.push(b);
        stream.bump();
    }
    out
}

#[test]
fn empty_input_is_eof_immediately() {
    let stream = ByteStream::new(SliceReader::new(b""));
    assert_eq!(stream.current(), None);
    assert_eq!(stream.reads(), 1);
}

#[test]
fn walks_single_chunk() {
    let mut stream = ByteStream::new(SliceReader::new(b"abc"));
    assert_eq!(collect(&mut stream), b"abc");
}

#[test]
fn walks_across_chunk_boundaries() {
    let mut stream = ByteStream::new(SliceReader::chunked(b"hello world", 2));
    assert_eq!(collect(&mut stream), b"hello world");
}

#[test]
fn empty_chunk_ends_input() {
    let mut parts = vec![b"after".to_vec(), Vec::new(), b"ab".to_vec()];
    let mut stream = ByteStream::new(FnReader(move || parts.pop()));
    assert_eq!(collect(&mut stream), b"ab");
}

#[test]
fn reader_not_called_after_end_of_input() {
    let mut calls = 0;
    let mut stream = ByteStream::new(FnReader(|| {
        calls += 1;
        None::<Vec<u8>>
    }));
    stream.bump();
    stream.bump();
    assert_eq!(stream.current(), None);
    assert_eq!(stream.reads(), 1);
    drop(stream);
    assert_eq!(calls, 1);
}

#[test]
fn chunks_are_pulled_lazily() {
    let mut stream = ByteStream::new(SliceReader::chunked(b"abcd", 2));
    assert_eq!(stream.reads(), 1);
    stream.bump(); // 'b', still first chunk
    assert_eq!(stream.reads(), 1);
    stream.bump(); // 'c', second chunk
    assert_eq!(stream.reads(), 2);
}

#[test]
fn skip_to_eol_stops_on_newline() {
    let mut stream = ByteStream::new(SliceReader::new(b"comment text\nnext"));
    stream.skip_to_eol();
    assert_eq!(stream.current(), Some(b'\n'));
    stream.bump();
    assert_eq!(collect(&mut stream), b"next");
}

#[test]
fn skip_to_eol_crosses_chunks() {
    let mut stream = ByteStream::new(SliceReader::chunked(b"a long comment\rrest", 3));
    stream.skip_to_eol();
    assert_eq!(stream.current(), Some(b'\r'));
    stream.bump();
    assert_eq!(collect(&mut stream), b"rest");
}

#[test]
fn skip_to_eol_at_end_of_input() {
    let mut stream = ByteStream::new(SliceReader::chunked(b"no newline", 4));
    stream.skip_to_eol();
    assert_eq!(stream.current(), None);
}

#[test]
fn skip_to_eol_on_newline_is_noop() {
    let mut stream = ByteStream::new(SliceReader::new(b"\nx"));
    stream.skip_to_eol();
    assert_eq!(stream.current(), Some(b'\n'));
}

#[test]
fn read_to_end_includes_current_byte() {
    let mut stream = ByteStream::new(SliceReader::chunked(b"\x1bLuaJIT", 3));
    assert_eq!(stream.read_to_end().ok(), Some(b"\x1bLuaJIT".to_vec()));
    assert_eq!(stream.current(), None);
}

#[test]
fn read_error_is_parked() {
    struct Failing(bool);
    impl Reader for Failing {
        fn read(&mut self) -> io::Result<Option<Vec<u8>>> {
            if self.0 {
                Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            } else {
                self.0 = true;
                Ok(Some(b"x".to_vec()))
            }
        }
    }
    let mut stream = ByteStream::new(Failing(false));
    assert_eq!(stream.current(), Some(b'x'));
    stream.bump();
    assert_eq!(stream.current(), None);
    let err = stream.take_error().map(|e| e.to_string());
    assert_eq!(err.as_deref(), Some("disk on fire"));
    assert!(stream.take_error().is_none());
}

#[test]
fn starts_with_within_one_chunk() {
    let mut stream = ByteStream::new(SliceReader::new(b"\xef\xbb\xbfx"));
    assert!(stream.starts_with(b"\xef\xbb\xbf"));
    assert!(!stream.starts_with(b"\xef\xbbx"));
    assert_eq!(stream.current(), Some(0xEF));
    assert_eq!(stream.reads(), 1);
}

#[test]
fn starts_with_pulls_later_chunks_without_consuming() {
    let mut stream = ByteStream::new(SliceReader::chunked(b"\xef\xbb\xbfx = 1", 1));
    assert!(stream.starts_with(b"\xef\xbb\xbf"));
    assert_eq!(stream.reads(), 3);
    assert_eq!(collect(&mut stream), b"\xef\xbb\xbfx = 1");
}

#[test]
fn starts_with_stops_at_end_of_input() {
    let mut stream = ByteStream::new(SliceReader::chunked(b"\xef\xbb", 1));
    assert!(!stream.starts_with(b"\xef\xbb\xbf"));
    assert_eq!(collect(&mut stream), b"\xef\xbb");
    assert!(stream.starts_with(b""));
    assert!(!stream.starts_with(b"x"));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn chunking_never_changes_bytes(
            bytes in proptest::collection::vec(any::<u8>(), 0..256),
            chunk in 1usize..17,
        ) {
            let mut stream = ByteStream::new(SliceReader::chunked(&bytes, chunk));
            prop_assert_eq!(collect(&mut stream), bytes);
        }

        #[test]
        fn skip_to_eol_matches_scalar(
            bytes in proptest::collection::vec(prop_oneof![Just(b'a'), Just(b'\n'), Just(b'\r'), Just(b' ')], 0..64),
            chunk in 1usize..9,
        ) {
            let mut stream = ByteStream::new(SliceReader::chunked(&bytes, chunk));
            stream.skip_to_eol();
            let expected = bytes.iter().copied().find(|&b| b == b'\n' || b == b'\r');
            prop_assert_eq!(stream.current(), expected);
        }
    }
}
