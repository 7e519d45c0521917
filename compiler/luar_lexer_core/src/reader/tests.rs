use super::*;
use pretty_assertions::assert_eq;

fn drain(mut reader: impl Reader) -> Vec<Vec<u8>> {
    let mut chunks = Vec::new();
    while let Ok(Some(chunk)) = reader.read() {
        chunks.push(chunk);
    }
    chunks
}

#[test]
fn slice_reader_single_chunk() {
    assert_eq!(drain(SliceReader::new(b"local x")), vec![b"local x".to_vec()]);
}

#[test]
fn slice_reader_empty_source_ends_immediately() {
    assert!(drain(SliceReader::new(b"")).is_empty());
}

#[test]
fn slice_reader_splits_into_chunks() {
    assert_eq!(
        drain(SliceReader::chunked(b"abcdefg", 3)),
        vec![b"abc".to_vec(), b"def".to_vec(), b"g".to_vec()]
    );
}

#[test]
fn slice_reader_zero_chunk_size_is_clamped() {
    assert_eq!(drain(SliceReader::chunked(b"ab", 0)).len(), 2);
}

#[test]
fn io_reader_reads_until_eof() {
    let data: &[u8] = b"return 1";
    let chunks = drain(IoReader::with_chunk_size(data, 4));
    assert_eq!(chunks, vec![b"retu".to_vec(), b"rn 1".to_vec()]);
}

#[test]
fn fn_reader_uses_captured_context() {
    let mut parts = vec![b"b".to_vec(), b"a".to_vec()];
    let reader = FnReader(move || parts.pop());
    assert_eq!(drain(reader), vec![b"a".to_vec(), b"b".to_vec()]);
}

#[test]
fn boxed_reader_forwards() {
    let reader: Box<dyn Reader> = Box::new(SliceReader::new(b"x"));
    assert_eq!(drain(reader), vec![b"x".to_vec()]);
}
