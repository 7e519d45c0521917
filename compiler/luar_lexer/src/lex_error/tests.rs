use super::*;
use pretty_assertions::assert_eq;

#[test]
fn renders_chunk_line_message_and_near() {
    let err = LexError::new(LexErrorKind::MalformedNumber, "test.lua", 3).with_near("3x");
    assert_eq!(err.to_string(), "test.lua:3: malformed number near '3x'");
}

#[test]
fn omits_near_clause_when_absent() {
    let err = LexError::new(LexErrorKind::TooManySyntaxLevels, "=stdin", 7);
    assert_eq!(err.to_string(), "=stdin:7: chunk has too many syntax levels");
}

#[test]
fn long_string_messages_name_the_start_line() {
    let err = LexError::new(
        LexErrorKind::UnfinishedLongComment { start_line: 2 },
        "x",
        9,
    )
    .with_near("<eof>");
    assert_eq!(
        err.to_string(),
        "x:9: unfinished long comment (starting at line 2) near '<eof>'"
    );
}

#[test]
fn mode_errors_quote_the_mode_string() {
    let kind = LexErrorKind::TextNotPermitted { mode: "b".into() };
    assert_eq!(kind.to_string(), "attempt to load a text chunk (mode is 'b')");
    assert_eq!(
        ModeRangeError(5).to_string(),
        "number out of range: syntax mode 5"
    );
}
