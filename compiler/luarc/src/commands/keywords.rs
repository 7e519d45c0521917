//! The `keywords` command: dump the dialect-sensitive keyword rows.

use luar_lexer::{syntax_mode, Dialect};

/// Print each dialect-sensitive word and what it scans as.
///
/// Without an explicit dialect the global syntax mode decides.
pub fn list_keywords(dialect: Option<Dialect>) {
    let state = syntax_mode::global().snapshot();
    let dialect = dialect.unwrap_or(state.dialect);
    println!(
        "Keywords for the {dialect} dialect (mode {}, autoselect {}):",
        dialect.mode(),
        if state.autoselect { "on" } else { "off" }
    );
    for word in dialect.keywords().dialect_words() {
        match word.token {
            Some(token) => println!("  {:<10} {}", word.text, token.text()),
            None => println!("  {:<10} <name>", word.text),
        }
    }
}
