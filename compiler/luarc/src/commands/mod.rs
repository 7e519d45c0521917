//! Command handlers for the Luar CLI.

mod keywords;
mod lex;
mod mangle;

use std::sync::Once;

pub use keywords::list_keywords;
pub use lex::{lex_file, parse_lex_options};
pub use mangle::mangle_symbol;

static TRACING_INIT: Once = Once::new();

/// Install a stderr log subscriber when `RUST_LOG` holds a filter.
///
/// Logs go to stderr so they never interleave with the token rows on
/// stdout. Try `RUST_LOG=luar_lexer=debug` for setup decisions or
/// `RUST_LOG=luar_lexer=trace` for every token. Later calls do nothing.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .without_time(),
            )
            .with(filter)
            .init();
    });
}
