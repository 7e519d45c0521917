//! Chunk names and their short display form.
//!
//! The raw name is whatever the host passed when loading the chunk. Error
//! messages use a bounded display form of it:
//!
//! - `=name` shows `name` as-is
//! - `@path` shows the path, cut from the left with `...` when too long
//! - anything else is treated as the source text itself and shows as
//!   `[string "first line..."]`

use std::fmt;

/// Upper bound (including a terminator slot) on the display form.
pub const ID_SIZE: usize = 60;

const STRING_PREFIX: &str = "[string \"";
const STRING_SUFFIX: &str = "\"]";
const ELLIPSIS: &str = "...";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChunkName {
    raw: String,
    short: String,
}

impl ChunkName {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let short = shorten(raw.as_bytes());
        ChunkName { raw, short }
    }

    /// The name exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Display form used in diagnostics.
    pub fn short(&self) -> &str {
        &self.short
    }
}

impl fmt::Display for ChunkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short)
    }
}

fn shorten(raw: &[u8]) -> String {
    match raw.split_first() {
        Some((b'=', rest)) => lossy(&rest[..rest.len().min(ID_SIZE - 1)]),
        Some((b'@', rest)) => {
            if rest.len() < ID_SIZE {
                lossy(rest)
            } else {
                let keep = ID_SIZE - 1 - ELLIPSIS.len();
                format!("{ELLIPSIS}{}", lossy(&rest[rest.len() - keep..]))
            }
        }
        _ => {
            // Source text: stop at the first control byte.
            let limit = ID_SIZE - 12;
            let len = raw
                .iter()
                .take(limit)
                .position(|&b| b < b' ')
                .unwrap_or(raw.len().min(limit));
            if len == raw.len() {
                format!("{STRING_PREFIX}{}{STRING_SUFFIX}", lossy(raw))
            } else {
                let len = len.min(ID_SIZE - 15);
                format!(
                    "{STRING_PREFIX}{}{ELLIPSIS}{STRING_SUFFIX}",
                    lossy(&raw[..len])
                )
            }
        }
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
