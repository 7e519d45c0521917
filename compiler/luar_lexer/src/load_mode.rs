//! Chunk kinds a load request accepts.

use bitflags::bitflags;

bitflags! {
    /// Chunk kinds permitted by a mode string such as `"bt"`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct LoadMode: u8 {
        /// Precompiled bytecode (`b`).
        const BINARY = 1 << 0;
        /// Source text (`t`).
        const TEXT = 1 << 1;
    }
}

impl LoadMode {
    /// Parse a mode string. Characters other than `b` and `t` are ignored.
    pub fn from_mode_str(mode: &str) -> Self {
        mode.bytes().fold(LoadMode::empty(), |acc, b| match b {
            b'b' => acc | LoadMode::BINARY,
            b't' => acc | LoadMode::TEXT,
            _ => acc,
        })
    }
}

impl Default for LoadMode {
    fn default() -> Self {
        LoadMode::all()
    }
}
