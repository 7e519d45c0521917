//! Process-wide syntax mode.
//!
//! The controller only decides which dialect a *new* scanner starts with:
//! every scanner captures its keyword table at setup and keeps it for the
//! whole chunk, so switching modes never disturbs a compilation already in
//! progress. A switch is a single store under the lock, so readers see
//! either the old dialect or the new one, never a mix.

use parking_lot::RwLock;
use tracing::debug;

use crate::keywords::{Dialect, KeywordTable};
use crate::ModeRangeError;

/// Snapshot of the controller's settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeState {
    pub dialect: Dialect,
    /// Advisory flag for hosts that pick a dialect per chunk. The scanner
    /// does not consult it.
    pub autoselect: bool,
}

impl ModeState {
    const INITIAL: ModeState = ModeState {
        dialect: Dialect::Classic,
        autoselect: false,
    };
}

impl Default for ModeState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Holder of the current dialect and the autoselect flag.
pub struct SyntaxModeController {
    state: RwLock<ModeState>,
}

impl SyntaxModeController {
    /// A controller in classic mode with autoselect off.
    pub const fn new() -> Self {
        SyntaxModeController {
            state: parking_lot::const_rwlock(ModeState::INITIAL),
        }
    }

    pub fn snapshot(&self) -> ModeState {
        *self.state.read()
    }

    pub fn dialect(&self) -> Dialect {
        self.state.read().dialect
    }

    /// Current numeric syntax mode.
    pub fn mode(&self) -> i32 {
        self.dialect().mode()
    }

    /// Keyword table a scanner set up now would use.
    pub fn keyword_table(&self) -> &'static KeywordTable {
        self.dialect().keywords()
    }

    /// Switch to the dialect numbered `mode`.
    ///
    /// Setting the current mode again is a no-op. An unknown mode leaves the
    /// state untouched.
    pub fn set_mode(&self, mode: i32) -> Result<(), ModeRangeError> {
        let dialect = Dialect::from_mode(mode).ok_or(ModeRangeError(mode))?;
        self.set_dialect(dialect);
        Ok(())
    }

    pub fn set_dialect(&self, dialect: Dialect) {
        let mut state = self.state.write();
        if state.dialect != dialect {
            debug!(from = %state.dialect, to = %dialect, "switching syntax mode");
            state.dialect = dialect;
        }
    }

    pub fn autoselect(&self) -> bool {
        self.state.read().autoselect
    }

    pub fn set_autoselect(&self, enabled: bool) {
        self.state.write().autoselect = enabled;
    }
}

impl Default for SyntaxModeController {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: SyntaxModeController = SyntaxModeController::new();

/// The process-wide controller.
pub fn global() -> &'static SyntaxModeController {
    &GLOBAL
}

pub fn get_syntax_mode() -> i32 {
    GLOBAL.mode()
}

pub fn set_syntax_mode(mode: i32) -> Result<(), ModeRangeError> {
    GLOBAL.set_mode(mode)
}

pub fn get_syntax_autoselect() -> bool {
    GLOBAL.autoselect()
}

pub fn set_syntax_autoselect(enabled: bool) {
    GLOBAL.set_autoselect(enabled);
}
