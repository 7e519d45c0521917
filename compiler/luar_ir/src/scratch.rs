//! Scratch stacks shared with the bytecode-generating collaborator.
//!
//! The scanner allocates these when a chunk starts and drops them when it
//! ends, but never reads or writes their contents.

use super::Name;
use bitflags::bitflags;

/// Bytecode instruction paired with the source line it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BcInsLine {
    pub ins: u32,
    pub line: u32,
}

bitflags! {
    /// Variable/goto/label info bits of a [`VarInfo`].
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct VarFlags: u8 {
        /// Local variable is written after its declaration.
        const RW = 1 << 0;
        /// Entry is a pending `goto`.
        const GOTO = 1 << 1;
        /// Entry is a `::label::`.
        const LABEL = 1 << 2;
    }
}

/// Name and activation range of a local variable, goto or label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VarInfo {
    pub name: Name,
    /// First instruction where the variable is active.
    pub start_pc: u32,
    /// First instruction where the variable is dead.
    pub end_pc: u32,
    pub slot: u8,
    pub info: VarFlags,
}

/// The two growable stacks owned for the duration of one chunk.
#[derive(Debug, Default)]
pub struct CompileScratch {
    pub bc_lines: Vec<BcInsLine>,
    pub vars: Vec<VarInfo>,
}

impl CompileScratch {
    pub fn new() -> Self {
        Self::default()
    }
}
