//! Handles for interned byte strings.
//!
//! A [`Name`] is what tokens carry instead of the text itself: four bytes,
//! `Copy`, and comparable without touching the
//! [`StringInterner`](crate::StringInterner) that owns the bytes.

use std::fmt;

/// Handle for a byte string held by a `StringInterner`.
///
/// The top `SHARD_BITS` bits pick the interner shard and the rest index
/// into it. Two names are equal exactly when they came from interning
/// equal byte strings in the same interner.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    const SHARD_BITS: u32 = 4;
    const LOCAL_BITS: u32 = u32::BITS - Self::SHARD_BITS;

    /// The empty string, interned by every interner up front.
    pub const EMPTY: Name = Name(0);

    /// Largest index within one shard.
    pub const MAX_LOCAL: u32 = (1 << Self::LOCAL_BITS) - 1;

    pub const NUM_SHARDS: usize = 1 << Self::SHARD_BITS;

    #[inline]
    pub const fn new(shard: u32, local: u32) -> Self {
        debug_assert!((shard as usize) < Self::NUM_SHARDS);
        debug_assert!(local <= Self::MAX_LOCAL);
        Name((shard << Self::LOCAL_BITS) | local)
    }

    #[inline]
    pub const fn shard(self) -> usize {
        (self.0 >> Self::LOCAL_BITS) as usize
    }

    #[inline]
    pub const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({}:{})", self.shard(), self.local())
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}
