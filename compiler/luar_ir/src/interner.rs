//! Sharded byte-string interner.
//!
//! Names, string literals and mangled symbols all live here. Lua strings are
//! arbitrary byte sequences, so the interner stores `[u8]` rather than `str`.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-shard storage for interned byte strings.
struct InternShard {
    /// Map from content to local index.
    map: FxHashMap<&'static [u8], u32>,
    /// Storage for contents, indexed by local index.
    strings: Vec<&'static [u8]>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Shard exceeded its local index space.
    ShardOverflow { shard_idx: usize, count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::ShardOverflow { shard_idx, count } => write!(
                f,
                "interner shard {} exceeded capacity: {} strings, max is {}",
                shard_idx,
                count,
                Name::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        let empty: &'static [u8] = b"";
        shard.map.insert(empty, 0);
        shard.strings.push(empty);
        shard
    }
}

/// Sharded string interner for concurrent access.
///
/// Interned contents are leaked and never freed, so lookups hand out
/// `'static` slices. Each shard sits behind its own `RwLock`; a single
/// interner can be shared by scanners running on different threads.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
    total_count: AtomicUsize,
}

impl StringInterner {
    /// Create an interner holding only the empty string.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });

        Self {
            shards,
            total_count: AtomicUsize::new(1),
        }
    }

    #[inline]
    fn shard_for(bytes: &[u8]) -> usize {
        let mut hash = 0u32;
        for &byte in bytes.iter().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::NUM_SHARDS
    }

    /// Try to intern a byte string, returning its Name or an error on overflow.
    pub fn try_intern(&self, bytes: &[u8]) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(bytes);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        {
            let guard = shard.read();
            if let Some(&local) = guard.map.get(bytes) {
                return Ok(Name::new(shard_idx_u32, local));
            }
        }

        let mut guard = shard.write();

        // Another writer may have won the race between the two locks.
        if let Some(&local) = guard.map.get(bytes) {
            return Ok(Name::new(shard_idx_u32, local));
        }

        let local = u32::try_from(guard.strings.len())
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow {
                shard_idx,
                count: guard.strings.len(),
            })?;

        let leaked: &'static [u8] = Box::leak(bytes.to_vec().into_boxed_slice());
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);

        self.total_count.fetch_add(1, Ordering::Relaxed);

        Ok(Name::new(shard_idx_u32, local))
    }

    /// Intern a byte string, returning its Name.
    ///
    /// # Panics
    /// Panics if a shard runs out of local indices. Use `try_intern` for
    /// fallible interning.
    #[inline]
    pub fn intern(&self, bytes: &[u8]) -> Name {
        self.try_intern(bytes).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Intern a UTF-8 string.
    #[inline]
    pub fn intern_str(&self, s: &str) -> Name {
        self.intern(s.as_bytes())
    }

    /// Look up the bytes for a Name.
    pub fn lookup(&self, name: Name) -> &'static [u8] {
        let guard = self.shards[name.shard()].read();
        guard.strings[name.local()]
    }

    /// Look up a Name as text, replacing invalid UTF-8 sequences.
    pub fn lookup_lossy(&self, name: Name) -> Cow<'static, str> {
        String::from_utf8_lossy(self.lookup(name))
    }

    /// Get the number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Check if the interner only holds the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
