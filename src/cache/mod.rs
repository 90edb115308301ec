//! Move cache: fingerprint → best-move memo with TTL and bounded size.
//!
//! Keyed by the rules engine's position hash. Entries expire after five
//! minutes and the table is capped at 20 entries with oldest-first eviction.
//! This is a coarse policy, not a strict LRU: reads never evict, writes
//! trigger cleanup and at most one eviction, and `cleanup` is also invoked
//! once per orchestration call before a miss proceeds to search.
//!
//! The key carries no power level: a position cached at one power is
//! served unchanged at another within the TTL.

use crate::types::{Fingerprint, Move, Value};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Entries older than this are never served and are dropped by `cleanup`.
const ENTRY_TTL: Duration = Duration::from_millis(300_000);

/// Hard cap on the number of cached positions.
const MAX_ENTRIES: usize = 20;

/// A cached search outcome for one position.
#[derive(Debug, Clone, Copy)]
pub struct CachedEvaluation {
    pub best_move: Move,
    pub score: Value,
    created: Instant,
}

impl CachedEvaluation {
    #[inline]
    fn age(&self, now: Instant) -> Duration {
        now.duration_since(self.created)
    }
}

/// Bounded, TTL-expiring table of best moves per position.
pub struct MoveCache {
    entries: HashMap<Fingerprint, CachedEvaluation>,
    ttl: Duration,
    capacity: usize,
}

impl MoveCache {
    pub fn new() -> Self {
        Self::with_limits(ENTRY_TTL, MAX_ENTRIES)
    }

    /// Custom TTL and capacity, used by tests that cannot wait out the
    /// five-minute default.
    pub fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            ttl,
            capacity,
        }
    }

    /// Look up a position. Expired entries are treated as misses but are
    /// not removed here; reads never evict.
    pub fn get(&self, fingerprint: Fingerprint) -> Option<&CachedEvaluation> {
        let now = Instant::now();
        self.entries
            .get(&fingerprint)
            .filter(|e| e.age(now) <= self.ttl)
    }

    /// Store a search outcome, then enforce TTL and the size cap.
    pub fn put(&mut self, fingerprint: Fingerprint, best_move: Move, score: Value) {
        self.entries.insert(
            fingerprint,
            CachedEvaluation {
                best_move,
                score,
                created: Instant::now(),
            },
        );
        self.cleanup();
        while self.entries.len() > self.capacity {
            self.evict_oldest();
        }
    }

    /// Drop every entry older than the TTL.
    pub fn cleanup(&mut self) {
        let now = Instant::now();
        let ttl = self.ttl;
        self.entries.retain(|_, e| e.age(now) <= ttl);
    }

    /// Remove the single oldest entry (by creation time).
    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, e)| e.created)
            .map(|(&fp, _)| fp);
        if let Some(fp) = oldest {
            self.entries.remove(&fp);
        }
    }

    /// Drop everything. Called on game reset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MoveCache {
    fn default() -> Self {
        Self::new()
    }
}
