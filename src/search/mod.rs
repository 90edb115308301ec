//! Search module for the adaptive opponent.
//!
//! # Architecture
//! - `minimax`: time-boxed minimax with alpha-beta pruning and a root scorer
//! - `ordering`: captures-first move ordering
//! - `quick`: lightweight heuristic selector used at low power
//! - `SearchClock`: wall-clock budget checked at every node entry
//!
//! Running out of time is not an error: the search degrades to a static
//! evaluation of whatever node it is in, which bounds worst-case latency
//! even on deep or wide subtrees.

mod minimax;
pub mod ordering;
pub mod quick;

pub use minimax::{minimax, search_root};

use crate::types::Value;
use std::time::{Duration, Instant};

/// Alpha-beta bounds. Large enough to dominate any static evaluation,
/// small enough to never overflow when compared or negated.
pub const INFINITY: Value = 1_000_000;

/// Wall-clock budget for one search phase.
///
/// Every root move searched in a `choose_move` call shares one clock, so the
/// whole search phase is bounded by the configured limit.
#[derive(Debug, Clone)]
pub struct SearchClock {
    start: Instant,
    limit: Duration,
}

impl SearchClock {
    /// Start a clock with the given budget in milliseconds.
    pub fn start(limit_ms: u64) -> Self {
        Self {
            start: Instant::now(),
            limit: Duration::from_millis(limit_ms),
        }
    }

    /// Has the budget been spent?
    #[inline]
    pub fn expired(&self) -> bool {
        self.start.elapsed() > self.limit
    }

    /// Milliseconds since the clock was started.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
