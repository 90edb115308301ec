//! Performance log and aggregate metrics.
//!
//! One entry per orchestrated move, ring-bounded to the last 50, plus a
//! separate power/level history bounded to the last 20 changes. Everything
//! here is observational: degradation paths (timeouts, fallbacks, blunders)
//! are policy, and this log is where they stay visible.

use std::collections::{BTreeMap, VecDeque};
use std::time::{SystemTime, UNIX_EPOCH};

/// Per-move log entries kept.
const ENTRY_LIMIT: usize = 50;

/// Power/level samples kept.
const POWER_HISTORY_LIMIT: usize = 20;

/// One orchestrated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerfEntry {
    pub move_time_ms: u64,
    pub depth: u32,
    pub power: u32,
    pub cache_hit: bool,
    pub lightweight: bool,
}

/// A power/level change, stamped with unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerSample {
    pub power: u32,
    pub level: u32,
    pub timestamp_ms: u64,
}

/// Read-only aggregate view over the log.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetrics {
    pub avg_think_time_ms: f64,
    pub cache_hit_rate_pct: f64,
    pub lightweight_rate_pct: f64,
    /// (depth, move count), ascending by depth.
    pub depth_distribution: Vec<(u32, u64)>,
    pub power_history: Vec<PowerSample>,
}

/// Ring-bounded per-session telemetry.
#[derive(Debug, Default)]
pub struct PerformanceLog {
    entries: VecDeque<PerfEntry>,
    power_history: VecDeque<PowerSample>,
}

fn unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl PerformanceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move entry, dropping the oldest past the ring bound.
    pub fn record(&mut self, entry: PerfEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > ENTRY_LIMIT {
            self.entries.pop_front();
        }
    }

    /// Append a power/level sample if the power differs from the previous
    /// sample.
    pub fn record_power(&mut self, power: u32, level: u32) {
        if self.power_history.back().map(|s| s.power) == Some(power) {
            return;
        }
        self.power_history.push_back(PowerSample {
            power,
            level,
            timestamp_ms: unix_ms(),
        });
        while self.power_history.len() > POWER_HISTORY_LIMIT {
            self.power_history.pop_front();
        }
    }

    /// Most recent move entry.
    pub fn last(&self) -> Option<&PerfEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregate the current window.
    pub fn metrics(&self) -> PerformanceMetrics {
        let total = self.entries.len();
        if total == 0 {
            return PerformanceMetrics {
                avg_think_time_ms: 0.0,
                cache_hit_rate_pct: 0.0,
                lightweight_rate_pct: 0.0,
                depth_distribution: Vec::new(),
                power_history: self.power_history.iter().copied().collect(),
            };
        }

        let time_sum: u64 = self.entries.iter().map(|e| e.move_time_ms).sum();
        let hits = self.entries.iter().filter(|e| e.cache_hit).count();
        let light = self.entries.iter().filter(|e| e.lightweight).count();

        let mut depths: BTreeMap<u32, u64> = BTreeMap::new();
        for e in &self.entries {
            *depths.entry(e.depth).or_insert(0) += 1;
        }

        PerformanceMetrics {
            avg_think_time_ms: time_sum as f64 / total as f64,
            cache_hit_rate_pct: hits as f64 * 100.0 / total as f64,
            lightweight_rate_pct: light as f64 * 100.0 / total as f64,
            depth_distribution: depths.into_iter().collect(),
            power_history: self.power_history.iter().copied().collect(),
        }
    }

    /// Drop everything. Called on game reset.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.power_history.clear();
    }
}
