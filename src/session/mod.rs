//! Move orchestration.
//!
//! [`EngineSession`] is the public entry point: given a board and a power
//! level it picks a legal move within a bounded time budget. One session is
//! constructed per game and owns its own cache, telemetry and RNG, so
//! concurrent games never share state.
//!
//! A `choose_move` call runs a fixed phase sequence:
//! cache lookup → difficulty resolution → lightweight or full search →
//! blunder check → multi-PV selection → anti-lag check → cache write →
//! log and return. Phases never interleave; the only suspension point is
//! the deliberate pacing sleep, which is decoupled from search compute so
//! total latency stays additive and bounded.

use crate::cache::MoveCache;
use crate::difficulty::{
    self, AdaptiveAdjustment, AdaptiveSource, DifficultyConfig, ExploitDetector, GameOutcome,
    ProgressionBoost, ProgressionSource,
};
use crate::search::{self, quick, SearchClock};
use crate::telemetry::{PerfEntry, PerformanceLog, PerformanceMetrics};
use crate::types::{Board, Move, MoveGen, ScoredMove};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Hard wall-clock budget for the search phase of one call.
const HARD_SEARCH_LIMIT_MS: u64 = 3000;

/// Total elapsed time past which the anti-lag fallback replaces the
/// search result.
const ANTI_LAG_LIMIT_MS: u64 = 3000;

/// Below this power the lightweight selector replaces full search.
const LIGHTWEIGHT_POWER_CEILING: u32 = 40;

/// Chance of doubling the pacing delay, modeling hesitation.
const HESITATION_CHANCE: f64 = 0.1;

/// The blunder pool is the worst-scoring tail of the sorted move list,
/// starting at this fraction of its length.
const BLUNDER_POOL_START: f64 = 0.4;

/// Root candidates captured before search for the anti-lag fallback.
const FALLBACK_CANDIDATES: usize = 2;

/// Per-game adaptive opponent. See the module docs for the phase sequence.
pub struct EngineSession {
    cache: MoveCache,
    log: PerformanceLog,
    /// Moves played so far (both sides), fed to the exploit detector.
    history: Vec<Move>,
    rng: StdRng,
    /// When false, pacing delays are skipped (headless/test use).
    pacing: bool,
    adaptive: Option<Box<dyn AdaptiveSource>>,
    progression: Option<Box<dyn ProgressionSource>>,
    exploit: Option<Box<dyn ExploitDetector>>,
}

impl EngineSession {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic session for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            cache: MoveCache::new(),
            log: PerformanceLog::new(),
            history: Vec::new(),
            rng,
            pacing: true,
            adaptive: None,
            progression: None,
            exploit: None,
        }
    }

    /// Enable or disable pacing delays. On by default.
    pub fn set_pacing(&mut self, enabled: bool) {
        self.pacing = enabled;
    }

    pub fn set_adaptive_source(&mut self, source: Box<dyn AdaptiveSource>) {
        self.adaptive = Some(source);
    }

    pub fn set_progression_source(&mut self, source: Box<dyn ProgressionSource>) {
        self.progression = Some(source);
    }

    pub fn set_exploit_detector(&mut self, detector: Box<dyn ExploitDetector>) {
        self.exploit = Some(detector);
    }

    /// Choose a legal move for the side to move, or `None` if the position
    /// is terminal. This is the only terminal signal; callers are expected
    /// to check game over before invoking.
    pub fn choose_move(&mut self, board: &Board, power: u32) -> Option<Move> {
        let started = Instant::now();
        let legal: Vec<Move> = MoveGen::new_legal(board).collect();
        if legal.is_empty() {
            debug!("choose_move on terminal position");
            return None;
        }

        let level = self.progression.as_ref().map_or(0, |p| p.level());
        let fingerprint = board.get_hash();

        // CacheLookup: a hit short-circuits everything, including pacing
        if let Some(hit) = self.cache.get(fingerprint) {
            if legal.contains(&hit.best_move) {
                let mv = hit.best_move;
                debug!("cache hit for {:016x}", fingerprint);
                self.log.record(PerfEntry {
                    move_time_ms: 0,
                    depth: 0,
                    power,
                    cache_hit: true,
                    lightweight: false,
                });
                self.log.record_power(power, level);
                return Some(mv);
            }
        }

        self.cache.cleanup();

        let adjustment = self
            .adaptive
            .as_ref()
            .map_or_else(AdaptiveAdjustment::default, |a| a.adjustment());
        let boost = self
            .progression
            .as_ref()
            .map_or_else(ProgressionBoost::default, |p| p.boost());
        let pattern = self
            .exploit
            .as_ref()
            .and_then(|d| d.detect_pattern(board, &self.history));
        if let Some(label) = &pattern {
            debug!("exploit pattern flagged: {}", label.0);
        }
        let config = difficulty::resolve(power, level, &adjustment, &boost, pattern.is_some());

        // Fallback candidates, in rules-engine order, captured before search
        let fallback: Vec<Move> = legal.iter().take(FALLBACK_CANDIDATES).copied().collect();

        // Lightweight path: no depth, multi-PV or blunder policy
        if power < LIGHTWEIGHT_POWER_CEILING {
            let delay = self.sample_think_delay(&config, false);
            self.pace(delay);
            let mv = quick::quick_select(board, &mut self.rng)?;
            self.log.record(PerfEntry {
                move_time_ms: started.elapsed().as_millis() as u64,
                depth: 0,
                power,
                cache_hit: false,
                lightweight: true,
            });
            self.log.record_power(power, level);
            return Some(mv);
        }

        // Full search path
        let delay = self.sample_think_delay(&config, true);
        self.pace(delay);

        let clock = SearchClock::start(HARD_SEARCH_LIMIT_MS.min(config.max_think_ms));
        let scored = search::search_root(board, config.depth, &clock);

        let total_ms = started.elapsed().as_millis() as u64;
        let chosen = self.apply_selection_policy(&config, &scored, &fallback, total_ms);

        self.cache.put(fingerprint, chosen.mv, chosen.score);
        self.log.record(PerfEntry {
            move_time_ms: started.elapsed().as_millis() as u64,
            depth: config.depth,
            power,
            cache_hit: false,
            lightweight: false,
        });
        self.log.record_power(power, level);
        Some(chosen.mv)
    }

    /// Blunder check, multi-PV selection and anti-lag fallback, in that
    /// order. `scored` must be sorted best-first and non-empty.
    fn apply_selection_policy(
        &mut self,
        config: &DifficultyConfig,
        scored: &[ScoredMove],
        fallback: &[Move],
        total_elapsed_ms: u64,
    ) -> ScoredMove {
        let mut chosen = if config.blunder_chance > 0.0
            && self.rng.gen::<f64>() < config.blunder_chance
        {
            // Deliberate weak move: uniform pick from the worst 60%
            let pool_start = (scored.len() as f64 * BLUNDER_POOL_START).floor() as usize;
            let pool = &scored[pool_start..];
            let pick = pool[self.rng.gen_range(0..pool.len())];
            debug!("blunder injected ({} candidates)", pool.len());
            pick
        } else {
            let top = &scored[..config.multi_pv.min(scored.len())];
            if config.randomness > 0.0 && top.len() > 1 && self.rng.gen::<f64>() < config.randomness
            {
                top[self.rng.gen_range(0..top.len())]
            } else {
                top[0]
            }
        };

        // Anti-lag: the call overran its budget, discard the search result
        if total_elapsed_ms > ANTI_LAG_LIMIT_MS {
            let mv = fallback[0];
            let score = scored.iter().find(|s| s.mv == mv).map_or(0, |s| s.score);
            debug!("anti-lag fallback after {}ms", total_elapsed_ms);
            chosen = ScoredMove { mv, score };
        }

        chosen
    }

    /// Sample a pacing delay from the configured think-time range;
    /// occasionally doubled on the full-search path.
    fn sample_think_delay(&mut self, config: &DifficultyConfig, hesitation: bool) -> Duration {
        let span = config.max_think_ms.saturating_sub(config.min_think_ms);
        let mut ms = config.min_think_ms;
        if span > 0 {
            ms += self.rng.gen_range(0..=span);
        }
        if hesitation && self.rng.gen::<f64>() < HESITATION_CHANCE {
            ms *= 2;
        }
        Duration::from_millis(ms)
    }

    /// Sleep for the pacing delay, yielding the thread to the host.
    fn pace(&self, delay: Duration) {
        if self.pacing && !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    /// Tell the session a move was played (either side). The exploit
    /// detector reads this history.
    pub fn record_move(&mut self, mv: Move) {
        self.history.push(mv);
    }

    /// Forward a finished game to the adaptive source.
    pub fn record_outcome(&mut self, outcome: GameOutcome, move_count: u32, opening: &[Move]) {
        if let Some(adaptive) = self.adaptive.as_mut() {
            adaptive.record_outcome(outcome, move_count, opening);
        }
    }

    /// Aggregate telemetry for this session.
    pub fn metrics(&self) -> PerformanceMetrics {
        self.log.metrics()
    }

    /// Most recent per-move log entry.
    pub fn last_log_entry(&self) -> Option<PerfEntry> {
        self.log.last().copied()
    }

    /// Cached positions currently held.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Start a new game: clears the cache, the log and the move history.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.log.clear();
        self.history.clear();
        debug!("session reset");
    }
}

impl Default for EngineSession {
    fn default() -> Self {
        Self::new()
    }
}
