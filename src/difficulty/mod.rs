//! Difficulty model.
//!
//! Maps the continuous power dial (0–100), the player's progression level
//! and the externally owned adaptive/progression deltas to one concrete
//! [`DifficultyConfig`]. The mapping is a pure reducer: base curve, then
//! additive adjustments with re-clamping, then the exploit override last.
//! Nothing here is persisted; the config is recomputed for every move.

pub mod providers;

pub use providers::{
    AdaptiveSource, ExploitDetector, GameOutcome, PatternLabel, ProgressionSource,
};

/// Depth bounds after all adjustments (the exploit override may push past
/// the base ceiling of 24, up to 28).
const DEPTH_FLOOR: i32 = 1;
const DEPTH_CEILING: i32 = 24;
const EXPLOIT_DEPTH_CEILING: i32 = 28;
const EXPLOIT_DEPTH_BONUS: i32 = 4;

/// Think-time floors for the speed-boost reduction.
const SPEED_BOOST_MIN_FLOOR_MS: i64 = 300;
const SPEED_BOOST_MAX_FLOOR_MS: i64 = 500;

/// Concrete search/selection configuration for a single move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyConfig {
    /// Search depth in plies, always within [1, 28].
    pub depth: u32,
    /// Number of top candidates kept for randomized selection (1, 3 or 4).
    pub multi_pv: usize,
    /// Probability of picking among the multi-PV candidates instead of the
    /// single best. [0, 1].
    pub randomness: f64,
    /// Probability of deliberately playing a weak move. [0, 1].
    pub blunder_chance: f64,
    /// Pacing-delay range in milliseconds.
    pub min_think_ms: u64,
    pub max_think_ms: u64,
}

/// Per-move deltas derived from the adaptive (anti-exploitation / streak)
/// state. Externally owned; the core only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdaptiveAdjustment {
    pub depth: i32,
    pub randomness: f64,
    pub blunder: f64,
    pub think_time_ms: i64,
}

/// Long-lived strengthening derived from the player's progression.
/// `speed_boost` is in seconds; each second shaves 1000 ms off both ends
/// of the think-time range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressionBoost {
    pub depth: i32,
    pub blunder_reduction: f64,
    pub speed_boost: f64,
}

/// Resolve the configuration for one move.
///
/// `exploit` is true when the exploit detector flagged the current move;
/// the override (deeper search, no blunders) is applied last and wins over
/// everything else.
pub fn resolve(
    power: u32,
    level: u32,
    adaptive: &AdaptiveAdjustment,
    boost: &ProgressionBoost,
    exploit: bool,
) -> DifficultyConfig {
    let power = power.min(100);
    let scaled = (power as f64 / 100.0).powf(1.5);

    // Base curve
    let base_depth = (2 + power as i32 / 5 + level as i32 / 4).clamp(2, DEPTH_CEILING);
    let multi_pv = match power {
        0..=33 => 4,
        34..=66 => 3,
        _ => 1,
    };
    let base_randomness = (0.6 - scaled * 0.6).max(0.0);
    let base_blunder = if power <= 50 {
        (0.45 - (power as f64 / 50.0) * 0.45).max(0.0)
    } else {
        0.0
    };

    let min_think = (100.0 + scaled * 1400.0).round();
    let raw_max_think = 250.0 + scaled * 2750.0;
    let variance_reduction = (level as f64 * 0.02).min(0.7);
    let max_think = (min_think + (raw_max_think - min_think) * (1.0 - variance_reduction)).round();

    // Additive adjustments, each re-clamped
    let mut depth = (base_depth + adaptive.depth + boost.depth).clamp(DEPTH_FLOOR, DEPTH_CEILING);
    let randomness = (base_randomness + adaptive.randomness).clamp(0.0, 1.0);
    let mut blunder_chance =
        (base_blunder + adaptive.blunder - boost.blunder_reduction).clamp(0.0, 1.0);

    let mut min_think_ms = (min_think as i64 + adaptive.think_time_ms).max(0);
    let mut max_think_ms = (max_think as i64 + adaptive.think_time_ms).max(min_think_ms);

    let speed_boost_ms = (boost.speed_boost * 1000.0).round() as i64;
    if speed_boost_ms > 0 {
        min_think_ms = (min_think_ms - speed_boost_ms).max(SPEED_BOOST_MIN_FLOOR_MS);
        max_think_ms = (max_think_ms - speed_boost_ms).max(SPEED_BOOST_MAX_FLOOR_MS);
    }

    // Exploit override wins over everything above
    if exploit {
        depth = (depth + EXPLOIT_DEPTH_BONUS).min(EXPLOIT_DEPTH_CEILING);
        blunder_chance = 0.0;
    }

    DifficultyConfig {
        depth: depth as u32,
        multi_pv,
        randomness,
        blunder_chance,
        min_think_ms: min_think_ms as u64,
        max_think_ms: max_think_ms as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(power: u32, level: u32) -> DifficultyConfig {
        resolve(
            power,
            level,
            &AdaptiveAdjustment::default(),
            &ProgressionBoost::default(),
            false,
        )
    }

    #[test]
    fn test_depth_monotonic_in_power() {
        for p in 0..100 {
            assert!(base(p + 1, 3).depth >= base(p, 3).depth);
        }
    }

    #[test]
    fn test_no_blunders_above_half_power() {
        for p in 51..=100 {
            assert_eq!(base(p, 0).blunder_chance, 0.0);
        }
        assert!(base(10, 0).blunder_chance > 0.0);
    }

    #[test]
    fn test_multi_pv_breakpoints() {
        assert_eq!(base(0, 0).multi_pv, 4);
        assert_eq!(base(33, 0).multi_pv, 4);
        assert_eq!(base(34, 0).multi_pv, 3);
        assert_eq!(base(66, 0).multi_pv, 3);
        assert_eq!(base(67, 0).multi_pv, 1);
        assert_eq!(base(100, 0).multi_pv, 1);
    }

    #[test]
    fn test_low_power_scenario() {
        // power=10, level=1: lightweight territory with a short think range
        let cfg = base(10, 1);
        assert_eq!(cfg.depth, 4);
        assert_eq!(cfg.multi_pv, 4);
        assert_eq!(cfg.min_think_ms, 144);
        assert_eq!(cfg.max_think_ms, 333);
        assert!((cfg.blunder_chance - 0.36).abs() < 1e-9);
    }

    #[test]
    fn test_high_power_scenario() {
        // power=90, level=1: full search, single PV, no blunders
        let cfg = base(90, 1);
        assert_eq!(cfg.depth, 20);
        assert_eq!(cfg.multi_pv, 1);
        assert_eq!(cfg.blunder_chance, 0.0);
        assert_eq!(cfg.min_think_ms, 1295);
        assert_eq!(cfg.max_think_ms, 2572);
    }

    #[test]
    fn test_exploit_override() {
        for power in [0, 30, 90, 100] {
            let plain = base(power, 0);
            let flagged = resolve(
                power,
                0,
                &AdaptiveAdjustment::default(),
                &ProgressionBoost::default(),
                true,
            );
            assert_eq!(
                flagged.depth,
                (plain.depth + 4).min(EXPLOIT_DEPTH_CEILING as u32)
            );
            assert_eq!(flagged.blunder_chance, 0.0);
        }
    }

    #[test]
    fn test_exploit_can_exceed_base_ceiling() {
        // High power and level max out the base depth at 24; the override
        // pushes to 28
        let cfg = resolve(
            100,
            40,
            &AdaptiveAdjustment::default(),
            &ProgressionBoost::default(),
            true,
        );
        assert_eq!(cfg.depth, 28);
    }

    #[test]
    fn test_speed_boost_floors() {
        let boost = ProgressionBoost {
            speed_boost: 2.0,
            ..Default::default()
        };
        let cfg = resolve(90, 1, &AdaptiveAdjustment::default(), &boost, false);
        assert_eq!(cfg.min_think_ms, 300); // 1295 - 2000, floored
        assert_eq!(cfg.max_think_ms, 572); // 2572 - 2000
    }

    #[test]
    fn test_adjustments_are_reclamped() {
        let adaptive = AdaptiveAdjustment {
            depth: 100,
            randomness: 5.0,
            blunder: 5.0,
            think_time_ms: -100_000,
        };
        let cfg = resolve(50, 0, &adaptive, &ProgressionBoost::default(), false);
        assert_eq!(cfg.depth, 24);
        assert_eq!(cfg.randomness, 1.0);
        assert_eq!(cfg.blunder_chance, 1.0);
        assert_eq!(cfg.min_think_ms, 0);
        assert!(cfg.max_think_ms >= cfg.min_think_ms);
    }

    #[test]
    fn test_variance_tightens_with_level() {
        // Higher level narrows the think-time range toward its minimum
        let low = base(60, 0);
        let high = base(60, 30);
        assert_eq!(low.min_think_ms, high.min_think_ms);
        assert!(high.max_think_ms < low.max_think_ms);
    }
}
