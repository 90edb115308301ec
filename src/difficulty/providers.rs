//! Collaborator interfaces for the difficulty model.
//!
//! The long-lived player state (streaks, exploit memory, progression XP)
//! lives outside this crate. The session only reads small derived values
//! through these traits and forwards game outcomes back.

use super::{AdaptiveAdjustment, ProgressionBoost};
use crate::types::{Board, Move};

/// How a finished game ended, from the engine's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    EngineWin,
    EngineLoss,
    Draw,
}

/// Label for a recognized repeated-strategy pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternLabel(pub String);

impl From<&str> for PatternLabel {
    fn from(s: &str) -> Self {
        PatternLabel(s.to_owned())
    }
}

/// Recent-outcome (win/loss streak) state provider.
pub trait AdaptiveSource {
    /// Current per-move deltas derived from recent outcomes.
    fn adjustment(&self) -> AdaptiveAdjustment;

    /// Record a finished game so future adjustments can react to it.
    fn record_outcome(&mut self, outcome: GameOutcome, move_count: u32, opening_moves: &[Move]);
}

/// Player-progression state provider.
pub trait ProgressionSource {
    /// Current progression level (strengthens the engine independent of
    /// the power dial).
    fn level(&self) -> u32;

    /// Current progression-derived boost.
    fn boost(&self) -> ProgressionBoost;
}

/// Recognizer for repeated player strategies that game the bot's
/// weaknesses.
pub trait ExploitDetector {
    /// Inspect the current position and the game's move history; a label
    /// means the next move gets the exploit override (deeper search, no
    /// blunders).
    fn detect_pattern(&self, board: &Board, history: &[Move]) -> Option<PatternLabel>;
}
