//! Adaptive solo-opponent chess engine.
//!
//! Picks a legal move for a board position at a continuous "power" level
//! (0 = weakest, 100 = strongest), with human-like imperfection at low
//! power and near-optimal play at high power, inside a bounded time budget.
//!
//! The `chess` crate is the rules engine (legality, move application,
//! game-over detection, position hashing); this crate owns only move
//! *selection*: evaluation, time-boxed alpha-beta search, a small TTL move
//! cache, the multi-parameter difficulty model, and the orchestration
//! around them. Long-lived player state (streaks, exploit memory,
//! progression) stays outside, behind the traits in [`difficulty`].
//!
//! # Example
//! ```no_run
//! use sparring::{Board, EngineSession};
//!
//! let mut session = EngineSession::new();
//! let board = Board::default();
//! if let Some(mv) = session.choose_move(&board, 65) {
//!     let board = board.make_move_new(mv);
//!     session.record_move(mv);
//!     # let _ = board;
//! }
//! ```
//!
//! Sessions are per-game: each owns its cache and telemetry, so concurrent
//! games in one process never share state. `choose_move` blocks for its
//! pacing delay (a plain sleep); run it off the UI thread if the caller
//! has one.

pub mod cache;
pub mod difficulty;
pub mod eval;
pub mod search;
pub mod session;
pub mod telemetry;
pub mod types;

pub use difficulty::{
    AdaptiveAdjustment, AdaptiveSource, DifficultyConfig, ExploitDetector, GameOutcome,
    PatternLabel, ProgressionBoost, ProgressionSource,
};
pub use session::EngineSession;
pub use telemetry::{PerfEntry, PerformanceMetrics, PowerSample};
pub use types::{Board, Fingerprint, Move, ScoredMove, Value};
