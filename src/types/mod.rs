//! Core types for the adaptive opponent engine.
//!
//! The `chess` crate is the rules engine: it owns board representation,
//! legal-move generation, move application and game-over detection. This
//! module re-exports its types as the canonical ones and adds the small
//! engine-specific aliases used throughout the crate.

pub use chess::{BitBoard, Board, BoardStatus, ChessMove as Move, Color, MoveGen, Piece, Square};

/// Centipawn value type (scores, piece values)
pub type Value = i32;

/// Position fingerprint produced by the rules engine (`Board::get_hash`).
/// Used as the move-cache key.
pub type Fingerprint = u64;

// Piece values in centipawns (standard values)
pub const PAWN_VALUE: Value = 100;
pub const KNIGHT_VALUE: Value = 320;
pub const BISHOP_VALUE: Value = 330;
pub const ROOK_VALUE: Value = 500;
pub const QUEEN_VALUE: Value = 900;
pub const KING_VALUE: Value = 20000; // Arbitrary large value

/// Get the material value of a piece in centipawns
#[inline]
pub const fn piece_value(piece: Piece) -> Value {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}

/// A legal move paired with its search or heuristic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: Value,
}
