//! Static position evaluation.
//!
//! Scores a board snapshot from a fixed perspective (the engine's side):
//! - Material (centipawn values from `types`)
//! - Piece-square bonuses for pawns and knights, mirrored for the other side
//! - Mobility: ±10 per legal move for the side to move
//!
//! This is a pure function of the position. It is the leaf evaluation used
//! whenever search depth is exhausted or the time budget runs out mid-search,
//! so it must stay cheap. Scores are plain integers; terminal positions are
//! scored statically like any other (no mate encoding).

use crate::types::{piece_value, Board, Color, MoveGen, Piece, Square, Value};

/// Centipawns per legal move for the side to move.
const MOBILITY_WEIGHT: Value = 10;

// Piece-square tables, laid out rank 8 first (white's perspective).
// Only pawns and knights carry positional bonuses here.

#[rustfmt::skip]
const PAWN_PST: [Value; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_PST: [Value; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

/// Positional bonus for a piece on a square. Tables are stored rank 8 first,
/// so white squares index through a vertical flip and black squares directly
/// (the mirrored view of the same table).
#[inline]
fn pst_bonus(piece: Piece, sq: Square, color: Color) -> Value {
    let table: &[Value; 64] = match piece {
        Piece::Pawn => &PAWN_PST,
        Piece::Knight => &KNIGHT_PST,
        _ => return 0,
    };
    let idx = match color {
        Color::White => sq.to_index() ^ 56,
        Color::Black => sq.to_index(),
    };
    table[idx]
}

/// Evaluate the position from `perspective`'s point of view.
///
/// Positive scores favor `perspective`. The search layer is responsible for
/// alternating min/max per ply; this function never flips sign itself.
pub fn evaluate(board: &Board, perspective: Color) -> Value {
    let mut score: Value = 0;

    for color in [Color::White, Color::Black] {
        let sign: Value = if color == perspective { 1 } else { -1 };
        for piece in [
            Piece::Pawn,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
            Piece::King,
        ] {
            let pieces = *board.pieces(piece) & *board.color_combined(color);
            for sq in pieces {
                score += sign * (piece_value(piece) + pst_bonus(piece, sq, color));
            }
        }
    }

    // Mobility for the side to move only
    let mobility = MoveGen::new_legal(board).len() as Value * MOBILITY_WEIGHT;
    if board.side_to_move() == perspective {
        score + mobility
    } else {
        score - mobility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_starting_position_is_mobility_only() {
        // Material and PST terms cancel by symmetry; white to move has
        // 20 legal moves.
        let board = Board::default();
        assert_eq!(evaluate(&board, Color::White), 20 * MOBILITY_WEIGHT);
    }

    #[test]
    fn test_perspective_antisymmetry() {
        let board = Board::from_str("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
            .expect("valid fen");
        assert_eq!(
            evaluate(&board, Color::White),
            -evaluate(&board, Color::Black)
        );
    }

    #[test]
    fn test_material_advantage_dominates() {
        // Black is missing the queen
        let board = Board::from_str("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("valid fen");
        assert!(evaluate(&board, Color::White) > 500);
        assert!(evaluate(&board, Color::Black) < -500);
    }

    #[test]
    fn test_pst_rewards_center_pawn() {
        // Identical material, but white's e-pawn on e4 (center) vs h3
        let center = Board::from_str("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")
            .expect("valid fen");
        let edge = Board::from_str("rnbqkbnr/pppppppp/8/8/8/7P/PPPPPPP1/RNBQKBNR b KQkq - 0 1")
            .expect("valid fen");
        let center_eval = evaluate(&center, Color::White);
        let edge_eval = evaluate(&edge, Color::White);
        assert!(center_eval > edge_eval);
    }
}
