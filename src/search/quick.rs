//! Lightweight heuristic selector.
//!
//! Used instead of full search when power < 40. Each legal move gets a
//! cheap score: random jitter in [0,10), the captured piece's value if any,
//! and a flat bonus for landing on a center square. The jitter keeps weak
//! play varied; the capture and center terms keep it from looking random.
//!
//! Depth, multi-PV and blunder policy do not apply on this path.

use crate::types::{piece_value, Board, Move, MoveGen, Square};
use rand::Rng;

/// Bonus for moving to one of the four central squares.
const CENTER_BONUS: f64 = 20.0;

const CENTER_SQUARES: [Square; 4] = [Square::E4, Square::E5, Square::D4, Square::D5];

/// Pick a move by cheap per-move scoring. Returns `None` only when the
/// position has no legal moves.
pub fn quick_select<R: Rng>(board: &Board, rng: &mut R) -> Option<Move> {
    let mut best: Option<(Move, f64)> = None;

    for m in MoveGen::new_legal(board) {
        let mut score = rng.gen::<f64>() * 10.0;
        if let Some(victim) = board.piece_on(m.get_dest()) {
            score += piece_value(victim) as f64;
        }
        if CENTER_SQUARES.contains(&m.get_dest()) {
            score += CENTER_BONUS;
        }
        match best {
            Some((_, s)) if s >= score => {}
            _ => best = Some((m, score)),
        }
    }

    best.map(|(m, _)| m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::str::FromStr;

    #[test]
    fn test_returns_legal_move() {
        let board = Board::default();
        let mut rng = StdRng::seed_from_u64(7);
        let m = quick_select(&board, &mut rng).expect("moves exist");
        assert!(MoveGen::new_legal(&board).any(|lm| lm == m));
    }

    #[test]
    fn test_big_capture_beats_jitter() {
        // Jitter tops out at 10 and the center bonus at 20; a hanging queen
        // (900) always wins the scoring.
        let board = Board::from_str("rnb1kbnr/pppp1ppp/8/3q4/8/2N5/PPPPPPPP/R1BQKBNR w KQkq - 0 1")
            .expect("valid fen");
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let m = quick_select(&board, &mut rng).expect("moves exist");
            assert_eq!(m.get_dest(), Square::D5);
        }
    }

    #[test]
    fn test_no_moves_yields_none() {
        // Fool's mate: white is checkmated, nothing to select
        let board = Board::from_str("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("valid fen");
        let mut rng = StdRng::seed_from_u64(7);
        assert!(quick_select(&board, &mut rng).is_none());
    }
}
