//! Time-boxed minimax with alpha-beta pruning.
//!
//! Plain minimax with an explicit maximizing flag; the evaluator always
//! scores from the engine's perspective and this module alternates min/max
//! per ply. The elapsed-time check runs at every node entry, not only at
//! leaves, so a blown budget degrades to a static evaluation instead of
//! stalling. Interior nodes are not memoized; the only cache is the
//! top-level move cache owned by the session.

use super::{ordering, SearchClock, INFINITY};
use crate::eval::evaluate;
use crate::types::{Board, BoardStatus, Color, Move, MoveGen, ScoredMove, Value};
use std::cmp::Reverse;

/// Recursive minimax. `maximizing` is true when the side to move is the
/// engine (`perspective`). Returns a centipawn score for `perspective`.
pub fn minimax(
    board: &Board,
    depth: u32,
    mut alpha: Value,
    mut beta: Value,
    maximizing: bool,
    clock: &SearchClock,
    perspective: Color,
) -> Value {
    // Budget check on every node entry
    if clock.expired() {
        return evaluate(board, perspective);
    }

    if depth == 0 || board.status() != BoardStatus::Ongoing {
        return evaluate(board, perspective);
    }

    let mut moves: Vec<Move> = MoveGen::new_legal(board).collect();
    ordering::order_captures_first(board, &mut moves);

    if maximizing {
        let mut best = -INFINITY;
        for m in moves {
            let child = board.make_move_new(m);
            let score = minimax(&child, depth - 1, alpha, beta, false, clock, perspective);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for m in moves {
            let child = board.make_move_new(m);
            let score = minimax(&child, depth - 1, alpha, beta, true, clock, perspective);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Score every legal move for the side to move and return them sorted
/// best-first. All root moves share `clock`, so the whole call is bounded
/// by its budget.
pub fn search_root(board: &Board, depth: u32, clock: &SearchClock) -> Vec<ScoredMove> {
    let perspective = board.side_to_move();
    let mut moves: Vec<Move> = MoveGen::new_legal(board).collect();
    ordering::order_captures_first(board, &mut moves);

    let mut scored = Vec::with_capacity(moves.len());
    for m in moves {
        let child = board.make_move_new(m);
        let score = minimax(
            &child,
            depth.saturating_sub(1),
            -INFINITY,
            INFINITY,
            false,
            clock,
            perspective,
        );
        scored.push(ScoredMove { mv: m, score });
    }

    scored.sort_by_key(|s| Reverse(s.score));
    log::trace!(
        "root search: {} moves at depth {} in {}ms",
        scored.len(),
        depth,
        clock.elapsed_ms()
    );
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;
    use std::str::FromStr;

    #[test]
    fn test_root_finds_hanging_queen() {
        // Black queen on d5 is undefended; Nc3xd5 wins it outright
        let board = Board::from_str("rnb1kbnr/pppp1ppp/8/3q4/8/2N5/PPPPPPPP/R1BQKBNR w KQkq - 0 1")
            .expect("valid fen");
        let clock = SearchClock::start(10_000);
        let scored = search_root(&board, 2, &clock);
        assert_eq!(scored[0].mv, Move::new(Square::C3, Square::D5, None));
        assert!(scored[0].score > scored.last().unwrap().score);
    }

    #[test]
    fn test_expired_clock_returns_static_eval() {
        let board = Board::default();
        let clock = SearchClock::start(0);
        std::thread::sleep(std::time::Duration::from_millis(2));
        // A depth-10 search would take far too long to be this instant;
        // the expired clock short-circuits to the leaf evaluation.
        let score = minimax(&board, 10, -INFINITY, INFINITY, true, &clock, Color::White);
        assert_eq!(score, evaluate(&board, Color::White));
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let board = Board::default();
        let clock = SearchClock::start(10_000);
        let score = minimax(&board, 0, -INFINITY, INFINITY, true, &clock, Color::White);
        assert_eq!(score, evaluate(&board, Color::White));
    }

    #[test]
    fn test_scores_sorted_best_first() {
        let board = Board::default();
        let clock = SearchClock::start(10_000);
        let scored = search_root(&board, 2, &clock);
        assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
