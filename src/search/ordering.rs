//! Move ordering.
//!
//! Captures are searched before quiet moves, most valuable victim first.
//! Alpha-beta pruning efficiency depends on this, so the ordering is
//! reapplied at every node, not just the root.

use crate::types::{piece_value, Board, Move, Value};
use std::cmp::Reverse;

/// Ordering score for a move: the captured piece's value, or -1 for a
/// quiet move so that every capture sorts ahead of every non-capture.
#[inline]
fn capture_score(board: &Board, m: Move) -> Value {
    match board.piece_on(m.get_dest()) {
        Some(victim) => piece_value(victim),
        None => -1,
    }
}

/// Sort moves in place: captures first, ordered by victim value descending.
/// The sort is stable, so quiet moves keep the rules engine's order.
pub fn order_captures_first(board: &Board, moves: &mut [Move]) {
    moves.sort_by_key(|&m| Reverse(capture_score(board, m)));
}
