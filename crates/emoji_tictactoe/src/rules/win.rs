//! Win detection logic for tic-tac-toe.

use crate::line::Line;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`Line::ALL`] order and the first uniformly marked
/// one is returned, so a board with several completed lines always reports
/// the same one.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Mark, Line)> {
    for line in Line::ALL {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if let Square::Occupied(mark) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((mark, line));
        }
    }

    None
}
