//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "....X....".parse().unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XXXXXXXXX".parse().unwrap();
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXXOOXOXO".parse().unwrap();
        assert!(!is_draw(&board));
    }
}
