//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`], kept apart from the engine so that any
//! board can be evaluated without replaying the moves that produced it.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::outcome::GameResult;
use crate::types::Board;
use tracing::instrument;

/// Evaluates a board: the first completed line wins, then a full board is a
/// draw, otherwise the game is still in progress.
#[instrument]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some((mark, line)) = check_winner(board) {
        GameResult::Win { mark, line }
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Line, Mark};

    #[test]
    fn test_evaluate_empty_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameResult::InProgress);
    }

    #[test]
    fn test_evaluate_top_row_win() {
        let board: Board = "XXX......".parse().unwrap();
        assert_eq!(
            evaluate(&board),
            GameResult::Win {
                mark: Mark::X,
                line: Line::ALL[0],
            }
        );
    }

    #[test]
    fn test_evaluate_draw() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        assert_eq!(evaluate(&board), GameResult::Draw);
    }

    #[test]
    fn test_evaluate_full_board_with_line_is_win() {
        let board: Board = "XXXOOXOXO".parse().unwrap();
        assert_eq!(evaluate(&board).winner(), Some(Mark::X));
    }
}
