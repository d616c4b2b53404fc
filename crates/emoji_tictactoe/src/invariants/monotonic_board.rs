//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameEngine, Square};

/// Invariant: replaying the history onto an empty board never writes an
/// occupied square and reproduces the engine's board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut squares = [Square::Empty; 9];

        for mv in engine.history() {
            let slot = &mut squares[mv.position.to_index()];
            if *slot != Square::Empty {
                return false;
            }
            *slot = Square::Occupied(mv.mark);
        }

        Board::from_squares(squares) == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
