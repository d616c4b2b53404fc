//! Move records and the accepted/ignored outcome of a move request.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// An accepted move: a mark placed at a position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move request left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// Index outside 0-8.
    #[display("Index {_0} is off the board")]
    OutOfRange(usize),
    /// The square already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(Position),
    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Result of a move request. Ignoring a move is a normal outcome, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// State changed.
    Accepted(Move),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }
}
