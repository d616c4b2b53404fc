//! Game result.

use crate::line::Line;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Status of a game. `Win` and `Draw` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameResult {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// `mark` completed `line`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// Full board, no line.
    Draw,
}

impl GameResult {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameResult::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "Game in progress"),
            GameResult::Win { mark, .. } => write!(f, "Winner: {mark}"),
            GameResult::Draw => write!(f, "Game ended in a draw"),
        }
    }
}
