//! Typed board positions.

use crate::error::ParseError;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A position on the tic-tac-toe board (index 0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub const fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates a position from row and column, both 0-2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Returns only the empty squares of `board`.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Position {
    type Err = ParseError;

    /// Parses an index (0-8) or a label, case-insensitively.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index)
                .ok_or_else(|| ParseError::new(format!("Position index {index} out of range")));
        }
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::new(format!("Unknown position {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_is_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_col() {
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.col(), 2);
        assert_eq!(Position::from_row_col(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::from_row_col(3, 0), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("4".parse::<Position>().unwrap(), Position::Center);
        assert_eq!("top-right".parse::<Position>().unwrap(), Position::TopRight);
        assert!("9".parse::<Position>().is_err());
        assert!("somewhere".parse::<Position>().is_err());
    }

    #[test]
    fn test_valid_moves_filters_occupied() {
        let board: Board = "X...O....".parse().unwrap();
        let moves = Position::valid_moves(&board);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Position::TopLeft));
        assert!(!moves.contains(&Position::Center));
    }
}
