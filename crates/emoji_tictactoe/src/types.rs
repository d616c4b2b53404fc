//! Core domain types for tic-tac-toe.

use crate::error::ParseError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Swaps X and O, leaving empty squares alone.
    pub fn swapped(self) -> Self {
        match self {
            Square::Empty => Square::Empty,
            Square::Occupied(mark) => Square::Occupied(mark.opponent()),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Writes a square. Callers outside the engine build boards with
    /// [`Board::from_squares`] or by parsing.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns the same board with every X and O exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            squares: self.squares.map(Square::swapped),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                writeln!(f)?;
            }
            let symbol = match square {
                Square::Empty => '.',
                Square::Occupied(Mark::X) => 'X',
                Square::Occupied(Mark::O) => 'O',
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parses nine cells from `X`, `O` and `.`/`_`/`-` (empty).
    /// Whitespace and `|` separators are skipped.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let square = match c.to_ascii_uppercase() {
                'X' => Square::Occupied(Mark::X),
                'O' => Square::Occupied(Mark::O),
                '.' | '_' | '-' => Square::Empty,
                other => {
                    return Err(ParseError::new(format!("Unexpected board cell {other:?}")));
                }
            };
            if count == 9 {
                return Err(ParseError::new("Board has more than 9 cells"));
            }
            squares[count] = square;
            count += 1;
        }
        if count != 9 {
            return Err(ParseError::new(format!("Board has {count} cells, expected 9")));
        }
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO. | .X. | ..O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Mark::O));
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.occupied(), 4);
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("XXX".parse::<Board>().is_err());
        assert!("XXXOOOXXXO".parse::<Board>().is_err());
        assert!("XXXOOOXXZ".parse::<Board>().is_err());
    }

    #[test]
    fn test_swapped() {
        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(board.swapped().to_string(), "OX.\n...\n...");
    }
}
