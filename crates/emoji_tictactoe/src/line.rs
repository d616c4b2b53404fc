//! The eight winning lines.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Three positions that win when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// All lines in check order: rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        // Rows
        Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
        Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        Line([Position::TopLeft, Position::Center, Position::BottomRight]),
        Line([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// Positions on this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices on this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{a}, {b}, {c}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_indices() {
        let indices: Vec<[usize; 3]> = Line::ALL.iter().map(Line::indices).collect();
        assert_eq!(
            indices,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_contains() {
        assert!(Line::ALL[6].contains(Position::Center));
        assert!(!Line::ALL[0].contains(Position::Center));
    }
}
