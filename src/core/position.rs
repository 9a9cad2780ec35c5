//! Board coordinates.
//!
//! A `Position` is a (row, column) pair on the 9×9 board, 0-indexed.
//! Row 0 is Player 2's back rank; Player 1 moves toward it.
//!
//! Positions are always on-board: `Position::new` asserts the range and
//! deserialization rejects out-of-range pairs, so rule code never has to
//! re-check bounds on its inputs.
//!
//! ```
//! use shogi_gomoku::core::Position;
//!
//! let p = Position::new(4, 4);
//! assert_eq!(p.offset(-1, 0), Some(Position::new(3, 4)));
//! assert_eq!(Position::new(0, 4).offset(-1, 0), None);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 9;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Rejected attempt to build an off-board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("position ({row}, {col}) is off the {size}x{size} board", size = BOARD_SIZE)]
pub struct OffBoardError {
    pub row: i32,
    pub col: i32,
}

/// An on-board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position.
    ///
    /// Panics if either coordinate is outside `0..BOARD_SIZE`.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "Position out of board range"
        );
        Self { row, col }
    }

    /// Create a position from signed coordinates, if on-board.
    #[must_use]
    pub fn checked(row: i32, col: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Create a position from a cell index (`row * BOARD_SIZE + col`).
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < CELL_COUNT, "Cell index out of range");
        Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Cell index in row-major order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Step by a delta, returning `None` when the target falls off the board.
    #[must_use]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::checked(self.row as i32 + d_row, self.col as i32 + d_col)
    }

    /// Reflect across the horizontal midline (`row -> 8 - row`).
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            row: (BOARD_SIZE - 1) as u8 - self.row,
            col: self.col,
        }
    }

    /// Iterate over every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(Self::from_index)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = OffBoardError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::checked(row as i32, col as i32).ok_or(OffBoardError {
            row: row as i32,
            col: col as i32,
        })
    }
}

impl From<Position> for (u8, u8) {
    fn from(p: Position) -> Self {
        (p.row(), p.col())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_layout() {
        assert_eq!(Position::new(0, 0).index(), 0);
        assert_eq!(Position::new(1, 0).index(), 9);
        assert_eq!(Position::new(8, 8).index(), 80);
        assert_eq!(Position::from_index(40), Position::new(4, 4));
        assert_eq!(Position::all().count(), CELL_COUNT);
    }

    #[test]
    fn test_offset_edges() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Position::new(1, 1)));
        assert_eq!(Position::new(8, 8).offset(1, 0), None);
    }

    #[test]
    fn test_accessors_and_display() {
        let p = Position::new(2, 7);
        assert_eq!((p.row(), p.col()), (2, 7));
        assert_eq!(<(u8, u8)>::from(p), (2, 7));
        assert_eq!(p.to_string(), "(2, 7)");
    }

    #[test]
    fn test_mirrored() {
        assert_eq!(Position::new(0, 3).mirrored(), Position::new(8, 3));
        assert_eq!(Position::new(4, 7).mirrored(), Position::new(4, 7));
    }

    #[test]
    #[should_panic(expected = "Position out of board range")]
    fn test_new_off_board() {
        let _ = Position::new(9, 0);
    }

    #[test]
    fn test_serde_pair() {
        let json = serde_json::to_string(&Position::new(2, 7)).unwrap();
        assert_eq!(json, "[2,7]");

        let p: Position = serde_json::from_str("[3,1]").unwrap();
        assert_eq!(p, Position::new(3, 1));

        assert!(serde_json::from_str::<Position>("[9,1]").is_err());
    }
}
