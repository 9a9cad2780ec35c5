//! Five-in-a-row detection.
//!
//! A player wins when `length` of their pieces, of any kinds, sit on
//! consecutive cells of one row, column, diagonal or anti-diagonal.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Board, Player, Position, BOARD_SIZE, VICTORY_LENGTH};

/// Cells of a winning run, in scan order.
pub type VictoryLine = SmallVec<[Position; BOARD_SIZE]>;

/// Horizontal, vertical, diagonal, anti-diagonal.
const LINE_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Whether `player` owns five consecutive cells in a line.
///
/// ```
/// use shogi_gomoku::core::{Board, Player, Position};
/// use shogi_gomoku::pieces::{Piece, PieceKind};
/// use shogi_gomoku::rules::check_victory;
///
/// let row = (0..5).map(|c| (Position::new(4, c), Piece::new(PieceKind::Fu, Player::One)));
/// let board = Board::from_pieces(row);
/// assert!(check_victory(&board, Player::One));
/// assert!(!check_victory(&board, Player::Two));
/// ```
#[must_use]
pub fn check_victory(board: &Board, player: Player) -> bool {
    find_victory_line(board, player, VICTORY_LENGTH).is_some()
}

/// First run of `length` cells owned by `player`, if one exists.
///
/// Runs are scanned direction by direction, then by starting cell in
/// row-major order. Returns `None` for a zero or over-long `length`.
#[must_use]
pub fn find_victory_line(board: &Board, player: Player, length: usize) -> Option<VictoryLine> {
    if length == 0 || length > BOARD_SIZE {
        return None;
    }

    for (d_row, d_col) in LINE_DIRECTIONS {
        for start in Position::all() {
            let line: Option<VictoryLine> = (0..length as i32)
                .map(|i| {
                    start
                        .offset(d_row * i, d_col * i)
                        .filter(|&cell| board.is_owned_by(cell, player))
                })
                .collect();

            if let Some(line) = line {
                trace!(%player, %start, d_row, d_col, "victory line found");
                return Some(line);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Piece, PieceKind};

    fn board_with(owner: Player, cells: &[(u8, u8)]) -> Board {
        let kinds = PieceKind::ALL;
        Board::from_pieces(
            cells
                .iter()
                .enumerate()
                .map(|(i, &(r, c))| (Position::new(r, c), Piece::new(kinds[i % kinds.len()], owner))),
        )
    }

    #[test]
    fn test_horizontal() {
        let board = board_with(Player::One, &[(4, 0), (4, 1), (4, 2), (4, 3), (4, 4)]);
        assert!(check_victory(&board, Player::One));
    }

    #[test]
    fn test_vertical_at_bottom_edge() {
        let board = board_with(Player::Two, &[(4, 8), (5, 8), (6, 8), (7, 8), (8, 8)]);
        assert!(check_victory(&board, Player::Two));
        assert!(!check_victory(&board, Player::One));
    }

    #[test]
    fn test_diagonal() {
        let cells = [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)];
        assert!(check_victory(&board_with(Player::One, &cells), Player::One));

        let shifted = [(0, 0), (1, 1), (2, 3), (3, 3), (4, 4)];
        assert!(!check_victory(&board_with(Player::One, &shifted), Player::One));
    }

    #[test]
    fn test_anti_diagonal() {
        let cells = [(0, 4), (1, 3), (2, 2), (3, 1), (4, 0)];
        let board = board_with(Player::Two, &cells);
        assert!(check_victory(&board, Player::Two));

        let line = find_victory_line(&board, Player::Two, 5).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line[0], Position::new(0, 4));
        assert_eq!(line[4], Position::new(4, 0));
    }

    #[test]
    fn test_four_is_not_enough() {
        let board = board_with(Player::One, &[(2, 2), (2, 3), (2, 4), (2, 5)]);
        assert!(!check_victory(&board, Player::One));
        assert!(find_victory_line(&board, Player::One, 4).is_some());
    }

    #[test]
    fn test_opponent_piece_breaks_run() {
        let mut board = board_with(Player::One, &[(6, 0), (6, 1), (6, 3), (6, 4)]);
        board.put(Position::new(6, 2), Piece::new(PieceKind::Fu, Player::Two));
        assert!(!check_victory(&board, Player::One));
    }

    #[test]
    fn test_runs_do_not_wrap() {
        let board = board_with(Player::One, &[(0, 6), (0, 7), (0, 8), (1, 0), (1, 1)]);
        assert!(!check_victory(&board, Player::One));
    }

    #[test]
    fn test_invalid_length() {
        let board = board_with(Player::One, &[(0, 0)]);
        assert!(find_victory_line(&board, Player::One, 0).is_none());
        assert!(find_victory_line(&board, Player::One, 10).is_none());
        assert!(find_victory_line(&board, Player::One, 1).is_some());
    }
}
