//! Legal destinations for a board piece.
//!
//! Direction vectors come from the piece's movement profile. For a piece
//! owned by Player 2 the row component is negated; columns never flip.
//! From the origin the piece steps along each direction:
//!
//! - an empty cell is a destination, and a sliding piece keeps going
//! - a cell held by the mover's opponent is a destination (capture), then stop
//! - a cell held by the mover stops the ray without being added
//!
//! Single-step kinds only look at the first cell of each ray.

use rustc_hash::FxHashSet;

use crate::core::{Board, Player, Position};
use crate::pieces::Piece;

/// Set of reachable cells. Order carries no meaning.
pub type Destinations = FxHashSet<Position>;

/// Cells `piece` standing on `origin` may move to.
///
/// `moving_player` decides which occupied cells count as capturable.
///
/// ```
/// use shogi_gomoku::core::{Board, Player, Position};
/// use shogi_gomoku::pieces::{Piece, PieceKind};
/// use shogi_gomoku::rules::legal_destinations;
///
/// let fu = Piece::new(PieceKind::Fu, Player::Two);
/// let dests = legal_destinations(fu, Position::new(2, 3), &Board::empty(), Player::Two);
/// assert_eq!(dests.into_iter().collect::<Vec<_>>(), vec![Position::new(3, 3)]);
/// ```
#[must_use]
pub fn legal_destinations(
    piece: Piece,
    origin: Position,
    board: &Board,
    moving_player: Player,
) -> Destinations {
    let profile = piece.kind.profile();
    let sign = piece.owner.forward_sign();
    let mut destinations = Destinations::default();

    for &(d_row, d_col) in profile.directions {
        let d_row = i32::from(d_row * sign);
        let d_col = i32::from(d_col);

        let mut cursor = origin;
        while let Some(target) = cursor.offset(d_row, d_col) {
            match board.get(target) {
                None => {
                    destinations.insert(target);
                }
                Some(occupant) if occupant.owner != moving_player => {
                    destinations.insert(target);
                    break;
                }
                Some(_) => break,
            }
            if !profile.continuous {
                break;
            }
            cursor = target;
        }
    }

    destinations
}

/// `legal_destinations` in row-major order.
#[must_use]
pub fn sorted_destinations(
    piece: Piece,
    origin: Position,
    board: &Board,
    moving_player: Player,
) -> Vec<Position> {
    let mut cells: Vec<_> = legal_destinations(piece, origin, board, moving_player)
        .into_iter()
        .collect();
    cells.sort_unstable();
    cells
}
