//! Rejected actions.
//!
//! Every rejection is ordinary data returned to the caller. The display
//! strings are short and stable because UIs show them as-is.

use thiserror::Error;

use crate::core::{Player, Position};
use crate::pieces::PieceKind;

/// Why the engine refused an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum RuleError {
    /// A winner exists; the snapshot accepts nothing further.
    #[error("game is already over")]
    GameOver { winner: Player },

    #[error("no piece in hand")]
    NoPieceInHand { player: Player, kind: PieceKind },

    #[error("cell occupied")]
    CellOccupied { at: Position },

    /// Origin is empty or holds a piece the mover does not own.
    #[error("invalid move")]
    InvalidMove { from: Position },

    /// Target is not among the piece's legal destinations.
    #[error("illegal destination")]
    IllegalDestination { from: Position, to: Position },
}

/// A snapshot holding more pieces of a kind than its configuration deals.
///
/// Hand plus board can only shrink during play, so a loaded state that
/// exceeds the starting count did not come from this engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{player} has {found} {kind} in hand and on the board, more than the {dealt} dealt")]
pub struct PieceCountError {
    pub player: Player,
    pub kind: PieceKind,
    pub found: usize,
    pub dealt: u8,
}
