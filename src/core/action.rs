//! Actions and caller-side selection state.
//!
//! An `Action` is what a player submits on their turn: drop a piece from
//! hand, or move one already on the board. `Mode` and `Selection` record
//! what the caller's UI currently has picked; the engine carries them in
//! snapshots but never decides them during `place` or `move_piece`.

use serde::{Deserialize, Serialize};

use super::position::Position;
use crate::pieces::{Piece, PieceKind};

/// A complete turn action for the player to move.
///
/// ## Example
///
/// ```
/// use shogi_gomoku::core::{Action, Position};
/// use shogi_gomoku::pieces::PieceKind;
///
/// let drop = Action::place(PieceKind::Fu, Position::new(4, 4));
/// let json = serde_json::to_string(&drop).unwrap();
/// assert_eq!(json, r#"{"type":"place","kind":"fu","at":[4,4]}"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Put a piece from hand onto an empty cell.
    Place { kind: PieceKind, at: Position },
    /// Move a board piece, capturing whatever opposing piece sits at `to`.
    Move { from: Position, to: Position },
}

impl Action {
    #[must_use]
    pub const fn place(kind: PieceKind, at: Position) -> Self {
        Action::Place { kind, at }
    }

    #[must_use]
    pub const fn movement(from: Position, to: Position) -> Self {
        Action::Move { from, to }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place { kind, at } => write!(f, "place {kind} at {at}"),
            Action::Move { from, to } => write!(f, "move {from} -> {to}"),
        }
    }
}

/// Which kind of action the caller is preparing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Placing,
    Moving,
}

/// The board piece the caller has picked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub from: Position,
    pub piece: Piece,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        let a = Action::movement(Position::new(6, 4), Position::new(5, 4));
        assert_eq!(format!("{a}"), "move (6, 4) -> (5, 4)");
    }

    #[test]
    fn test_move_json_shape() {
        let json = r#"{"type":"move","from":[6,4],"to":[2,4]}"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert_eq!(action, Action::movement(Position::new(6, 4), Position::new(2, 4)));
    }
}
