//! # shogi-gomoku
//!
//! Rule engine for a two-player game that mixes five-in-a-row with shogi
//! piece movement on a 9×9 board.
//!
//! On each turn a player either drops a piece from hand onto an empty
//! cell, or moves one of their board pieces along its shogi movement
//! pattern, capturing an opposing piece by landing on it. Captured pieces
//! are gone for good. Five of a player's pieces in a row, column or
//! diagonal wins.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: every accepted action returns a new
//!    `GameState`. Boards are `im` persistent vectors, so keeping old
//!    snapshots around is cheap.
//!
//! 2. **Movement as data**: each `PieceKind` maps to a static
//!    `MovementProfile` (direction vectors plus a sliding flag). Rule code
//!    reads the table instead of branching per kind.
//!
//! 3. **Rejections are values**: `RuleError` for library callers,
//!    `ActionResult` for UIs that want `{ success, message, newState }`.
//!
//! ## Modules
//!
//! - `core`: players, positions, board, game state, actions, configuration
//! - `pieces`: piece kinds, movement profiles, hands
//! - `rules`: legal destinations, placement, movement, victory, `RulesEngine`
//! - `logging`: tracing subscriber setup for binaries
//!
//! ## Example
//!
//! ```
//! use shogi_gomoku::{create_initial_state, move_piece, place, PieceKind, Player, Position};
//!
//! let state = create_initial_state();
//! let state = place(PieceKind::Hi, Position::new(6, 4), Player::One, &state).unwrap();
//! let state = place(PieceKind::Fu, Position::new(2, 4), Player::Two, &state).unwrap();
//!
//! // The rook slides up the file and takes the pawn.
//! let state = move_piece(Position::new(6, 4), Position::new(2, 4), &state).unwrap();
//! assert_eq!(state.board.count_owned(Player::Two), 0);
//! assert_eq!(state.current_player, Player::Two);
//! ```

pub mod core;
pub mod logging;
pub mod pieces;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, ConfigError, GameConfig, GameState, Mode, Player, PlayerMap, Position,
    Selection, BOARD_SIZE, VICTORY_LENGTH,
};

pub use crate::pieces::{Hand, MovementProfile, Piece, PieceKind};

pub use crate::rules::{
    check_victory, create_initial_state, find_victory_line, legal_destinations, move_piece,
    place, ActionResult, Destinations, Engine, PieceCountError, RuleError, RulesEngine,
};
