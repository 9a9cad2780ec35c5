//! Core model types: players, positions, board, state, actions, configuration.
//!
//! Nothing here judges legality; that is the job of `rules`. These types
//! only hold data and keep their own structural invariants (on-board
//! positions, one piece per cell, non-negative hand counts).

pub mod action;
pub mod config;
pub mod player;
pub mod position;
pub mod state;

pub use action::{Action, Mode, Selection};
pub use config::{ConfigError, GameConfig, VICTORY_LENGTH};
pub use player::{Player, PlayerMap};
pub use position::{OffBoardError, Position, BOARD_SIZE, CELL_COUNT};
pub use state::{Board, BoardSizeError, GameState};
