//! Rule engine: placement, movement and turn handling.
//!
//! `Engine` owns a `GameConfig` and turns (state, action) into either a
//! new snapshot or a `RuleError`. It never mutates the state it is given.
//!
//! ## Turn flow
//!
//! After an accepted action the actor's victory is checked. A win sets
//! `winner` and leaves `current_player` on the winner; otherwise the turn
//! passes to the opponent. A state with a winner rejects every further
//! placement, movement and selection with `RuleError::GameOver`.
//!
//! Mode and selection are caller-side UI state. `place` and `move_piece`
//! leave them as they were; the `select_*` helpers set them.

use tracing::debug;

use super::error::{PieceCountError, RuleError};
use super::movement::{legal_destinations, sorted_destinations};
use super::victory::find_victory_line;
use crate::core::{
    Action, Board, ConfigError, GameConfig, GameState, Mode, Player, Position, Selection,
};
use crate::pieces::{Piece, PieceKind};

/// Rules engine trait.
///
/// The seam between game rules and anything that drives a game: a UI, the
/// replay tool, or a search.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty once the game is over
/// - `apply`: deterministic, never mutates `state`
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Fresh game under this engine's configuration.
    fn initial_state(&self) -> GameState {
        GameState::new(self.config())
    }

    /// Every action `state.current_player` may take, in a stable order.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action for `state.current_player`.
    fn apply(&self, state: &GameState, action: &Action) -> Result<GameState, RuleError>;

    /// Winner, if the game has ended.
    fn is_terminal(&self, state: &GameState) -> Option<Player> {
        state.winner
    }

    // === Convenience Methods ===

    /// Whether `apply` would accept the action.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        self.apply(state, action).is_ok()
    }
}

/// The shogi-gomoku rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Engine {
    config: GameConfig,
}

impl Engine {
    /// Engine with the standard rules.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            config: GameConfig::standard(),
        }
    }

    /// Engine with a custom configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Drop a piece from `player`'s hand onto an empty cell.
    ///
    /// Checks, first failure wins: game still running, a `kind` left in
    /// hand, target cell empty. `player` is taken as given; after a
    /// non-winning placement the turn passes to `player`'s opponent.
    pub fn place(
        &self,
        kind: PieceKind,
        at: Position,
        player: Player,
        state: &GameState,
    ) -> Result<GameState, RuleError> {
        ensure_in_progress(state)?;

        if state.hands[player].count(kind) == 0 {
            return rejected(RuleError::NoPieceInHand { player, kind });
        }
        if !state.board.is_empty(at) {
            return rejected(RuleError::CellOccupied { at });
        }

        let mut next = state.clone();
        next.hands[player].take(kind);
        next.board.put(at, Piece::new(kind, player));
        debug!(%player, %kind, %at, "piece placed");

        Ok(self.finish_turn(next, player))
    }

    /// Move the current player's piece at `from` to `to`.
    ///
    /// An opposing piece at `to` is removed from the game for good; it
    /// does not go to anyone's hand.
    pub fn move_piece(
        &self,
        from: Position,
        to: Position,
        state: &GameState,
    ) -> Result<GameState, RuleError> {
        ensure_in_progress(state)?;

        let mover = state.current_player;
        let piece = match state.board.get(from) {
            Some(piece) if piece.owner == mover => piece,
            _ => return rejected(RuleError::InvalidMove { from }),
        };
        if !legal_destinations(piece, from, &state.board, mover).contains(&to) {
            return rejected(RuleError::IllegalDestination { from, to });
        }

        let mut next = state.clone();
        next.board.take(from);
        if let Some(captured) = next.board.put(to, piece) {
            debug!(player = %mover, kind = %captured.kind, %to, "piece captured");
        }
        debug!(player = %mover, kind = %piece.kind, %from, %to, "piece moved");

        Ok(self.finish_turn(next, mover))
    }

    /// Pick up one of the current player's board pieces.
    ///
    /// Returns a snapshot in `Mode::Moving` with the selection set.
    pub fn select_board_piece(
        &self,
        state: &GameState,
        at: Position,
    ) -> Result<GameState, RuleError> {
        ensure_in_progress(state)?;

        match state.board.get(at) {
            Some(piece) if piece.owner == state.current_player => Ok(GameState {
                mode: Mode::Moving,
                selection: Some(Selection { from: at, piece }),
                ..state.clone()
            }),
            _ => rejected(RuleError::InvalidMove { from: at }),
        }
    }

    /// Switch the caller back to choosing from hand.
    pub fn select_hand(&self, state: &GameState) -> Result<GameState, RuleError> {
        ensure_in_progress(state)?;
        Ok(state.clear_selection())
    }

    /// Whether `player` has a winning line under this configuration.
    #[must_use]
    pub fn has_won(&self, board: &Board, player: Player) -> bool {
        find_victory_line(board, player, self.config.victory_length).is_some()
    }

    /// Check a snapshot from outside the engine against this configuration.
    ///
    /// For each player and kind, pieces in hand plus pieces on the board
    /// must not exceed the starting count.
    pub fn check_state(&self, state: &GameState) -> Result<(), PieceCountError> {
        for (player, hand) in state.hands.iter() {
            for kind in PieceKind::ALL {
                let found = usize::from(hand.count(kind)) + state.board.count(kind, player);
                let dealt = self.config.initial_hand.count(kind);
                if found > usize::from(dealt) {
                    return Err(PieceCountError {
                        player,
                        kind,
                        found,
                        dealt,
                    });
                }
            }
        }
        Ok(())
    }

    fn finish_turn(&self, mut next: GameState, actor: Player) -> GameState {
        if self.has_won(&next.board, actor) {
            debug!(winner = %actor, "game won");
            next.winner = Some(actor);
        } else {
            next.current_player = actor.opponent();
        }
        next
    }
}

impl RulesEngine for Engine {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if state.is_terminal() {
            return Vec::new();
        }

        let player = state.current_player;
        let mut actions = Vec::new();

        for kind in state.hands[player].available() {
            actions.extend(state.board.empty_cells().map(|at| Action::place(kind, at)));
        }

        for (from, piece) in state.board.occupied().filter(|(_, p)| p.owner == player) {
            actions.extend(
                sorted_destinations(piece, from, &state.board, player)
                    .into_iter()
                    .map(|to| Action::movement(from, to)),
            );
        }

        actions
    }

    fn apply(&self, state: &GameState, action: &Action) -> Result<GameState, RuleError> {
        match *action {
            Action::Place { kind, at } => self.place(kind, at, state.current_player, state),
            Action::Move { from, to } => self.move_piece(from, to, state),
        }
    }
}

fn ensure_in_progress(state: &GameState) -> Result<(), RuleError> {
    match state.winner {
        Some(winner) => rejected(RuleError::GameOver { winner }),
        None => Ok(()),
    }
}

fn rejected<T>(error: RuleError) -> Result<T, RuleError> {
    debug!(%error, "action rejected");
    Err(error)
}

// === Standard-rules entry points ===

/// New standard game.
#[must_use]
pub fn create_initial_state() -> GameState {
    Engine::standard().initial_state()
}

/// `Engine::place` under the standard rules.
pub fn place(
    kind: PieceKind,
    at: Position,
    player: Player,
    state: &GameState,
) -> Result<GameState, RuleError> {
    Engine::standard().place(kind, at, player, state)
}

/// `Engine::move_piece` under the standard rules.
pub fn move_piece(from: Position, to: Position, state: &GameState) -> Result<GameState, RuleError> {
    Engine::standard().move_piece(from, to, state)
}
