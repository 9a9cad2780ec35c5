//! Board and game-state snapshots.
//!
//! ## Board
//!
//! 81 optional pieces in row-major order, stored in an `im::Vector` so a
//! snapshot clone shares structure with its parent instead of copying.
//!
//! ## GameState
//!
//! Everything the engine needs to judge the next action: board, hands,
//! whose turn it is, the caller's mode/selection, and the winner. The
//! rule engine treats a `GameState` as immutable and hands back a new one
//! for every accepted action, so callers may hold on to old snapshots.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::{Mode, Selection};
use super::config::GameConfig;
use super::player::{Player, PlayerMap};
use super::position::{Position, BOARD_SIZE, CELL_COUNT};
use crate::pieces::{Hand, Piece, PieceKind};

/// A serialized board without exactly one entry per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("board has {found} cells, expected {expected}", expected = CELL_COUNT)]
pub struct BoardSizeError {
    pub found: usize,
}

/// The 9×9 grid.
///
/// Serializes as a flat row-major array of 81 cells, each `null` or a piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Piece>>", into = "Vec<Option<Piece>>")]
pub struct Board {
    cells: Vector<Option<Piece>>,
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: std::iter::repeat(None).take(CELL_COUNT).collect(),
        }
    }

    /// Build a board holding exactly the given pieces.
    ///
    /// Later entries overwrite earlier ones at the same position.
    ///
    /// ```
    /// use shogi_gomoku::core::{Board, Player, Position};
    /// use shogi_gomoku::pieces::{Piece, PieceKind};
    ///
    /// let board = Board::from_pieces([
    ///     (Position::new(4, 4), Piece::new(PieceKind::Hi, Player::One)),
    ///     (Position::new(1, 4), Piece::new(PieceKind::Fu, Player::Two)),
    /// ]);
    /// assert_eq!(board.occupied().count(), 2);
    /// ```
    pub fn from_pieces(pieces: impl IntoIterator<Item = (Position, Piece)>) -> Self {
        let mut board = Self::empty();
        for (at, piece) in pieces {
            board.put(at, piece);
        }
        board
    }

    /// Piece at a cell, if any.
    #[must_use]
    pub fn get(&self, at: Position) -> Option<Piece> {
        self.cells[at.index()]
    }

    #[must_use]
    pub fn is_empty(&self, at: Position) -> bool {
        self.get(at).is_none()
    }

    /// Whether the cell holds a piece owned by `player`.
    #[must_use]
    pub fn is_owned_by(&self, at: Position, player: Player) -> bool {
        self.get(at).is_some_and(|p| p.owner == player)
    }

    /// Put a piece on a cell, returning whatever was there.
    pub fn put(&mut self, at: Position, piece: Piece) -> Option<Piece> {
        self.cells.set(at.index(), Some(piece))
    }

    /// Clear a cell, returning whatever was there.
    pub fn take(&mut self, at: Position) -> Option<Piece> {
        self.cells.set(at.index(), None)
    }

    /// Iterate over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|piece| (Position::from_index(i), piece)))
    }

    /// Iterate over empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Position::from_index(i))
    }

    /// Number of pieces owned by `owner`.
    #[must_use]
    pub fn count_owned(&self, owner: Player) -> usize {
        self.occupied().filter(|(_, p)| p.owner == owner).count()
    }

    /// Number of `kind` pieces owned by `owner`.
    #[must_use]
    pub fn count(&self, kind: PieceKind, owner: Player) -> usize {
        self.occupied()
            .filter(|(_, p)| *p == Piece::new(kind, owner))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<Option<Piece>>> for Board {
    type Error = BoardSizeError;

    fn try_from(cells: Vec<Option<Piece>>) -> Result<Self, Self::Error> {
        if cells.len() != CELL_COUNT {
            return Err(BoardSizeError { found: cells.len() });
        }
        Ok(Self {
            cells: cells.into_iter().collect(),
        })
    }
}

impl From<Board> for Vec<Option<Piece>> {
    fn from(board: Board) -> Self {
        board.cells.into_iter().collect()
    }
}

impl std::fmt::Display for Board {
    /// Player 2's pieces carry a `v` prefix, as in shogi diagrams.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col} ")?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{row} ")?;
            for col in 0..BOARD_SIZE {
                match self.get(Position::new(row as u8, col as u8)) {
                    None => write!(f, " ・")?,
                    Some(Piece { kind, owner: Player::One }) => write!(f, " {}", kind.symbol())?,
                    Some(Piece { kind, owner: Player::Two }) => write!(f, "v{}", kind.symbol())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A full game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    /// Unplaced pieces per player.
    pub hands: PlayerMap<Hand>,
    /// Side to act. Left unchanged by a winning action.
    pub current_player: Player,
    pub mode: Mode,
    pub selection: Option<Selection>,
    /// Set once five-in-a-row is made; the state is then terminal.
    pub winner: Option<Player>,
}

impl GameState {
    /// Start of a game: empty board, full hands, Player 1 placing.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::empty(),
            hands: PlayerMap::with_value(config.initial_hand),
            current_player: Player::One,
            mode: Mode::Placing,
            selection: None,
            winner: None,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn hand(&self, player: Player) -> &Hand {
        &self.hands[player]
    }

    /// Pieces `player` still has in play: unplaced plus on the board.
    ///
    /// Captures lower this permanently.
    #[must_use]
    pub fn pieces_remaining(&self, player: Player) -> u32 {
        self.hands[player].total() + self.board.count_owned(player) as u32
    }

    /// Copy of this snapshot with the selection dropped and mode back to placing.
    #[must_use]
    pub fn clear_selection(&self) -> Self {
        Self {
            mode: Mode::Placing,
            selection: None,
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fu(owner: Player) -> Piece {
        Piece::new(PieceKind::Fu, owner)
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.occupied().count(), 0);
        assert_eq!(board.empty_cells().count(), CELL_COUNT);
    }

    #[test]
    fn test_put_and_take() {
        let mut board = Board::empty();
        let at = Position::new(3, 5);

        assert_eq!(board.put(at, fu(Player::One)), None);
        assert_eq!(board.get(at), Some(fu(Player::One)));
        assert!(board.is_owned_by(at, Player::One));
        assert!(!board.is_owned_by(at, Player::Two));

        assert_eq!(board.put(at, fu(Player::Two)), Some(fu(Player::One)));
        assert_eq!(board.take(at), Some(fu(Player::Two)));
        assert!(board.is_empty(at));
    }

    #[test]
    fn test_board_clone_is_independent() {
        let original = Board::from_pieces([(Position::new(0, 0), fu(Player::One))]);
        let mut copy = original.clone();
        copy.take(Position::new(0, 0));

        assert_eq!(original.get(Position::new(0, 0)), Some(fu(Player::One)));
        assert!(copy.is_empty(Position::new(0, 0)));
    }

    #[test]
    fn test_counts() {
        let board = Board::from_pieces([
            (Position::new(0, 0), fu(Player::One)),
            (Position::new(0, 1), fu(Player::One)),
            (Position::new(0, 2), Piece::new(PieceKind::Hi, Player::One)),
            (Position::new(8, 8), fu(Player::Two)),
        ]);
        assert_eq!(board.count(PieceKind::Fu, Player::One), 2);
        assert_eq!(board.count(PieceKind::Fu, Player::Two), 1);
        assert_eq!(board.count_owned(Player::One), 3);
    }

    #[test]
    fn test_display_marks_owner() {
        let board = Board::from_pieces([
            (Position::new(0, 0), Piece::new(PieceKind::Hi, Player::Two)),
            (Position::new(8, 8), Piece::new(PieceKind::Kaku, Player::One)),
        ]);
        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), BOARD_SIZE + 1);
        assert!(lines[1].starts_with("0 v飛"));
        assert!(lines[9].ends_with(" 角"));
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::default();

        assert_eq!(state.current_player, Player::One);
        assert_eq!(state.mode, Mode::Placing);
        assert_eq!(state.selection, None);
        assert_eq!(state.winner, None);
        assert!(!state.is_terminal());
        for player in Player::ALL {
            assert_eq!(*state.hand(player), Hand::standard());
            assert_eq!(state.pieces_remaining(player), 20);
        }
    }

    #[test]
    fn test_clear_selection() {
        let mut state = GameState::default();
        state.mode = Mode::Moving;
        state.selection = Some(Selection {
            from: Position::new(4, 4),
            piece: fu(Player::One),
        });

        let cleared = state.clear_selection();
        assert_eq!(cleared.mode, Mode::Placing);
        assert_eq!(cleared.selection, None);
        assert_eq!(state.mode, Mode::Moving);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::default();
        state.board.put(Position::new(4, 4), fu(Player::Two));
        state.hands[Player::Two].take(PieceKind::Fu);

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    fn test_board_json_is_flat_cell_array() {
        let board = Board::from_pieces([(Position::new(0, 1), fu(Player::Two))]);
        let value = serde_json::to_value(&board).unwrap();

        let cells = value.as_array().unwrap();
        assert_eq!(cells.len(), CELL_COUNT);
        assert!(cells[0].is_null());
        assert_eq!(cells[1], serde_json::json!({ "kind": "fu", "owner": "player2" }));
    }

    #[test]
    fn test_short_board_rejected() {
        let mut value = serde_json::to_value(GameState::default()).unwrap();
        value["board"] = serde_json::json!([null, null, null]);

        let err = serde_json::from_value::<GameState>(value).unwrap_err();
        assert!(err.to_string().contains("board has 3 cells, expected 81"), "{err}");
    }

    #[test]
    fn test_long_board_rejected() {
        let cells: Vec<Option<Piece>> = vec![None; CELL_COUNT + 1];
        assert_eq!(
            Board::try_from(cells),
            Err(BoardSizeError { found: CELL_COUNT + 1 })
        );
    }
}
