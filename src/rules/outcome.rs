//! UI-facing result shape.
//!
//! Front ends that cannot hold a `Result` (JSON bridges, scripting hosts)
//! get `{ success, message?, newState? }` instead.

use serde::{Deserialize, Serialize};

use super::error::RuleError;
use crate::core::GameState;

/// Flattened outcome of one action.
///
/// ```
/// use shogi_gomoku::core::{Player, Position};
/// use shogi_gomoku::pieces::PieceKind;
/// use shogi_gomoku::rules::{create_initial_state, place, ActionResult};
///
/// let state = create_initial_state();
/// let ok = ActionResult::from(place(PieceKind::Fu, Position::new(4, 4), Player::One, &state));
/// assert!(ok.success && ok.message.is_none() && ok.new_state.is_some());
///
/// let next = ok.new_state.unwrap();
/// let err = ActionResult::from(place(PieceKind::Fu, Position::new(4, 4), Player::Two, &next));
/// assert_eq!(err.message.as_deref(), Some("cell occupied"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_state: Option<GameState>,
}

impl ActionResult {
    #[must_use]
    pub fn accepted(state: GameState) -> Self {
        Self {
            success: true,
            message: None,
            new_state: Some(state),
        }
    }

    #[must_use]
    pub fn rejected(error: &RuleError) -> Self {
        Self {
            success: false,
            message: Some(error.to_string()),
            new_state: None,
        }
    }
}

impl From<Result<GameState, RuleError>> for ActionResult {
    fn from(result: Result<GameState, RuleError>) -> Self {
        match result {
            Ok(state) => Self::accepted(state),
            Err(error) => Self::rejected(&error),
        }
    }
}
