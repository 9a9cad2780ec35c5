//! The rule engine.
//!
//! - `movement`: legal destinations from a piece's movement profile
//! - `victory`: five-in-a-row scan
//! - `engine`: placement, movement, turn passing, the `RulesEngine` seam
//! - `outcome`: `{ success, message, newState }` view of a result
//!
//! Every operation is a pure function of its inputs. Rejections come back
//! as `RuleError` values; nothing here panics on player input.

pub mod engine;
pub mod error;
pub mod movement;
pub mod outcome;
pub mod victory;

pub use engine::{create_initial_state, move_piece, place, Engine, RulesEngine};
pub use error::{PieceCountError, RuleError};
pub use movement::{legal_destinations, sorted_destinations, Destinations};
pub use outcome::ActionResult;
pub use victory::{check_victory, find_victory_line, VictoryLine};
