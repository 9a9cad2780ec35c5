//! Piece kinds, movement profiles and hands.
//!
//! Per-kind behavior lives in a static table (`profile`) keyed by the
//! closed `PieceKind` enum. Rule code looks profiles up; it never matches
//! on kinds directly.

pub mod hand;
pub mod kind;
pub mod profile;

pub use hand::Hand;
pub use kind::{ParsePieceKindError, Piece, PieceKind};
pub use profile::{Direction, MovementProfile};
