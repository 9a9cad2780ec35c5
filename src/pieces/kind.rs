//! Piece kinds and piece values.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::core::Player;

/// The eight piece kinds.
///
/// The set is closed: every kind has an entry in the movement profile
/// table and in the hand allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// Pawn.
    Fu,
    /// Gold general.
    Kin,
    /// Silver general.
    Gin,
    /// Bishop.
    Kaku,
    /// Rook.
    Hi,
    /// King.
    Ou,
    /// Lance.
    Kyo,
    /// Knight.
    Kei,
}

impl PieceKind {
    /// Number of kinds.
    pub const COUNT: usize = 8;

    /// Every kind, in table order.
    pub const ALL: [PieceKind; Self::COUNT] = [
        PieceKind::Fu,
        PieceKind::Kin,
        PieceKind::Gin,
        PieceKind::Kaku,
        PieceKind::Hi,
        PieceKind::Ou,
        PieceKind::Kyo,
        PieceKind::Kei,
    ];

    /// Table index of this kind.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Romanized name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Fu => "fu",
            PieceKind::Kin => "kin",
            PieceKind::Gin => "gin",
            PieceKind::Kaku => "kaku",
            PieceKind::Hi => "hi",
            PieceKind::Ou => "ou",
            PieceKind::Kyo => "kyo",
            PieceKind::Kei => "kei",
        }
    }

    /// Single-glyph board symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Fu => '歩',
            PieceKind::Kin => '金',
            PieceKind::Gin => '銀',
            PieceKind::Kaku => '角',
            PieceKind::Hi => '飛',
            PieceKind::Ou => '王',
            PieceKind::Kyo => '香',
            PieceKind::Kei => '桂',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Text that names no piece kind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown piece kind: {0:?}")]
pub struct ParsePieceKindError(pub String);

impl FromStr for PieceKind {
    type Err = ParsePieceKindError;

    /// Accepts the romanized name (any case) or the board symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PieceKind::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(trimmed)
                    || trimmed.chars().eq(std::iter::once(kind.symbol()))
            })
            .ok_or_else(|| ParsePieceKindError(s.to_string()))
    }
}

/// A piece on the board: a kind and its owner.
///
/// Pieces carry no identity. Two Fu owned by the same player are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, owner: Player) -> Self {
        Self { kind, owner }
    }
}
