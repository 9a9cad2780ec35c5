//! Pieces held in reserve.
//!
//! A `Hand` tracks how many of each kind a player has not yet placed.
//! Captured pieces never come back here.

use serde::{Deserialize, Serialize};

use super::PieceKind;

/// Remaining counts per piece kind.
///
/// ## Example
///
/// ```
/// use shogi_gomoku::pieces::{Hand, PieceKind};
///
/// let mut hand = Hand::standard();
/// assert_eq!(hand.count(PieceKind::Fu), 9);
///
/// assert!(hand.take(PieceKind::Hi));
/// assert!(!hand.take(PieceKind::Hi));
/// assert_eq!(hand.total(), 19);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    counts: [u8; PieceKind::COUNT],
}

impl Hand {
    /// A hand with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            counts: [0; PieceKind::COUNT],
        }
    }

    /// Starting allocation: 9 Fu, 2 each of Kin/Gin/Kyo/Kei, 1 each of Kaku/Hi/Ou.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            counts: [9, 2, 2, 1, 1, 1, 2, 2],
        }
    }

    /// Set the count for one kind.
    #[must_use]
    pub fn with_count(mut self, kind: PieceKind, count: u8) -> Self {
        self.counts[kind.index()] = count;
        self
    }

    #[must_use]
    pub const fn count(&self, kind: PieceKind) -> u8 {
        self.counts[kind.index()]
    }

    /// Remove one piece of `kind`. Returns false if none remain.
    pub fn take(&mut self, kind: PieceKind) -> bool {
        let slot = &mut self.counts[kind.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Total pieces across all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate over (kind, count) pairs, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u8)> + '_ {
        PieceKind::ALL.into_iter().map(|kind| (kind, self.count(kind)))
    }

    /// Kinds with at least one piece remaining.
    pub fn available(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.iter().filter(|&(_, c)| c > 0).map(|(kind, _)| kind)
    }
}
