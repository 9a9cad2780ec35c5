//! Movement profiles.
//!
//! Each `PieceKind` moves along a fixed list of direction vectors, either
//! one step at a time or sliding until blocked. Vectors are written from
//! Player 1's side of the board: a negative row delta is "forward".
//!
//! The table is plain data indexed by the closed `PieceKind` enum. There
//! is no fallback entry; every kind has exactly one profile.

/// A (row-delta, column-delta) step.
pub type Direction = (i8, i8);

/// How a piece kind moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovementProfile {
    /// Step vectors from Player 1's orientation.
    pub directions: &'static [Direction],
    /// Slides along each direction until blocked when true.
    pub continuous: bool,
}

const FORWARD: Direction = (-1, 0);
const BACK: Direction = (1, 0);
const LEFT: Direction = (0, -1);
const RIGHT: Direction = (0, 1);
const FORWARD_LEFT: Direction = (-1, -1);
const FORWARD_RIGHT: Direction = (-1, 1);
const BACK_LEFT: Direction = (1, -1);
const BACK_RIGHT: Direction = (1, 1);

/// Profiles in `PieceKind::ALL` order.
pub(crate) static PROFILES: [MovementProfile; super::PieceKind::COUNT] = [
    // Fu
    MovementProfile {
        directions: &[FORWARD],
        continuous: false,
    },
    // Kin
    MovementProfile {
        directions: &[FORWARD, BACK, LEFT, RIGHT, FORWARD_LEFT, FORWARD_RIGHT],
        continuous: false,
    },
    // Gin
    MovementProfile {
        directions: &[FORWARD_LEFT, FORWARD_RIGHT, BACK_LEFT, BACK_RIGHT, FORWARD],
        continuous: false,
    },
    // Kaku
    MovementProfile {
        directions: &[FORWARD_LEFT, FORWARD_RIGHT, BACK_LEFT, BACK_RIGHT],
        continuous: true,
    },
    // Hi
    MovementProfile {
        directions: &[FORWARD, BACK, LEFT, RIGHT],
        continuous: true,
    },
    // Ou
    MovementProfile {
        directions: &[
            FORWARD_LEFT,
            FORWARD,
            FORWARD_RIGHT,
            LEFT,
            RIGHT,
            BACK_LEFT,
            BACK,
            BACK_RIGHT,
        ],
        continuous: false,
    },
    // Kyo
    MovementProfile {
        directions: &[FORWARD],
        continuous: true,
    },
    // Kei
    MovementProfile {
        directions: &[(-2, -1), (-2, 1)],
        continuous: false,
    },
];

impl super::PieceKind {
    /// Movement profile for this kind.
    #[must_use]
    pub fn profile(self) -> &'static MovementProfile {
        &PROFILES[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PieceKind;

    #[test]
    fn test_table_covers_every_kind() {
        assert_eq!(PROFILES.len(), PieceKind::COUNT);
        for kind in PieceKind::ALL {
            assert!(!kind.profile().directions.is_empty(), "{kind} has no directions");
        }
    }

    #[test]
    fn test_sliding_kinds() {
        let sliding: Vec<_> = PieceKind::ALL
            .into_iter()
            .filter(|k| k.profile().continuous)
            .collect();
        assert_eq!(sliding, vec![PieceKind::Kaku, PieceKind::Hi, PieceKind::Kyo]);
    }

    #[test]
    fn test_profile_shapes() {
        assert_eq!(PieceKind::Fu.profile().directions, &[FORWARD]);
        assert_eq!(PieceKind::Kei.profile().directions, &[(-2i8, -1i8), (-2, 1)]);
        assert_eq!(PieceKind::Ou.profile().directions.len(), 8);
        assert_eq!(PieceKind::Kin.profile().directions.len(), 6);
        assert!(!PieceKind::Kin.profile().directions.contains(&BACK_LEFT));
        assert!(PieceKind::Gin.profile().directions.contains(&BACK_RIGHT));
        assert!(!PieceKind::Gin.profile().directions.contains(&BACK));
    }
}
