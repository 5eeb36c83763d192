use std::fmt;

use crate::catalog::PieceIdentity;
use crate::core::color::Color;

/// Represents a piece on the game board.
///
/// A promoted piece carries the identity it promoted *to*; the identity it had before
/// promotion is kept by the move that promoted it.
///
/// # Examples
///
/// ```
/// use taikyoku::{Color, Piece, PieceIdentity};
///
/// let pawn = Piece::new(Color::Black, PieceIdentity::Pawn);
/// assert_eq!("P", pawn.to_string());
///
/// let tokin = pawn.promote().unwrap();
/// assert_eq!(PieceIdentity::Tokin, tokin.identity);
/// assert!(tokin.promoted);
/// assert_eq!(None, tokin.promote());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Color,
    pub identity: PieceIdentity,
    pub promoted: bool,
}

impl Piece {
    /// Creates an unpromoted piece.
    pub fn new(owner: Color, identity: PieceIdentity) -> Piece {
        Piece {
            owner,
            identity,
            promoted: false,
        }
    }

    /// Returns the promoted form of this piece, if it has one.
    #[must_use]
    pub fn promote(self) -> Option<Piece> {
        if self.promoted {
            return None;
        }

        self.identity.promotes_to().map(|identity| Piece {
            owner: self.owner,
            identity,
            promoted: true,
        })
    }

    /// Returns this piece reverted to the identity it had before promoting.
    #[must_use]
    pub fn demote(self, original: PieceIdentity) -> Piece {
        Piece {
            owner: self.owner,
            identity: original,
            promoted: false,
        }
    }

    /// Returns true if this piece can promote at all.
    pub fn can_promote(self) -> bool {
        !self.promoted && self.identity.promotes_to().is_some()
    }

    /// Returns true for the pieces whose loss ends the game.
    pub fn is_royal(self) -> bool {
        self.identity.is_royal()
    }

    /// Returns true if the piece belongs to `c`.
    pub fn is_owned_by(self, c: Color) -> bool {
        self.owner == c
    }
}

impl fmt::Display for Piece {
    /// Writes the board label: White pieces in lower case, promoted pieces prefixed with `+`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.promoted {
            write!(f, "+")?;
        }

        match self.owner {
            Color::Black => write!(f, "{}", self.identity.abbreviation()),
            Color::White => write!(f, "{}", self.identity.abbreviation().to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promote() {
        let ok_cases = [
            (PieceIdentity::Pawn, PieceIdentity::Tokin),
            (PieceIdentity::DrunkElephant, PieceIdentity::CrownPrince),
            (PieceIdentity::GoldGeneral, PieceIdentity::Rook),
            (PieceIdentity::Lion, PieceIdentity::FuriousFiend),
        ];
        let ng_cases = [PieceIdentity::King, PieceIdentity::Tokin, PieceIdentity::GreatGeneral];

        for (i, case) in ok_cases.iter().enumerate() {
            let pc = Piece::new(Color::White, case.0);
            let promoted = pc.promote().unwrap_or_else(|| panic!("failed at #{i}"));
            assert_eq!(case.1, promoted.identity, "failed at #{i}");
            assert_eq!(Color::White, promoted.owner, "failed at #{i}");
            assert_eq!(pc, promoted.demote(case.0), "failed at #{i}");
        }

        for (i, case) in ng_cases.iter().enumerate() {
            assert!(Piece::new(Color::Black, *case).promote().is_none(), "failed at #{i}");
        }
    }

    #[test]
    fn promoted_rook_stays() {
        let rook = Piece::new(Color::Black, PieceIdentity::GoldGeneral).promote().unwrap();
        assert_eq!(PieceIdentity::Rook, rook.identity);
        assert!(!rook.can_promote());
        assert!(Piece::new(Color::Black, PieceIdentity::Rook).can_promote());
    }

    #[test]
    fn display() {
        assert_eq!("de", Piece::new(Color::White, PieceIdentity::DrunkElephant).to_string());
        let cp = Piece::new(Color::Black, PieceIdentity::DrunkElephant).promote().unwrap();
        assert_eq!("+CP", cp.to_string());
    }

    #[test]
    fn royal() {
        assert!(Piece::new(Color::Black, PieceIdentity::King).is_royal());
        assert!(!Piece::new(Color::Black, PieceIdentity::Queen).is_royal());
    }
}
