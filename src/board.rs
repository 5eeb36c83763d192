use std::fmt;

use crate::core::color::Color;
use crate::core::square::{Square, NUM_SQUARES};
use crate::piece::Piece;

/// The 36×36 grid of squares, each holding at most one piece.
#[derive(Clone, PartialEq, Eq)]
pub struct Board(Box<[Option<Piece>]>);

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Board {
        Board(vec![None; NUM_SQUARES].into_boxed_slice())
    }

    /// Returns the piece on `sq`.
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.0[sq.index()]
    }

    /// Puts `pc` on `sq`, replacing whatever was there.
    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.0[sq.index()] = pc;
    }

    /// Returns true if no piece stands on `sq`.
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.0[sq.index()].is_none()
    }

    /// Returns true if a piece of color `c` stands on `sq`.
    pub fn is_owned_by(&self, sq: Square, c: Color) -> bool {
        self.get(sq).is_some_and(|pc| pc.owner == c)
    }

    /// Iterates over every occupied square, rank by rank.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |sq| self.get(sq).map(|pc| (sq, pc)))
    }

    /// Iterates over the pieces of one side.
    pub fn pieces_of(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, pc)| pc.owner == c)
    }

    /// Returns true if `c` still has a royal piece on the board.
    pub fn has_royal(&self, c: Color) -> bool {
        self.pieces_of(c).any(|(_, pc)| pc.is_royal())
    }

    /// Number of pieces on the board.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|pc| pc.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "Board {{ ")?;

        for (sq, pc) in self.pieces() {
            write!(fmt, "{sq}:{pc} ")?;
        }
        write!(fmt, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PieceIdentity;

    #[test]
    fn set_and_clear() {
        let mut board = Board::empty();
        let sq = Square::new(17, 17).unwrap();
        let pc = Piece::new(Color::Black, PieceIdentity::Pawn);

        assert!(board.is_empty_at(sq));
        board.set(sq, Some(pc));
        assert_eq!(Some(pc), board.get(sq));
        assert!(board.is_owned_by(sq, Color::Black));
        assert!(!board.is_owned_by(sq, Color::White));
        assert_eq!(1, board.count());

        board.set(sq, None);
        assert!(board.is_empty_at(sq));
        assert_eq!(0, board.count());
    }

    #[test]
    fn royals() {
        let mut board = Board::empty();
        board.set(
            Square::new(0, 0).unwrap(),
            Some(Piece::new(Color::White, PieceIdentity::CrownPrince)),
        );
        board.set(
            Square::new(1, 0).unwrap(),
            Some(Piece::new(Color::Black, PieceIdentity::Queen)),
        );

        assert!(board.has_royal(Color::White));
        assert!(!board.has_royal(Color::Black));
        assert_eq!(1, board.pieces_of(Color::Black).count());
    }
}
