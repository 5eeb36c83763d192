//! Move recording and notation formatting.
//!
//! This module provides the records kept for every applied move, which carry enough
//! information to undo it, and the notations used to display them.

use itertools::Itertools;

use crate::catalog::PieceIdentity;
use crate::core::color::Color;
use crate::core::square::Square;
use crate::piece::Piece;

/// MoveDescription stores information necessary to undo the move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDescription {
    pub start: Square,
    pub end: Square,
    /// Middle square of an area move, or the target of a capture without moving.
    pub mid: Option<Square>,
    /// The piece as it stands on `end` after the move.
    pub placed: Piece,
    /// The identity before promotion, if the move promoted the piece.
    pub promoted_from: Option<PieceIdentity>,
    /// Captured pieces and the squares they were taken from, nearest first.
    pub captures: Vec<(Piece, Square)>,
}

impl MoveDescription {
    /// Returns the side that made the move.
    pub fn mover(&self) -> Color {
        self.placed.owner
    }

    /// Returns the piece as it stood on `start` before the move.
    pub fn moved_piece(&self) -> Piece {
        match self.promoted_from {
            Some(original) => self.placed.demote(original),
            None => self.placed,
        }
    }

    /// Returns true if the move promoted the piece.
    pub fn is_promotion(&self) -> bool {
        self.promoted_from.is_some()
    }

    /// Returns true if the move captured a royal piece.
    pub fn captured_royal(&self) -> bool {
        self.captures.iter().any(|(pc, _)| pc.is_royal())
    }

    /// Formats the move in the specified notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use taikyoku::record::{MoveDescription, NotationFormat};
    /// use taikyoku::{Color, Piece, PieceIdentity, Square};
    ///
    /// let record = MoveDescription {
    ///     start: Square::new(17, 17).unwrap(),
    ///     end: Square::new(17, 16).unwrap(),
    ///     mid: None,
    ///     placed: Piece::new(Color::Black, PieceIdentity::Pawn),
    ///     promoted_from: None,
    ///     captures: vec![(Piece::new(Color::White, PieceIdentity::King), Square::new(17, 16).unwrap())],
    /// };
    ///
    /// assert_eq!("17,17-17,16x", record.to_notation(NotationFormat::Coordinate));
    /// assert_eq!("Pawn 17,17-17,16 x King", record.to_notation(NotationFormat::Named));
    /// ```
    pub fn to_notation(&self, format: NotationFormat) -> String {
        match format {
            NotationFormat::Coordinate => self.to_coordinate(),
            NotationFormat::Named => self.to_named(),
        }
    }

    /// Coordinate notation: `start[-mid]-end`, then `x` if anything was captured and `+`
    /// if the piece promoted.
    pub fn to_coordinate(&self) -> String {
        let mut s = self.path();
        if !self.captures.is_empty() {
            s.push('x');
        }
        if self.is_promotion() {
            s.push('+');
        }
        s
    }

    /// Named notation: `Pawn 17,17-17,16 x King`, with `= Tokin` appended on promotion.
    pub fn to_named(&self) -> String {
        let mut s = format!("{} {}", self.moved_piece().identity.name(), self.path());
        if !self.captures.is_empty() {
            let names = self.captures.iter().map(|(pc, _)| pc.identity.name()).join(", ");
            s.push_str(&format!(" x {names}"));
        }
        if self.is_promotion() {
            s.push_str(&format!(" = {}", self.placed.identity.name()));
        }
        s
    }

    fn path(&self) -> String {
        match self.mid {
            Some(mid) => format!("{}-{}-{}", self.start, mid, self.end),
            None => format!("{}-{}", self.start, self.end),
        }
    }
}

/// Notation format for move display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotationFormat {
    /// Squares only: `17,17-17,16x`.
    Coordinate,
    /// Piece names and squares: `Pawn 17,17-17,16 x King`.
    Named,
}

/// The stack of applied moves, most recent last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory(Vec<MoveDescription>);

impl MoveHistory {
    pub fn new() -> MoveHistory {
        MoveHistory(Vec::new())
    }

    pub fn push(&mut self, record: MoveDescription) {
        self.0.push(record);
    }

    pub fn pop(&mut self) -> Option<MoveDescription> {
        self.0.pop()
    }

    pub fn last(&self) -> Option<&MoveDescription> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates from the first move to the most recent one.
    pub fn iter(&self) -> std::slice::Iter<'_, MoveDescription> {
        self.0.iter()
    }
}

impl From<Vec<MoveDescription>> for MoveHistory {
    fn from(records: Vec<MoveDescription>) -> Self {
        MoveHistory(records)
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = &'a MoveDescription;
    type IntoIter = std::slice::Iter<'a, MoveDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(x: u8, y: u8) -> Square {
        Square::new(x, y).unwrap()
    }

    fn promotion_record() -> MoveDescription {
        let pawn = Piece::new(Color::White, PieceIdentity::Pawn);
        MoveDescription {
            start: sq(4, 24),
            end: sq(4, 25),
            mid: None,
            placed: pawn.promote().unwrap(),
            promoted_from: Some(PieceIdentity::Pawn),
            captures: Vec::new(),
        }
    }

    #[test]
    fn promotion() {
        let record = promotion_record();
        assert_eq!(Color::White, record.mover());
        assert_eq!(Piece::new(Color::White, PieceIdentity::Pawn), record.moved_piece());
        assert_eq!("4,24-4,25+", record.to_coordinate());
        assert_eq!("Pawn 4,24-4,25 = Tokin", record.to_named());
        assert!(!record.captured_royal());
    }

    #[test]
    fn area_notation() {
        let lion = Piece::new(Color::Black, PieceIdentity::Lion);
        let record = MoveDescription {
            start: sq(10, 10),
            end: sq(10, 8),
            mid: Some(sq(10, 9)),
            placed: lion,
            promoted_from: None,
            captures: vec![
                (Piece::new(Color::White, PieceIdentity::Pawn), sq(10, 9)),
                (Piece::new(Color::White, PieceIdentity::CrownPrince), sq(10, 8)),
            ],
        };

        assert_eq!("10,10-10,9-10,8x", record.to_notation(NotationFormat::Coordinate));
        assert_eq!(
            "Lion 10,10-10,9-10,8 x Pawn, Crown Prince",
            record.to_notation(NotationFormat::Named)
        );
        assert!(record.captured_royal());
    }

    #[test]
    fn history_stack() {
        let mut history = MoveHistory::new();
        assert!(history.is_empty());
        assert_eq!(None, history.pop());

        history.push(promotion_record());
        assert_eq!(1, history.len());
        assert_eq!(Some(&promotion_record()), history.last());
        assert_eq!(1, history.iter().count());

        assert_eq!(Some(promotion_record()), history.pop());
        assert!(history.is_empty());
    }
}
