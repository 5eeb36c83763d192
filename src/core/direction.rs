//! Compass directions used by movement profiles.
//!
//! Directions are named from the mover's point of view: `Up` is always toward the
//! opponent. The eight basic directions come first so that profile fields indexed by
//! basic direction can share [`Direction::index`] with the sixteen-entry jump table.

use std::fmt;

use super::color::Color;
use super::square::Square;

/// One of the eight basic or eight knight-like directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
    KnightUpRight,
    KnightRightUp,
    KnightRightDown,
    KnightDownRight,
    KnightDownLeft,
    KnightLeftDown,
    KnightLeftUp,
    KnightUpLeft,
}

impl Direction {
    /// Number of basic (orthogonal and diagonal) directions.
    pub const NUM_BASIC: usize = 8;

    /// Number of directions including the knight-like ones.
    pub const NUM: usize = 16;

    /// The eight orthogonal and diagonal directions, clockwise from `Up`.
    pub const BASIC: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// Every direction, basic ones first.
    pub const ALL: [Direction; 16] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
        Direction::KnightUpRight,
        Direction::KnightRightUp,
        Direction::KnightRightDown,
        Direction::KnightDownRight,
        Direction::KnightDownLeft,
        Direction::KnightLeftDown,
        Direction::KnightLeftUp,
        Direction::KnightUpLeft,
    ];

    /// Converts the instance into the unique number for array indexing purpose.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the eight orthogonal and diagonal directions.
    pub fn is_basic(self) -> bool {
        self.index() < Self::NUM_BASIC
    }

    /// Returns true for `Up`, `Down`, `Left` and `Right`.
    pub fn is_orthogonal(self) -> bool {
        self.is_basic() && self.index() % 2 == 0
    }

    /// Returns true for the four basic diagonals.
    pub fn is_diagonal(self) -> bool {
        self.is_basic() && self.index() % 2 == 1
    }

    /// Board offset of one unit step as seen by Black.
    pub fn offset(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::Down => (0, 1),
            Direction::DownLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::KnightUpRight => (1, -2),
            Direction::KnightRightUp => (2, -1),
            Direction::KnightRightDown => (2, 1),
            Direction::KnightDownRight => (1, 2),
            Direction::KnightDownLeft => (-1, 2),
            Direction::KnightLeftDown => (-2, 1),
            Direction::KnightLeftUp => (-2, -1),
            Direction::KnightUpLeft => (-1, -2),
        }
    }

    /// Board offset of one unit step for a piece owned by `c`.
    ///
    /// White's directions are Black's rotated by 180 degrees.
    pub fn offset_for(self, c: Color) -> (i16, i16) {
        let (dx, dy) = self.offset();
        match c {
            Color::Black => (dx, dy),
            Color::White => (-dx, -dy),
        }
    }

    /// Returns the square `distance` unit steps away from `from`, if it is on the board.
    pub fn walk(self, c: Color, from: Square, distance: u8) -> Option<Square> {
        let (dx, dy) = self.offset_for(c);
        let d = distance as i16;
        from.shift(dx * d, dy * d)
    }

    /// The two basic directions at 90 degrees to this one.
    ///
    /// Knight-like directions have no perpendiculars.
    pub fn perpendiculars(self) -> Option<[Direction; 2]> {
        if !self.is_basic() {
            return None;
        }

        let i = self.index();
        Some([
            Self::BASIC[(i + 2) % Self::NUM_BASIC],
            Self::BASIC[(i + 6) % Self::NUM_BASIC],
        ])
    }

    /// Finds the basic direction pointing from `from` toward `to` for a piece of color `c`.
    ///
    /// Returns `None` unless both squares lie on one orthogonal or diagonal line.
    pub fn between(c: Color, from: Square, to: Square) -> Option<Direction> {
        let dx = to.x() as i16 - from.x() as i16;
        let dy = to.y() as i16 - from.y() as i16;

        if (dx == 0 && dy == 0) || (dx != 0 && dy != 0 && dx.abs() != dy.abs()) {
            return None;
        }

        let unit = (dx.signum(), dy.signum());
        Self::BASIC.into_iter().find(|d| d.offset_for(c) == unit)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A set of directions, built in `const` context by the movement table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u16);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);

    /// Creates a set from a list of directions.
    pub const fn of(dirs: &[Direction]) -> DirectionSet {
        let mut bits = 0u16;
        let mut i = 0;
        while i < dirs.len() {
            bits |= 1 << (dirs[i] as u16);
            i += 1;
        }
        DirectionSet(bits)
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn or(self, other: DirectionSet) -> DirectionSet {
        DirectionSet(self.0 | other.0)
    }

    /// Returns this set without the directions in `other`.
    #[must_use]
    pub const fn minus(self, other: DirectionSet) -> DirectionSet {
        DirectionSet(self.0 & !other.0)
    }

    /// Returns true if the direction with the given index is in the set.
    pub const fn contains_index(self, index: usize) -> bool {
        index < Direction::NUM && self.0 & (1 << index) != 0
    }

    /// Returns true if the direction is in the set.
    pub const fn contains(self, d: Direction) -> bool {
        self.contains_index(d as usize)
    }

    /// Returns true if the set holds no direction.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the directions of the set in [`Direction::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_first() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(i, d.index());
            assert_eq!(i < 8, d.is_basic());
        }
        assert_eq!(&Direction::ALL[..8], &Direction::BASIC[..]);
    }

    #[test]
    fn white_is_rotated() {
        for d in Direction::ALL {
            let (bx, by) = d.offset_for(Color::Black);
            let (wx, wy) = d.offset_for(Color::White);
            assert_eq!((bx, by), (-wx, -wy), "failed for {d}");
        }
        assert_eq!((0, -1), Direction::Up.offset_for(Color::Black));
        assert_eq!((0, 1), Direction::Up.offset_for(Color::White));
    }

    #[test]
    fn perpendiculars() {
        assert_eq!(
            Some([Direction::Right, Direction::Left]),
            Direction::Up.perpendiculars()
        );
        assert_eq!(
            Some([Direction::DownRight, Direction::UpLeft]),
            Direction::UpRight.perpendiculars()
        );
        assert_eq!(None, Direction::KnightUpLeft.perpendiculars());
    }

    #[test]
    fn between() {
        let from = Square::new(10, 10).unwrap();
        let cases = [
            ((10, 3), Some(Direction::Up)),
            ((14, 6), Some(Direction::UpRight)),
            ((2, 10), Some(Direction::Left)),
            ((12, 13), None),
            ((10, 10), None),
        ];

        for (i, case) in cases.iter().enumerate() {
            let to = Square::new(case.0 .0, case.0 .1).unwrap();
            assert_eq!(case.1, Direction::between(Color::Black, from, to), "failed at #{i}");
        }

        let to = Square::new(10, 3).unwrap();
        assert_eq!(Some(Direction::Down), Direction::between(Color::White, from, to));
    }

    #[test]
    fn direction_set() {
        const ORTHO: DirectionSet = DirectionSet::of(&[
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ]);

        assert!(ORTHO.contains(Direction::Up));
        assert!(!ORTHO.contains(Direction::UpRight));
        assert_eq!(4, ORTHO.iter().count());

        let no_down = ORTHO.minus(DirectionSet::of(&[Direction::Down]));
        assert_eq!(3, no_down.iter().count());
        assert!(DirectionSet::EMPTY.is_empty());
        assert!(!ORTHO.contains_index(99));
    }
}
