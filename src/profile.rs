//! Movement profiles: the data describing every way a piece can relocate or capture.
//!
//! Profiles are immutable and built in `const` context by the catalog, using the
//! chaining builders on [`MovementProfile::EMPTY`]:
//!
//! ```
//! use taikyoku::profile::{MovementProfile, UNLIMITED};
//! use taikyoku::{Direction, DirectionSet};
//!
//! const FORWARD: DirectionSet = DirectionSet::of(&[Direction::Up]);
//! const SIDES: DirectionSet = DirectionSet::of(&[Direction::Left, Direction::Right]);
//!
//! let p = MovementProfile::EMPTY.slide(FORWARD).step(SIDES, 2);
//! assert_eq!(UNLIMITED, p.step_range(Direction::Up));
//! assert_eq!(2, p.step_range(Direction::Left));
//! assert_eq!(0, p.step_range(Direction::Down));
//! ```

use crate::core::direction::{Direction, DirectionSet};

/// Range value meaning "slide to the edge of the board".
pub const UNLIMITED: u8 = u8::MAX;

/// A blind leap to one of several exact distances, optionally followed by a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    /// Exact distances the piece may leap, in unit steps of the direction.
    pub distances: &'static [u8],
    /// How far the piece may keep sliding after the furthest leap lands.
    pub range_after: u8,
}

/// The shape of a 90 degree turning move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookMove {
    /// Slide orthogonally, turn once, slide again.
    Orthogonal,
    /// Slide diagonally, turn once, slide again.
    Diagonal,
    /// Slide along a forward diagonal and turn onto the other forward diagonal.
    ForwardDiagonal,
}

impl HookMove {
    /// Maximum length of the first leg before the turn.
    pub fn turn_after(self) -> u8 {
        match self {
            HookMove::Orthogonal => 2,
            HookMove::Diagonal | HookMove::ForwardDiagonal => 1,
        }
    }

    /// Directions the first leg may take.
    pub fn first_legs(self) -> &'static [Direction] {
        match self {
            HookMove::Orthogonal => &[
                Direction::Up,
                Direction::Right,
                Direction::Down,
                Direction::Left,
            ],
            HookMove::Diagonal => &[
                Direction::UpRight,
                Direction::DownRight,
                Direction::DownLeft,
                Direction::UpLeft,
            ],
            HookMove::ForwardDiagonal => &[Direction::UpRight, Direction::UpLeft],
        }
    }

    /// Directions the second leg may take after turning from `first`.
    pub fn turns(self, first: Direction) -> Vec<Direction> {
        match self {
            HookMove::ForwardDiagonal => match first {
                Direction::UpRight => vec![Direction::UpLeft],
                Direction::UpLeft => vec![Direction::UpRight],
                _ => Vec::new(),
            },
            _ => first
                .perpendiculars()
                .map(|p| p.to_vec())
                .unwrap_or_default(),
        }
    }
}

/// Describes every way a piece can move, independent of the board.
///
/// Per-direction arrays are indexed by [`Direction::index`]. Range capture and igui
/// only exist for the eight basic directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementProfile {
    step_range: [u8; Direction::NUM_BASIC],
    jump_range: [Option<Jump>; Direction::NUM],
    hook_move: Option<HookMove>,
    area_move: bool,
    range_capture: [bool; Direction::NUM_BASIC],
    igui: [bool; Direction::NUM_BASIC],
}

impl MovementProfile {
    /// A profile with no moves at all.
    pub const EMPTY: MovementProfile = MovementProfile {
        step_range: [0; Direction::NUM_BASIC],
        jump_range: [None; Direction::NUM],
        hook_move: None,
        area_move: false,
        range_capture: [false; Direction::NUM_BASIC],
        igui: [false; Direction::NUM_BASIC],
    };

    /// Allows stepping up to `n` squares in each basic direction of `dirs`.
    #[must_use]
    pub const fn step(mut self, dirs: DirectionSet, n: u8) -> MovementProfile {
        let mut i = 0;
        while i < Direction::NUM_BASIC {
            if dirs.contains_index(i) {
                self.step_range[i] = n;
            }
            i += 1;
        }
        self
    }

    /// Allows sliding without limit in each basic direction of `dirs`.
    #[must_use]
    pub const fn slide(self, dirs: DirectionSet) -> MovementProfile {
        self.step(dirs, UNLIMITED)
    }

    /// Allows blind leaps of exactly the listed distances in each direction of `dirs`.
    #[must_use]
    pub const fn jump(self, dirs: DirectionSet, distances: &'static [u8]) -> MovementProfile {
        self.jump_then(dirs, distances, 0)
    }

    /// Allows blind leaps followed by a slide of up to `after` squares.
    #[must_use]
    pub const fn jump_then(
        mut self,
        dirs: DirectionSet,
        distances: &'static [u8],
        after: u8,
    ) -> MovementProfile {
        let mut i = 0;
        while i < Direction::NUM {
            if dirs.contains_index(i) {
                self.jump_range[i] = Some(Jump {
                    distances,
                    range_after: after,
                });
            }
            i += 1;
        }
        self
    }

    /// Adds a turning move.
    #[must_use]
    pub const fn hook(mut self, hook: HookMove) -> MovementProfile {
        self.hook_move = Some(hook);
        self
    }

    /// Adds the two-step area move.
    #[must_use]
    pub const fn area(mut self) -> MovementProfile {
        self.area_move = true;
        self
    }

    /// Lets slides in `dirs` continue past enemy pieces, capturing each of them.
    #[must_use]
    pub const fn range_capture(mut self, dirs: DirectionSet) -> MovementProfile {
        let mut i = 0;
        while i < Direction::NUM_BASIC {
            if dirs.contains_index(i) {
                self.range_capture[i] = true;
            }
            i += 1;
        }
        self
    }

    /// Allows capturing an adjacent enemy in `dirs` without moving.
    #[must_use]
    pub const fn igui(mut self, dirs: DirectionSet) -> MovementProfile {
        let mut i = 0;
        while i < Direction::NUM_BASIC {
            if dirs.contains_index(i) {
                self.igui[i] = true;
            }
            i += 1;
        }
        self
    }

    /// Returns the slide range in `d`, 0 for knight-like directions.
    pub fn step_range(&self, d: Direction) -> u8 {
        if d.is_basic() {
            self.step_range[d.index()]
        } else {
            0
        }
    }

    pub fn jump_range(&self, d: Direction) -> Option<Jump> {
        self.jump_range[d.index()]
    }

    pub fn hook_move(&self) -> Option<HookMove> {
        self.hook_move
    }

    pub fn area_move(&self) -> bool {
        self.area_move
    }

    pub fn range_capture_in(&self, d: Direction) -> bool {
        d.is_basic() && self.range_capture[d.index()]
    }

    pub fn igui_in(&self, d: Direction) -> bool {
        d.is_basic() && self.igui[d.index()]
    }

    /// Returns true if the profile grants no move of any kind.
    pub fn is_immobile(&self) -> bool {
        self.step_range.iter().all(|&n| n == 0)
            && self.jump_range.iter().all(Option::is_none)
            && self.hook_move.is_none()
            && !self.area_move
            && self.igui.iter().all(|&b| !b)
    }
}

impl Default for MovementProfile {
    fn default() -> Self {
        MovementProfile::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    const ORTHO: DirectionSet = DirectionSet::of(&[Up, Right, Down, Left]);
    const DIAG: DirectionSet = DirectionSet::of(&[UpRight, DownRight, DownLeft, UpLeft]);

    #[test]
    fn empty_is_immobile() {
        assert!(MovementProfile::EMPTY.is_immobile());
        assert!(!MovementProfile::EMPTY.step(ORTHO, 1).is_immobile());
        assert!(!MovementProfile::EMPTY.area().is_immobile());
    }

    #[test]
    fn builders() {
        const P: MovementProfile = MovementProfile::EMPTY
            .slide(DIAG)
            .step(ORTHO, 1)
            .jump_then(DirectionSet::of(&[Up, KnightUpLeft]), &[2, 3], UNLIMITED)
            .range_capture(DIAG)
            .igui(ORTHO);

        assert_eq!(UNLIMITED, P.step_range(UpLeft));
        assert_eq!(1, P.step_range(Down));
        assert_eq!(0, P.step_range(KnightUpLeft));
        assert_eq!(
            Some(Jump { distances: &[2, 3], range_after: UNLIMITED }),
            P.jump_range(KnightUpLeft)
        );
        assert_eq!(None, P.jump_range(Down));
        assert!(P.range_capture_in(DownLeft));
        assert!(!P.range_capture_in(Down));
        assert!(P.igui_in(Left));
        assert!(!P.igui_in(KnightUpRight));
    }

    #[test]
    fn hook_turns() {
        assert_eq!(vec![Right, Left], HookMove::Orthogonal.turns(Up));
        assert_eq!(vec![DownRight, UpLeft], HookMove::Diagonal.turns(UpRight));
        assert_eq!(vec![UpRight], HookMove::ForwardDiagonal.turns(UpLeft));
        assert!(HookMove::ForwardDiagonal.turns(DownLeft).is_empty());
        assert_eq!(2, HookMove::Orthogonal.turn_after());
    }
}
