//! Expands a movement profile and the current board into legal destination moves.

use itertools::Itertools;

use crate::board::Board;
use crate::catalog::profile_for;
use crate::core::color::Color;
use crate::core::direction::Direction;
use crate::core::square::{Square, BOARD_SIZE};
use crate::options::GameOptions;
use crate::piece::Piece;
use crate::profile::{MovementProfile, UNLIMITED};
use crate::promotion::{check_promotion, PromotionAvailability};

/// How a move reaches its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoveKind {
    /// A step, slide, leap or hook that captures at most the destination occupant.
    Normal,
    /// A slide that captures every enemy piece on the way as well as at the destination.
    RangedCapture,
    /// A two-step move through a caller-chosen middle square.
    Area,
    /// A capture of the adjacent destination piece without moving.
    Igui,
}

/// A legal destination for a piece, with its kind and promotion eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dest: Square,
    pub kind: MoveKind,
    pub promotion: PromotionAvailability,
}

/// Generates legal moves on a borrowed board.
///
/// # Examples
///
/// ```
/// use taikyoku::movegen::{MoveGenerator, MoveKind};
/// use taikyoku::{Board, Color, GameOptions, Piece, PieceIdentity, Square};
///
/// let mut board = Board::empty();
/// let at = Square::new(17, 17).unwrap();
/// let pawn = Piece::new(Color::Black, PieceIdentity::Pawn);
/// board.set(at, Some(pawn));
///
/// let moves = MoveGenerator::new(&board, GameOptions::empty()).legal_moves(Color::Black, pawn, at, None);
/// assert_eq!(1, moves.len());
/// assert_eq!(Square::new(17, 16).unwrap(), moves[0].dest);
/// assert_eq!(MoveKind::Normal, moves[0].kind);
/// ```
pub struct MoveGenerator<'a> {
    board: &'a Board,
    options: GameOptions,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(board: &'a Board, options: GameOptions) -> MoveGenerator<'a> {
        MoveGenerator { board, options }
    }

    /// Returns every legal move of `piece` standing on `at`.
    ///
    /// Area moves are only generated through the given `mid` square. An empty `at` yields
    /// no moves.
    pub fn legal_moves(
        &self,
        mover: Color,
        piece: Piece,
        at: Square,
        mid: Option<Square>,
    ) -> Vec<Move> {
        if self.board.is_empty_at(at) {
            return Vec::new();
        }

        let profile = profile_for(piece.identity, self.options);
        let mut dests = Vec::new();

        self.add_slides(&mut dests, mover, piece, at, profile);
        self.add_jumps(&mut dests, mover, piece.owner, at, profile);
        self.add_hooks(&mut dests, mover, piece.owner, at, profile);
        if let Some(mid) = mid {
            self.add_area(&mut dests, mover, piece.owner, at, mid, profile);
        }
        self.add_igui(&mut dests, mover, piece.owner, at, profile);

        dests
            .into_iter()
            .unique()
            .map(|(dest, kind)| {
                let captures = !self.captures(mover, piece.owner, at, dest, kind, mid).is_empty();
                let end = if kind == MoveKind::Igui { at } else { dest };
                Move {
                    dest,
                    kind,
                    promotion: check_promotion(piece, at, end, captures, self.options),
                }
            })
            .collect()
    }

    /// Returns the pieces a move captures, with their squares, nearest first.
    pub fn captures(
        &self,
        mover: Color,
        owner: Color,
        at: Square,
        dest: Square,
        kind: MoveKind,
        mid: Option<Square>,
    ) -> Vec<(Piece, Square)> {
        let enemy = |sq: Square| {
            self.board
                .get(sq)
                .filter(|pc| pc.owner != mover)
                .map(|pc| (pc, sq))
        };

        match kind {
            MoveKind::Normal | MoveKind::Igui => enemy(dest).into_iter().collect(),
            MoveKind::RangedCapture => {
                let Some(d) = Direction::between(owner, at, dest) else {
                    return Vec::new();
                };
                (1..BOARD_SIZE)
                    .map_while(|n| d.walk(owner, at, n))
                    .take_while_inclusive(|sq| *sq != dest)
                    .filter_map(enemy)
                    .collect()
            }
            MoveKind::Area => {
                let mut caps: Vec<_> = mid.and_then(enemy).into_iter().collect();
                if dest != at && Some(dest) != mid {
                    caps.extend(enemy(dest));
                }
                caps
            }
        }
    }

    fn add_slides(
        &self,
        out: &mut Vec<(Square, MoveKind)>,
        mover: Color,
        piece: Piece,
        at: Square,
        profile: &MovementProfile,
    ) {
        for d in Direction::BASIC {
            let range = profile.step_range(d);
            if range > 0 {
                let ranged = profile
                    .range_capture_in(d)
                    .then(|| piece.identity.capture_rank());
                self.slide(out, mover, piece.owner, at, d, range, ranged);
            }
        }
    }

    fn add_jumps(
        &self,
        out: &mut Vec<(Square, MoveKind)>,
        mover: Color,
        owner: Color,
        at: Square,
        profile: &MovementProfile,
    ) {
        for d in Direction::ALL {
            let Some(jump) = profile.jump_range(d) else {
                continue;
            };

            for &n in jump.distances {
                let Some(landing) = d.walk(owner, at, n) else {
                    continue;
                };

                match self.board.get(landing) {
                    Some(pc) if pc.owner == mover => {}
                    Some(_) => out.push((landing, MoveKind::Normal)),
                    None => {
                        out.push((landing, MoveKind::Normal));
                        if jump.range_after > 0 {
                            self.slide(out, mover, owner, landing, d, jump.range_after, None);
                        }
                    }
                }
            }
        }
    }

    fn add_hooks(
        &self,
        out: &mut Vec<(Square, MoveKind)>,
        mover: Color,
        owner: Color,
        at: Square,
        profile: &MovementProfile,
    ) {
        let Some(hook) = profile.hook_move() else {
            return;
        };

        for &first in hook.first_legs() {
            for n in 1..=hook.turn_after() {
                let Some(corner) = first.walk(owner, at, n) else {
                    break;
                };
                if !self.board.is_empty_at(corner) {
                    break;
                }

                for turn in hook.turns(first) {
                    self.slide(out, mover, owner, corner, turn, UNLIMITED, None);
                }
            }
        }
    }

    fn add_area(
        &self,
        out: &mut Vec<(Square, MoveKind)>,
        mover: Color,
        owner: Color,
        at: Square,
        mid: Square,
        profile: &MovementProfile,
    ) {
        // Each leg must be a one-square step the profile allows.
        let is_step = |from: Square, to: Square| {
            adjacent(from, to)
                && Direction::between(owner, from, to).is_some_and(|d| profile.step_range(d) > 0)
        };

        if !profile.area_move() || !is_step(at, mid) || self.board.is_owned_by(mid, mover) {
            return;
        }

        for end in Direction::BASIC
            .into_iter()
            .filter_map(|d| d.walk(owner, mid, 1))
        {
            if is_step(mid, end) && (end == at || !self.board.is_owned_by(end, mover)) {
                out.push((end, MoveKind::Area));
            }
        }
    }

    fn add_igui(
        &self,
        out: &mut Vec<(Square, MoveKind)>,
        mover: Color,
        owner: Color,
        at: Square,
        profile: &MovementProfile,
    ) {
        for d in Direction::BASIC {
            if !profile.igui_in(d) {
                continue;
            }
            if let Some(target) = d.walk(owner, at, 1) {
                if self.board.get(target).is_some_and(|pc| pc.owner != mover) {
                    out.push((target, MoveKind::Igui));
                }
            }
        }
    }

    /// Walks from `from` (exclusive) in direction `d` for up to `range` squares.
    ///
    /// Own pieces stop the walk before their square. Enemy pieces stop it on their square
    /// unless `ranged` holds a rank above theirs, in which case the walk passes over them.
    /// Squares past the first enemy are tagged as ranged captures.
    #[allow(clippy::too_many_arguments)]
    fn slide(
        &self,
        out: &mut Vec<(Square, MoveKind)>,
        mover: Color,
        owner: Color,
        from: Square,
        d: Direction,
        range: u8,
        ranged: Option<u8>,
    ) {
        let limit = if range == UNLIMITED { BOARD_SIZE } else { range };
        let mut passed_enemy = false;

        for n in 1..=limit {
            let Some(sq) = d.walk(owner, from, n) else {
                break;
            };
            let kind = if passed_enemy {
                MoveKind::RangedCapture
            } else {
                MoveKind::Normal
            };

            match self.board.get(sq) {
                None => out.push((sq, kind)),
                Some(pc) if pc.owner == mover => break,
                Some(pc) => {
                    out.push((sq, kind));
                    if !ranged.is_some_and(|rank| pc.identity.capture_rank() < rank) {
                        break;
                    }
                    passed_enemy = true;
                }
            }
        }
    }
}

/// Returns true if the squares touch orthogonally or diagonally.
pub fn adjacent(a: Square, b: Square) -> bool {
    let dx = a.x().abs_diff(b.x());
    let dy = a.y().abs_diff(b.y());
    a != b && dx <= 1 && dy <= 1
}
