//! Promotion zones and promotion eligibility.

use crate::catalog::profile_for;
use crate::core::color::Color;
use crate::core::direction::Direction;
use crate::core::square::Square;
use crate::options::GameOptions;
use crate::piece::Piece;
use crate::profile::MovementProfile;

/// Number of ranks, counted from the far edge, that form a side's promotion zone.
pub const PROMOTION_ZONE_DEPTH: u8 = 11;

/// Whether a move may, must or cannot promote the moving piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PromotionAvailability {
    None,
    May,
    Must,
}

impl PromotionAvailability {
    /// Returns true unless promotion is unavailable.
    pub fn is_available(self) -> bool {
        self != PromotionAvailability::None
    }
}

/// Returns true if `sq` lies in the promotion zone of `c`.
///
/// ```
/// use taikyoku::promotion::in_promotion_zone;
/// use taikyoku::{Color, Square};
///
/// assert!(in_promotion_zone(Color::Black, Square::new(0, 10).unwrap()));
/// assert!(!in_promotion_zone(Color::Black, Square::new(0, 11).unwrap()));
/// assert!(in_promotion_zone(Color::White, Square::new(0, 25).unwrap()));
/// ```
pub fn in_promotion_zone(c: Color, sq: Square) -> bool {
    sq.relative_rank(c) < PROMOTION_ZONE_DEPTH
}

/// Determines whether moving `piece` from `start` to `end` may or must promote it.
///
/// A move may promote when it enters the zone from outside, or when it captures while
/// starting inside the zone. It must promote when it ends in the zone and the unpromoted
/// piece would have no move at all from `end`.
pub fn check_promotion(
    piece: Piece,
    start: Square,
    end: Square,
    did_capture: bool,
    options: GameOptions,
) -> PromotionAvailability {
    if !piece.can_promote() {
        return PromotionAvailability::None;
    }

    let start_in = in_promotion_zone(piece.owner, start);
    let end_in = in_promotion_zone(piece.owner, end);

    if end_in && !can_move_from(profile_for(piece.identity, options), piece.owner, end) {
        return PromotionAvailability::Must;
    }

    if (end_in && !start_in) || (start_in && did_capture) {
        return PromotionAvailability::May;
    }

    PromotionAvailability::None
}

/// Returns true if the profile grants at least one move from `sq` on an empty board.
fn can_move_from(profile: &MovementProfile, owner: Color, sq: Square) -> bool {
    if profile.area_move() {
        return true;
    }

    let steps = Direction::BASIC.into_iter().any(|d| {
        (profile.step_range(d) > 0 || profile.igui_in(d)) && d.walk(owner, sq, 1).is_some()
    });

    let jumps = Direction::ALL.into_iter().any(|d| {
        profile.jump_range(d).is_some_and(|jump| {
            jump.distances
                .iter()
                .any(|&n| d.walk(owner, sq, n).is_some())
        })
    });

    let hooks = profile.hook_move().is_some_and(|hook| {
        hook.first_legs()
            .iter()
            .any(|d| d.walk(owner, sq, 1).is_some())
    });

    steps || jumps || hooks
}
