//! The fixed starting position.
//!
//! Black's twelve home ranks are listed as half-rows of eighteen labels covering files
//! 0 to 17. Each half-row is mirrored onto files 18 to 35, swapping left- and right-handed
//! pieces, and White receives the same setup rotated by 180 degrees.

use tracing::debug;

use crate::board::Board;
use crate::catalog::PieceIdentity;
use crate::core::color::Color;
use crate::core::square::{Square, BOARD_SIZE};
use crate::piece::Piece;

const HALF_WIDTH: usize = BOARD_SIZE as usize / 2;

/// Black's home ranks from the back rank forward. `.` marks an empty square.
const HALF_ROWS: [(u8, [&str; HALF_WIDTH]); 12] = [
    (35, ["L", "TF", "RR", "WE", "TS", "MW", "OM", "WG", "SG", "EG", "TG", "I", "C", "S", "G", "DS", "LGE", "DE"]),
    (34, ["RV", "AB", "EW", "SBO", "CSP", "FCO", "BDG", "BBE", "CM", "SWS", "PGN", "CKG", "HG", "OG", "BC", "BT", "LHD", "FL"]),
    (33, ["SOX", "SSP", "SMK", "SWO", "VO", "VBR", "VS", "VW", "EFX", "EBA", "DON", "GOG", "WR", "YA", "BDV", "CC", "BWS", "PH"]),
    (32, ["LCH", "VBE", "VHO", "VLE", "VPU", "VTI", "VWO", "ORA", "BA", "SO", "CCK", "PS", "EDR", "FW", "KY", "LTU", "GDE", "LN"]),
    (31, ["RTI", "RBE", "RH", "RW", "RST", "RP", "RS", "RCH", "GCH", "SCH", "CCH", "STC", "ECH", "LDG", "SHA", "MDO", "MGN", "Q"]),
    (30, ["LTI", "LDR", "LME", "MFA", "MST", "MCR", "SBR", "FSD", "CST", "CMA", "GMA", "FID", "LH", "FOD", "WDG", "RND", "GS", "VG"]),
    (29, ["SSO", "VSO", "CHS", "WBF", "SPS", "CBS", "HSO", "OSO", "LSO", "BRS", "BS", "NB", "SBA", "EB", "WB", "GTU", "GEA", "HF"]),
    (28, ["HM", "CA", "PK", "LNG", "GDR", "GSH", "GDO", "GEL", "GLE", "GTI", "GWH", "FRE", "SCR", "SEA", "CDO", "TKG", "RKG", "BSG"]),
    (27, ["R", "B", "DK", "DH", "CD", "CE", "BOP", "WS", "RFA", "FFA", "FTG", "PMO", "FCR", "VD", "SHD", "SQM", "SB", "SE"]),
    (26, ["N", "VM", "SM", "FS", "WH", "WL", "FOX", "FBE", "FDE", "FWO", "FLE", "FSE", "FBO", "FPU", "FBI", "FFI", "FDG", "FE"]),
    (25, ["P", "P", "P", "P", "P", "P", "P", "P", "P", "P", "P", "P", "P", "P", "P", "P", "P", "P"]),
    (24, [".", ".", "D", ".", ".", "GB", ".", ".", "D", ".", ".", "GB", ".", ".", "D", ".", ".", "GB"]),
];

/// Pieces on the centre files that break the mirror symmetry, for Black.
const CENTER: [(u8, u8, PieceIdentity); 5] = [
    (17, 35, PieceIdentity::King),
    (17, 33, PieceIdentity::Kirin),
    (17, 32, PieceIdentity::LionDog),
    (17, 31, PieceIdentity::FreeKing),
    (17, 30, PieceIdentity::GreatGeneral),
];

/// Left- and right-handed counterparts swapped by mirroring.
const MIRROR_PAIRS: [(PieceIdentity, PieceIdentity); 10] = [
    (PieceIdentity::LeftGeneral, PieceIdentity::RightGeneral),
    (PieceIdentity::LeftArmy, PieceIdentity::RightArmy),
    (PieceIdentity::LeftChariot, PieceIdentity::RightChariot),
    (PieceIdentity::LeftTiger, PieceIdentity::RightTiger),
    (PieceIdentity::LeftDragon, PieceIdentity::RightDragon),
    (PieceIdentity::LeftHowlingDog, PieceIdentity::RightHowlingDog),
    (PieceIdentity::LeftDog, PieceIdentity::RightDog),
    (PieceIdentity::LeftMountainEagle, PieceIdentity::RightMountainEagle),
    (PieceIdentity::DarkSpirit, PieceIdentity::Deva),
    (PieceIdentity::TurtleSnake, PieceIdentity::VermillionSparrow),
];

/// Returns the counterpart of a left- or right-handed piece, or the piece itself.
pub fn mirrored(id: PieceIdentity) -> PieceIdentity {
    MIRROR_PAIRS
        .iter()
        .find_map(|&(l, r)| {
            if l == id {
                Some(r)
            } else if r == id {
                Some(l)
            } else {
                None
            }
        })
        .unwrap_or(id)
}

/// Parses one half-row.
///
/// # Panics
///
/// Panics if a label names no piece. The built-in table is fixed, so this only fires
/// when the table itself is broken.
fn parse_half_row(labels: &[&str]) -> Vec<Option<PieceIdentity>> {
    labels
        .iter()
        .map(|&label| match label {
            "." => None,
            _ => Some(
                PieceIdentity::from_abbreviation(label)
                    .unwrap_or_else(|| panic!("unknown piece label `{label}` in starting layout")),
            ),
        })
        .collect()
}

/// Builds the board of a new game.
///
/// ```
/// use taikyoku::layout::initial_board;
/// use taikyoku::{Color, PieceIdentity, Square};
///
/// let board = initial_board();
/// let king = board.get(Square::new(17, 35).unwrap()).unwrap();
/// assert_eq!((Color::Black, PieceIdentity::King), (king.owner, king.identity));
/// let king = board.get(Square::new(18, 0).unwrap()).unwrap();
/// assert_eq!((Color::White, PieceIdentity::King), (king.owner, king.identity));
/// ```
pub fn initial_board() -> Board {
    let mut board = Board::empty();

    let mut place = |x: u8, y: u8, id: PieceIdentity| {
        let black = Square::new(x, y).unwrap_or_else(|| panic!("layout square {x},{y} off board"));
        board.set(black, Some(Piece::new(Color::Black, id)));
        board.set(black.rotated(), Some(Piece::new(Color::White, id)));
    };

    for (y, labels) in HALF_ROWS.iter() {
        for (x, id) in parse_half_row(labels).into_iter().enumerate() {
            if let Some(id) = id {
                place(x as u8, *y, id);
                place(BOARD_SIZE - 1 - x as u8, *y, mirrored(id));
            }
        }
    }

    for &(x, y, id) in CENTER.iter() {
        place(x, y, id);
    }

    debug!(pieces = board.count(), "built starting layout");
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_and_complete() {
        let board = initial_board();
        let black = board.pieces_of(Color::Black).count();
        let white = board.pieces_of(Color::White).count();
        assert_eq!(black, white);
        assert!(black > 350, "only {black} pieces per side");

        for (sq, pc) in board.pieces() {
            let other = board.get(sq.rotated()).unwrap();
            assert_eq!(pc.identity, other.identity, "asymmetric at {sq}");
            assert_eq!(pc.owner.opponent(), other.owner, "asymmetric at {sq}");
            assert!(!pc.promoted);
        }
    }

    #[test]
    fn home_ranks() {
        let board = initial_board();
        for (sq, pc) in board.pieces() {
            match pc.owner {
                Color::Black => assert!(sq.y() >= 24, "black piece at {sq}"),
                Color::White => assert!(sq.y() <= 11, "white piece at {sq}"),
            }
        }

        for x in 0..BOARD_SIZE {
            let pawn = board.get(Square::new(x, 25).unwrap()).unwrap();
            assert_eq!(PieceIdentity::Pawn, pawn.identity);
        }
    }

    #[test]
    fn royalty() {
        let board = initial_board();
        let kings: Vec<_> = board
            .pieces()
            .filter(|(_, pc)| pc.is_royal())
            .map(|(sq, pc)| (sq.coordinates(), pc.owner))
            .collect();
        assert_eq!(vec![((18, 0), Color::White), ((17, 35), Color::Black)], kings);

        let de = board.get(Square::new(18, 35).unwrap()).unwrap();
        assert_eq!(PieceIdentity::DrunkElephant, de.identity);
    }

    #[test]
    fn mirror_swaps_hands() {
        let board = initial_board();
        let left = board.get(Square::new(16, 35).unwrap()).unwrap();
        let right = board.get(Square::new(19, 35).unwrap()).unwrap();
        assert_eq!(PieceIdentity::LeftGeneral, left.identity);
        assert_eq!(PieceIdentity::RightGeneral, right.identity);

        assert_eq!(PieceIdentity::Deva, mirrored(PieceIdentity::DarkSpirit));
        assert_eq!(PieceIdentity::Pawn, mirrored(PieceIdentity::Pawn));
    }

    #[test]
    #[should_panic(expected = "unknown piece label `XYZ`")]
    fn malformed_row_panics() {
        parse_half_row(&["P", "XYZ"]);
    }
}
