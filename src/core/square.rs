use std::fmt;
use std::iter;
use std::str::FromStr;

use super::color::Color;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: u8 = 36;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Represents a position of each cell in the 36×36 game board.
///
/// `x` counts files from the left edge as seen by Black, `y` counts ranks from White's
/// back rank, so Black's pieces start on the high ranks and advance toward `y == 0`.
///
/// # Examples
///
/// ```
/// use taikyoku::Square;
///
/// let sq = Square::new(12, 25).unwrap();
/// assert_eq!("12,25", sq.to_string());
/// assert_eq!(None, Square::new(36, 0));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct Square {
    inner: u16,
}

impl Square {
    /// Creates a new instance of `Square`.
    ///
    /// Both `x` and `y` can take a value from 0 to 35.
    pub fn new(x: u8, y: u8) -> Option<Square> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return None;
        }

        Some(Square {
            inner: y as u16 * BOARD_SIZE as u16 + x as u16,
        })
    }

    /// Creates a new instance of `Square` with the given index value.
    pub fn from_index(index: usize) -> Option<Square> {
        if index >= NUM_SQUARES {
            return None;
        }

        Some(Square { inner: index as u16 })
    }

    /// Returns an iterator of all squares on the board, rank by rank.
    pub fn iter() -> SquareIter {
        SquareIter { current: 0 }
    }

    /// Returns the file of the square.
    pub fn x(self) -> u8 {
        (self.inner % BOARD_SIZE as u16) as u8
    }

    /// Returns the rank of the square.
    pub fn y(self) -> u8 {
        (self.inner / BOARD_SIZE as u16) as u8
    }

    /// Returns both coordinates as a tuple.
    #[inline(always)]
    pub fn coordinates(self) -> (u8, u8) {
        (self.x(), self.y())
    }

    /// Returns a new `Square` instance by moving the file and the rank values.
    ///
    /// Returns `None` when the result falls off the board.
    #[must_use]
    pub fn shift(self, dx: i16, dy: i16) -> Option<Square> {
        let x = self.x() as i16 + dx;
        let y = self.y() as i16 + dy;
        let size = BOARD_SIZE as i16;

        if !(0..size).contains(&x) || !(0..size).contains(&y) {
            return None;
        }

        Square::new(x as u8, y as u8)
    }

    /// Returns the rank counted from the far edge as seen by the given color.
    ///
    /// A relative rank of 0 is the last rank the color can advance to.
    ///
    /// ```
    /// use taikyoku::{Color, Square};
    ///
    /// let sq = Square::new(3, 5).unwrap();
    /// assert_eq!(5, sq.relative_rank(Color::Black));
    /// assert_eq!(30, sq.relative_rank(Color::White));
    /// ```
    pub fn relative_rank(self, c: Color) -> u8 {
        match c {
            Color::Black => self.y(),
            Color::White => BOARD_SIZE - 1 - self.y(),
        }
    }

    /// Returns the square seen from the other side of the board.
    #[must_use]
    pub fn rotated(self) -> Square {
        Square {
            inner: (NUM_SQUARES - 1 - self.index()) as u16,
        }
    }

    /// Converts the instance into the unique number for array indexing purpose.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.inner as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.x(), self.y())
    }
}

/// Error type for squares outside the board or malformed square notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid square")
    }
}

impl std::error::Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parses a square from its `x,y` display form.
    ///
    /// ```
    /// use taikyoku::Square;
    ///
    /// let sq: Square = "17,16".parse().unwrap();
    /// assert_eq!((17, 16), sq.coordinates());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or(ParseSquareError)?;
        let x = x.trim().parse().map_err(|_| ParseSquareError)?;
        let y = y.trim().parse().map_err(|_| ParseSquareError)?;
        Square::new(x, y).ok_or(ParseSquareError)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = ParseSquareError;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(x, y).ok_or(ParseSquareError)
    }
}

/// This struct is created by the [`Square::iter`] method.
pub struct SquareIter {
    current: u16,
}

impl iter::Iterator for SquareIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.current;

        if cur as usize >= NUM_SQUARES {
            return None;
        }

        self.current += 1;

        Some(Square { inner: cur })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let sq = Square::new(x, y).unwrap();
                assert_eq!(x, sq.x());
                assert_eq!(y, sq.y());
            }
        }

        assert_eq!(None, Square::new(36, 0));
        assert_eq!(None, Square::new(0, 36));
        assert_eq!(None, Square::new(200, 200));
    }

    #[test]
    fn shift() {
        let sq = Square::new(0, 35).unwrap();
        assert_eq!(Some((1, 34)), sq.shift(1, -1).map(Square::coordinates));
        assert_eq!(None, sq.shift(-1, 0));
        assert_eq!(None, sq.shift(0, 1));
        assert_eq!(Some((35, 0)), sq.shift(35, -35).map(Square::coordinates));
    }

    #[test]
    fn relative_rank() {
        let sq = Square::new(4, 0).unwrap();
        assert_eq!(0, sq.relative_rank(Color::Black));
        assert_eq!(35, sq.relative_rank(Color::White));
    }

    #[test]
    fn rotated() {
        let sq = Square::new(3, 30).unwrap();
        assert_eq!((32, 5), sq.rotated().coordinates());
        assert_eq!(sq, sq.rotated().rotated());
    }

    #[test]
    fn iter_covers_board() {
        let squares: Vec<Square> = Square::iter().collect();
        assert_eq!(NUM_SQUARES, squares.len());
        for (i, sq) in squares.iter().enumerate() {
            assert_eq!(i, sq.index());
            assert_eq!(Some(*sq), Square::from_index(i));
        }
        assert_eq!(None, Square::from_index(NUM_SQUARES));
    }

    #[test]
    fn parse() {
        let ok_cases = [("0,0", (0, 0)), ("35,35", (35, 35)), ("12, 25", (12, 25))];
        let ng_cases = ["", "1", "36,0", "0,36", "a,b", "-1,3", "1;2"];

        for (i, case) in ok_cases.iter().enumerate() {
            let sq: Square = case.0.parse().unwrap_or_else(|_| panic!("failed at #{i}"));
            assert_eq!(case.1, sq.coordinates(), "failed at #{i}");
        }

        for (i, case) in ng_cases.iter().enumerate() {
            assert!(case.parse::<Square>().is_err(), "failed at #{i}");
        }
    }
}
