use std::fmt;

/// Represents each side of player. Black moves first.
///
/// # Examples
///
/// ```
/// use taikyoku::Color;
///
/// assert_eq!(Color::White, Color::Black.opponent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colours in turn order.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Returns the color of the opposite side.
    #[must_use]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Converts the instance into the unique number for array indexing purpose.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns an iterator of all variants.
    pub fn iter() -> ColorIter {
        ColorIter { current: Some(Color::Black) }
    }

    /// Returns the name used in persisted documents.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }

    /// Parses the name produced by [`Color::name`].
    pub fn from_name(s: &str) -> Option<Color> {
        match s {
            "Black" => Some(Color::Black),
            "White" => Some(Color::White),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// This struct is created by the [`Color::iter`] method.
pub struct ColorIter {
    current: Option<Color>,
}

impl Iterator for ColorIter {
    type Item = Color;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.current;

        if let Some(c) = cur {
            self.current = match c {
                Color::Black => Some(Color::White),
                Color::White => None,
            };
        }

        cur
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent() {
        assert_eq!(Color::White, Color::Black.opponent());
        assert_eq!(Color::Black, Color::White.opponent());
    }

    #[test]
    fn iter() {
        let colors: Vec<Color> = Color::iter().collect();
        assert_eq!(vec![Color::Black, Color::White], colors);
    }

    #[test]
    fn names_roundtrip() {
        for c in Color::iter() {
            assert_eq!(Some(c), Color::from_name(c.name()));
        }
        assert_eq!(None, Color::from_name("black"));
    }
}
