//! Rule options selected when a game is created.

use bitflags::bitflags;

bitflags! {
    /// Flags choosing between the two historical readings of a handful of pieces.
    ///
    /// Options are fixed for the lifetime of a game and are passed explicitly to
    /// [`profile_for`](crate::catalog::profile_for).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct GameOptions: u8 {
        /// Treacherous Fox moves like a lion instead of leaping two or three squares.
        const ALTERNATE_TREACHEROUS_FOX = 0x01;
        /// Heavenly Tetrarch leaps then slides in all directions and loses its igui.
        const ALTERNATE_HEAVENLY_TETRARCH = 0x02;
        /// Wooden Dove slides up to five squares diagonally instead of leaping.
        const ALTERNATE_WOODEN_DOVE = 0x04;
    }
}

impl GameOptions {
    /// Returns the names of the set flags, in declaration order.
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }

    /// Parses a single flag name as produced by [`GameOptions::names`].
    pub fn from_flag_name(name: &str) -> Option<GameOptions> {
        GameOptions::from_name(name)
    }
}
