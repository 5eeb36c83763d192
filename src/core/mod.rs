//! Core types shared by every part of the engine.
//!
//! This module contains the board primitives that don't depend on piece definitions.

pub mod color;
pub mod direction;
pub mod error;
pub mod square;

pub use color::{Color, ColorIter};
pub use direction::{Direction, DirectionSet};
pub use error::{CodecError, CodecResult, MoveError};
pub use square::{ParseSquareError, Square, SquareIter, BOARD_SIZE, NUM_SQUARES};
