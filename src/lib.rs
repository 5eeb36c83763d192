//! A rules engine for Taikyoku shogi, the largest historical shogi variant.
//!
//! `taikyoku` provides the pieces, movement rules and game state of the 36×36 game. Each of
//! the several hundred piece kinds is described by a declarative movement profile, a single
//! move generator interprets every profile, and [`GameState`] applies moves, handles
//! promotion and royalty capture, keeps an undo history and persists itself as JSON.
//!
//! # Module Organization
//!
//! - **core**: board primitives shared by everything else (Color, Square, Direction, errors)
//! - **catalog** / **profile**: what each piece kind can do
//! - **movegen** / **promotion**: legal destinations for a piece on a given board
//! - **game** / **record**: applying, recording and undoing moves
//! - **codec**: the persisted document format
//!
//! The engine is synchronous and does no locking. Callers that share a game between
//! threads must apply its moves one at a time.
//!
//! # Examples
//!
//! ```
//! use taikyoku::{deserialize, serialize, Color, GameOptions, GameState, Square, TurnChange};
//!
//! let mut game = GameState::new_game(GameOptions::empty());
//!
//! // Every legal move of the piece on a square can be listed.
//! let pawn = Square::new(3, 25).unwrap();
//! let moves = game.legal_moves(pawn, None);
//! assert_eq!(1, moves.len());
//!
//! let outcome = game.make_move(pawn, moves[0].dest, None, false).unwrap();
//! assert_eq!(TurnChange::NextPlayer(Color::White), outcome.turn);
//!
//! // The game survives a save and load, history included.
//! let mut restored = deserialize(&serialize(&game)).unwrap();
//! restored.undo_last_move().unwrap();
//! assert!(restored.board_equals(&GameState::new_game(GameOptions::empty())));
//! ```

pub mod board;
pub mod catalog;
pub mod codec;
pub mod core;
#[cfg(any(test, feature = "debug-tools"))]
pub mod debug;
pub mod game;
pub mod layout;
pub mod movegen;
pub mod options;
pub mod piece;
pub mod profile;
pub mod promotion;
pub mod record;

pub use self::board::Board;
pub use self::catalog::{profile_for, PieceIdentity};
pub use self::codec::{deserialize, serialize};
pub use self::core::{
    CodecError, Color, Direction, DirectionSet, MoveError, ParseSquareError, Square,
};
pub use self::game::{GameEnd, GameEndKind, GameState, MoveOutcome, TurnChange};
pub use self::movegen::{Move, MoveGenerator, MoveKind};
pub use self::options::GameOptions;
pub use self::piece::Piece;
pub use self::profile::MovementProfile;
pub use self::promotion::PromotionAvailability;
pub use self::record::{MoveDescription, MoveHistory, NotationFormat};
