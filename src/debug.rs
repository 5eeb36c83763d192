//! Board editing that bypasses the rules, for test setups and analysis tools.
//!
//! Only compiled for tests or with the `debug-tools` feature. Edits are not recorded in
//! the history, so undoing a move made before an edit may report an inconsistency.

use tracing::warn;

use crate::core::color::Color;
use crate::core::error::MoveError;
use crate::core::square::Square;
use crate::game::GameState;
use crate::piece::Piece;

/// Puts `pc` on `sq`, or clears the square, regardless of legality.
///
/// Returns the piece that stood there before.
pub fn set_piece(state: &mut GameState, pc: Option<Piece>, sq: Square) -> Option<Piece> {
    warn!(square = %sq, piece = ?pc, "board edited outside the rules");
    let previous = state.board().get(sq);
    state.board_mut().set(sq, pc);
    previous
}

/// Passes the turn to the other side without moving.
///
/// # Errors
///
/// Returns [`MoveError::GameOver`] if the game has ended.
pub fn force_end_turn(state: &mut GameState) -> Result<Color, MoveError> {
    let next = state.current_player().ok_or(MoveError::GameOver)?.opponent();
    warn!(next = %next, "turn passed outside the rules");
    state.set_current_player(Some(next));
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PieceIdentity;
    use crate::options::GameOptions;

    #[test]
    fn set_piece_replaces() {
        let mut game = GameState::new_game(GameOptions::empty());
        let sq = Square::new(17, 35).unwrap();
        let queen = Piece::new(Color::Black, PieceIdentity::Queen);

        let previous = set_piece(&mut game, Some(queen), sq).unwrap();
        assert_eq!(PieceIdentity::King, previous.identity);
        assert_eq!(Some(queen), game.piece_at(sq));

        assert_eq!(Some(queen), set_piece(&mut game, None, sq));
        assert_eq!(None, game.piece_at(sq));
        assert!(game.history().is_empty());
    }

    #[test]
    fn force_end_turn_alternates() {
        let mut game = GameState::new_game(GameOptions::empty());
        assert_eq!(Ok(Color::White), force_end_turn(&mut game));
        assert_eq!(Some(Color::White), game.current_player());
        assert_eq!(Ok(Color::Black), force_end_turn(&mut game));

        game.resign(Color::White).unwrap();
        assert_eq!(Err(MoveError::GameOver), force_end_turn(&mut game));
        assert!(game.check_invariants());
    }
}
