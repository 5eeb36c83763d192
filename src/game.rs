use std::fmt;

use itertools::Itertools;
use tracing::{debug, info, warn};

use crate::board::Board;
use crate::core::color::Color;
use crate::core::error::MoveError;
use crate::core::square::{Square, BOARD_SIZE};
use crate::layout::initial_board;
use crate::movegen::{Move, MoveGenerator, MoveKind};
use crate::options::GameOptions;
use crate::piece::Piece;
use crate::promotion::PromotionAvailability;
use crate::record::{MoveDescription, MoveHistory};

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEndKind {
    /// The last royal piece of the loser was captured.
    Checkmate,
    /// The loser resigned.
    Resignation,
    /// The loser attempted an illegal move and forfeited.
    IllegalMove,
}

impl GameEndKind {
    /// Returns the name used in persisted documents.
    pub fn name(self) -> &'static str {
        match self {
            GameEndKind::Checkmate => "Checkmate",
            GameEndKind::Resignation => "Resignation",
            GameEndKind::IllegalMove => "IllegalMove",
        }
    }

    /// Parses the name produced by [`GameEndKind::name`].
    pub fn from_name(s: &str) -> Option<GameEndKind> {
        match s {
            "Checkmate" => Some(GameEndKind::Checkmate),
            "Resignation" => Some(GameEndKind::Resignation),
            "IllegalMove" => Some(GameEndKind::IllegalMove),
            _ => None,
        }
    }
}

impl fmt::Display for GameEndKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameEnd {
    pub kind: GameEndKind,
    pub winner: Color,
}

/// What happens to the turn after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnChange {
    /// The game goes on with this side to move.
    NextPlayer(Color),
    /// The game is over.
    GameEnded(GameEnd),
}

/// The change log of one call to [`GameState::make_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The applied move, or `None` if the request was illegal and forfeited the game.
    pub applied: Option<MoveDescription>,
    pub turn: TurnChange,
}

impl MoveOutcome {
    /// Returns the game result if the move ended the game.
    pub fn game_end(&self) -> Option<GameEnd> {
        match self.turn {
            TurnChange::GameEnded(end) => Some(end),
            TurnChange::NextPlayer(_) => None,
        }
    }
}

/// Represents a state of the game.
///
/// The side to move is `None` exactly when the game has ended, in which case both the
/// ending and the winner are set.
///
/// # Examples
///
/// ```
/// use taikyoku::{Color, GameOptions, GameState, Square, TurnChange};
///
/// let mut game = GameState::new_game(GameOptions::empty());
/// assert_eq!(Some(Color::Black), game.current_player());
///
/// // Advance the pawn on file 16.
/// let start = Square::new(16, 25).unwrap();
/// let end = Square::new(16, 24).unwrap();
/// let outcome = game.make_move(start, end, None, false).unwrap();
/// assert_eq!(TurnChange::NextPlayer(Color::White), outcome.turn);
///
/// game.undo_last_move().unwrap();
/// assert_eq!(Some(Color::Black), game.current_player());
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Option<Color>,
    options: GameOptions,
    ending: Option<GameEndKind>,
    winner: Option<Color>,
    history: MoveHistory,
}

impl GameState {
    /// Creates a game in the standard starting position with Black to move.
    pub fn new_game(options: GameOptions) -> GameState {
        GameState::with_board(initial_board(), Color::Black, options)
    }

    /// Creates a game from an arbitrary position with an empty history.
    pub fn with_board(board: Board, to_move: Color, options: GameOptions) -> GameState {
        GameState {
            board,
            current_player: Some(to_move),
            options,
            ending: None,
            winner: None,
            history: MoveHistory::new(),
        }
    }

    /// Assembles a game from already validated parts.
    pub(crate) fn from_parts(
        board: Board,
        current_player: Option<Color>,
        options: GameOptions,
        end: Option<GameEnd>,
        history: MoveHistory,
    ) -> GameState {
        GameState {
            board,
            current_player,
            options,
            ending: end.map(|e| e.kind),
            winner: end.map(|e| e.winner),
            history,
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Accessors
    /////////////////////////////////////////////////////////////////////////

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the piece on `sq`.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    /// Returns the side to move, or `None` once the game has ended.
    pub fn current_player(&self) -> Option<Color> {
        self.current_player
    }

    pub fn options(&self) -> GameOptions {
        self.options
    }

    pub fn ending(&self) -> Option<GameEndKind> {
        self.ending
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Returns the result of the game if it has ended.
    pub fn game_end(&self) -> Option<GameEnd> {
        match (self.ending, self.winner) {
            (Some(kind), Some(winner)) => Some(GameEnd { kind, winner }),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.current_player.is_none()
    }

    /// Returns the list of applied moves.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[cfg(any(test, feature = "debug-tools"))]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(any(test, feature = "debug-tools"))]
    pub(crate) fn set_current_player(&mut self, c: Option<Color>) {
        self.current_player = c;
    }

    /////////////////////////////////////////////////////////////////////////
    // Move generation
    /////////////////////////////////////////////////////////////////////////

    /// Returns the legal moves of the piece on `at`, optionally through an area-move
    /// middle square.
    pub fn legal_moves(&self, at: Square, mid: Option<Square>) -> Vec<Move> {
        match self.board.get(at) {
            Some(pc) => {
                MoveGenerator::new(&self.board, self.options).legal_moves(pc.owner, pc, at, mid)
            }
            None => Vec::new(),
        }
    }

    /// Returns every move of every piece of `c`, paired with the square it starts from.
    ///
    /// Area moves are not included since they need a chosen middle square.
    pub fn legal_moves_for(&self, c: Color) -> Vec<(Square, Move)> {
        let gen = MoveGenerator::new(&self.board, self.options);
        self.board
            .pieces_of(c)
            .flat_map(|(sq, pc)| {
                gen.legal_moves(c, pc, sq, None)
                    .into_iter()
                    .map(move |m| (sq, m))
            })
            .collect()
    }

    /////////////////////////////////////////////////////////////////////////
    // Making a move
    /////////////////////////////////////////////////////////////////////////

    /// Applies a move of the side to move.
    ///
    /// `mid` selects the middle square of an area move. A capture without moving is
    /// requested with `end == start` and the target as `mid`.
    ///
    /// An illegal request is not rejected: it forfeits the game to the opponent and is
    /// reported as an outcome with no applied move. A move whose promotion is mandatory
    /// promotes even when `promote` is false.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has already ended.
    pub fn make_move(
        &mut self,
        start: Square,
        end: Square,
        mid: Option<Square>,
        promote: bool,
    ) -> Result<MoveOutcome, MoveError> {
        let player = self.current_player.ok_or(MoveError::GameOver)?;

        let moved = match self.board.get(start) {
            Some(pc) if pc.owner == player => pc,
            Some(_) => return Ok(self.forfeit(player, "the piece belongs to the opponent")),
            None => return Ok(self.forfeit(player, "there is no piece on the start square")),
        };

        let gen = MoveGenerator::new(&self.board, self.options);
        let moves = gen.legal_moves(player, moved, start, mid);
        let Some(chosen) = select_move(&moves, start, end, mid) else {
            return Ok(self.forfeit(player, "the piece cannot move there"));
        };

        if promote && !chosen.promotion.is_available() {
            return Ok(self.forfeit(player, "the piece cannot promote on this move"));
        }

        let captures = gen.captures(player, moved.owner, start, chosen.dest, chosen.kind, mid);
        let promoting = promote || chosen.promotion == PromotionAvailability::Must;
        let placed = if promoting {
            moved
                .promote()
                .ok_or(MoveError::Inconsistent("the piece has no promoted form"))?
        } else {
            moved
        };

        for (_, sq) in captures.iter() {
            self.board.set(*sq, None);
        }
        self.board.set(start, None);
        self.board.set(end, Some(placed));

        let record = MoveDescription {
            start,
            end,
            mid,
            placed,
            promoted_from: promoting.then_some(moved.identity),
            captures,
        };
        debug!(
            start = %start,
            end = %end,
            kind = ?chosen.kind,
            captures = record.captures.len(),
            promoted = promoting,
            "applied move"
        );

        let opponent = player.opponent();
        let turn = if record.captured_royal() && !self.board.has_royal(opponent) {
            TurnChange::GameEnded(self.end_game(GameEndKind::Checkmate, player))
        } else {
            self.current_player = Some(opponent);
            TurnChange::NextPlayer(opponent)
        };

        self.history.push(record.clone());

        Ok(MoveOutcome {
            applied: Some(record),
            turn,
        })
    }

    /// Ends the game in the opponent's favour.
    fn forfeit(&mut self, player: Color, reason: &'static str) -> MoveOutcome {
        warn!(player = %player, reason, "illegal move forfeits the game");
        let end = self.end_game(GameEndKind::IllegalMove, player.opponent());
        MoveOutcome {
            applied: None,
            turn: TurnChange::GameEnded(end),
        }
    }

    fn end_game(&mut self, kind: GameEndKind, winner: Color) -> GameEnd {
        info!(kind = %kind, winner = %winner, "game over");
        self.ending = Some(kind);
        self.winner = Some(winner);
        self.current_player = None;
        GameEnd { kind, winner }
    }

    /// Ends the game with `player` resigning.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has already ended.
    pub fn resign(&mut self, player: Color) -> Result<GameEnd, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        info!(player = %player, "resigned");
        Ok(self.end_game(GameEndKind::Resignation, player.opponent()))
    }

    /// Reverts the most recent move and returns its record.
    ///
    /// Undoing the move that delivered checkmate reopens the game.
    ///
    /// # Errors
    ///
    /// - [`MoveError::EmptyHistory`] if no move has been made.
    /// - [`MoveError::GameOver`] if the game ended by resignation or forfeit.
    /// - [`MoveError::Inconsistent`] if the board no longer matches the last record.
    pub fn undo_last_move(&mut self) -> Result<MoveDescription, MoveError> {
        if matches!(
            self.ending,
            Some(GameEndKind::Resignation) | Some(GameEndKind::IllegalMove)
        ) {
            return Err(MoveError::GameOver);
        }

        let last = self.history.last().ok_or(MoveError::EmptyHistory)?;

        if self.board.get(last.end) != Some(last.placed) {
            return Err(MoveError::Inconsistent(
                "expected piece is not found on the end square",
            ));
        }
        if last.start != last.end && !self.board.is_empty_at(last.start) {
            return Err(MoveError::Inconsistent(
                "the start square is filled by another piece",
            ));
        }
        if last
            .captures
            .iter()
            .any(|(_, sq)| *sq != last.end && !self.board.is_empty_at(*sq))
        {
            return Err(MoveError::Inconsistent(
                "a captured piece's square is filled by another piece",
            ));
        }

        let last = self
            .history
            .pop()
            .ok_or(MoveError::Inconsistent("history changed while undoing"))?;

        self.board.set(last.end, None);
        self.board.set(last.start, Some(last.moved_piece()));
        for (pc, sq) in last.captures.iter() {
            self.board.set(*sq, Some(*pc));
        }

        self.ending = None;
        self.winner = None;
        self.current_player = Some(last.mover());

        debug!(start = %last.start, end = %last.end, "undid move");
        Ok(last)
    }

    /////////////////////////////////////////////////////////////////////////
    // Checks
    /////////////////////////////////////////////////////////////////////////

    /// Returns true if the ending, the winner and the absence of a side to move agree.
    pub fn check_invariants(&self) -> bool {
        self.ending.is_some() == self.winner.is_some()
            && self.ending.is_some() == self.current_player.is_none()
    }

    /// Returns true if both games have the same pieces, side to move, options and result.
    ///
    /// Histories are not compared.
    pub fn board_equals(&self, other: &GameState) -> bool {
        self.board == other.board
            && self.current_player == other.current_player
            && self.options == other.options
            && self.ending == other.ending
            && self.winner == other.winner
    }
}

/// Picks the generated move matching a request.
///
/// Without `mid` a plain move wins over a ranged capture to the same square. With `mid`
/// only area moves through it or captures of it without moving qualify.
fn select_move(moves: &[Move], start: Square, end: Square, mid: Option<Square>) -> Option<Move> {
    match mid {
        None => moves
            .iter()
            .filter(|m| m.dest == end)
            .filter(|m| matches!(m.kind, MoveKind::Normal | MoveKind::RangedCapture))
            .min_by_key(|m| m.kind)
            .copied(),
        Some(mid) => moves
            .iter()
            .find(|m| match m.kind {
                MoveKind::Area => m.dest == end,
                MoveKind::Igui => m.dest == mid && end == start,
                _ => false,
            })
            .copied(),
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header = (0..BOARD_SIZE).map(|x| format!("{x:>4}")).join("");
        writeln!(f, "   {header}")?;

        for y in 0..BOARD_SIZE {
            write!(f, "{y:>3}")?;
            for x in 0..BOARD_SIZE {
                match Square::new(x, y).and_then(|sq| self.board.get(sq)) {
                    Some(pc) => write!(f, "{:>4}", pc.to_string())?,
                    None => write!(f, "   .")?,
                }
            }
            writeln!(f)?;
        }

        match (self.current_player, self.game_end()) {
            (Some(c), _) => writeln!(f, "Side to move: {c}")?,
            (None, Some(end)) => writeln!(f, "Game over: {} ({} wins)", end.kind, end.winner)?,
            (None, None) => writeln!(f, "Game over")?,
        }

        write!(f, "Moves: {}", self.history.len())
    }
}
