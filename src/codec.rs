//! Lossless persistence of a [`GameState`] as a JSON document.
//!
//! The document doubles as the save-file format and the network payload. Enumerations are
//! carried as strings and decoded by hand, so that a bad value is reported with the path
//! of the field holding it. Nothing is built until every field has been accepted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::catalog::PieceIdentity;
use crate::core::color::Color;
use crate::core::error::{CodecError, CodecResult};
use crate::core::square::Square;
use crate::game::{GameEnd, GameEndKind, GameState};
use crate::options::GameOptions;
use crate::piece::Piece;
use crate::record::{MoveDescription, MoveHistory};

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct GameDocument {
    board: Vec<PlacedPieceDoc>,
    player: Option<String>,
    options: Vec<String>,
    ending: Option<String>,
    winner: Option<String>,
    moves: Vec<MoveDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlacedPieceDoc {
    square: [i64; 2],
    owner: String,
    identity: String,
    promoted: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PieceDoc {
    owner: String,
    identity: String,
    promoted: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaptureDoc {
    square: [i64; 2],
    piece: PieceDoc,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct MoveDoc {
    start: [i64; 2],
    end: [i64; 2],
    mid: Option<[i64; 2]>,
    placed: PieceDoc,
    promoted_from: Option<String>,
    captures: Vec<CaptureDoc>,
}

/// Encodes the full game, including its history.
///
/// # Examples
///
/// ```
/// use taikyoku::{deserialize, serialize, GameOptions, GameState};
///
/// let game = GameState::new_game(GameOptions::ALTERNATE_WOODEN_DOVE);
/// let bytes = serialize(&game);
/// let restored = deserialize(&bytes).unwrap();
/// assert!(restored.board_equals(&game));
/// ```
///
/// # Panics
///
/// Never in practice: the document holds only strings, booleans, integers and arrays of
/// them, which `serde_json` always encodes.
pub fn serialize(state: &GameState) -> Vec<u8> {
    let doc = GameDocument {
        board: state
            .board()
            .pieces()
            .map(|(sq, pc)| PlacedPieceDoc {
                square: encode_square(sq),
                owner: pc.owner.name().to_string(),
                identity: pc.identity.id().to_string(),
                promoted: pc.promoted,
            })
            .collect(),
        player: state.current_player().map(|c| c.name().to_string()),
        options: state.options().names().into_iter().map(String::from).collect(),
        ending: state.ending().map(|k| k.name().to_string()),
        winner: state.winner().map(|c| c.name().to_string()),
        moves: state.history().iter().map(encode_move).collect(),
    };

    serde_json::to_vec(&doc).expect("a game document always serializes")
}

/// Decodes a game encoded by [`serialize`].
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] if the input is not a game document and
/// [`CodecError::InvalidField`] naming the first unacceptable field otherwise.
pub fn deserialize(bytes: &[u8]) -> CodecResult<GameState> {
    let doc: GameDocument = serde_json::from_slice(bytes)?;

    let mut board = Board::empty();
    let mut seen = HashSet::new();
    for (i, placed) in doc.board.iter().enumerate() {
        let field = format!("board[{i}]");
        let sq = decode_square(placed.square, &format!("{field}.square"))?;
        if !seen.insert(sq) {
            return Err(CodecError::invalid(
                format!("{field}.square"),
                format!("square {sq} is occupied twice"),
            ));
        }

        let pc = decode_piece(&placed.owner, &placed.identity, placed.promoted, &field)?;
        board.set(sq, Some(pc));
    }

    let player = doc
        .player
        .as_deref()
        .map(|s| decode_color(s, "player"))
        .transpose()?;

    let mut options = GameOptions::empty();
    for (i, name) in doc.options.iter().enumerate() {
        let flag = GameOptions::from_flag_name(name).ok_or_else(|| {
            CodecError::invalid(format!("options[{i}]"), format!("unknown option `{name}`"))
        })?;
        options |= flag;
    }

    let ending = doc
        .ending
        .as_deref()
        .map(|s| {
            GameEndKind::from_name(s)
                .ok_or_else(|| CodecError::invalid("ending", format!("unknown ending `{s}`")))
        })
        .transpose()?;
    let winner = doc
        .winner
        .as_deref()
        .map(|s| decode_color(s, "winner"))
        .transpose()?;

    let end = match (ending, winner, player) {
        (Some(kind), Some(winner), None) => Some(GameEnd { kind, winner }),
        (None, None, Some(_)) => None,
        _ => {
            return Err(CodecError::invalid(
                "ending",
                "ending, winner and player disagree on whether the game is over",
            ))
        }
    };

    let moves = doc
        .moves
        .iter()
        .enumerate()
        .map(|(i, m)| decode_move(m, &format!("moves[{i}]")))
        .collect::<CodecResult<Vec<_>>>()?;

    Ok(GameState::from_parts(
        board,
        player,
        options,
        end,
        MoveHistory::from(moves),
    ))
}

fn encode_square(sq: Square) -> [i64; 2] {
    [sq.x() as i64, sq.y() as i64]
}

fn encode_piece(pc: Piece) -> PieceDoc {
    PieceDoc {
        owner: pc.owner.name().to_string(),
        identity: pc.identity.id().to_string(),
        promoted: pc.promoted,
    }
}

fn encode_move(record: &MoveDescription) -> MoveDoc {
    MoveDoc {
        start: encode_square(record.start),
        end: encode_square(record.end),
        mid: record.mid.map(encode_square),
        placed: encode_piece(record.placed),
        promoted_from: record.promoted_from.map(|id| id.id().to_string()),
        captures: record
            .captures
            .iter()
            .map(|(pc, sq)| CaptureDoc {
                square: encode_square(*sq),
                piece: encode_piece(*pc),
            })
            .collect(),
    }
}

fn decode_square(coords: [i64; 2], field: &str) -> CodecResult<Square> {
    let [x, y] = coords;
    u8::try_from(x)
        .ok()
        .zip(u8::try_from(y).ok())
        .and_then(|(x, y)| Square::new(x, y))
        .ok_or_else(|| CodecError::invalid(field, format!("[{x}, {y}] is off the board")))
}

fn decode_color(s: &str, field: &str) -> CodecResult<Color> {
    Color::from_name(s).ok_or_else(|| CodecError::invalid(field, format!("unknown player `{s}`")))
}

fn decode_identity(s: &str, field: &str) -> CodecResult<PieceIdentity> {
    PieceIdentity::from_id(s)
        .ok_or_else(|| CodecError::invalid(field, format!("unknown piece `{s}`")))
}

fn decode_piece(owner: &str, identity: &str, promoted: bool, field: &str) -> CodecResult<Piece> {
    Ok(Piece {
        owner: decode_color(owner, &format!("{field}.owner"))?,
        identity: decode_identity(identity, &format!("{field}.identity"))?,
        promoted,
    })
}

fn decode_move(doc: &MoveDoc, field: &str) -> CodecResult<MoveDescription> {
    let captures = doc
        .captures
        .iter()
        .enumerate()
        .map(|(j, c)| {
            let field = format!("{field}.captures[{j}]");
            let sq = decode_square(c.square, &format!("{field}.square"))?;
            let pc = decode_piece(
                &c.piece.owner,
                &c.piece.identity,
                c.piece.promoted,
                &format!("{field}.piece"),
            )?;
            Ok::<_, CodecError>((pc, sq))
        })
        .collect::<CodecResult<Vec<_>>>()?;

    Ok(MoveDescription {
        start: decode_square(doc.start, &format!("{field}.start"))?,
        end: decode_square(doc.end, &format!("{field}.end"))?,
        mid: doc
            .mid
            .map(|m| decode_square(m, &format!("{field}.mid")))
            .transpose()?,
        placed: decode_piece(
            &doc.placed.owner,
            &doc.placed.identity,
            doc.placed.promoted,
            &format!("{field}.placed"),
        )?,
        promoted_from: doc
            .promoted_from
            .as_deref()
            .map(|s| decode_identity(s, &format!("{field}.promoted_from")))
            .transpose()?,
        captures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sq(x: u8, y: u8) -> Square {
        Square::new(x, y).unwrap()
    }

    fn small_game() -> GameState {
        let mut board = Board::empty();
        board.set(sq(10, 20), Some(Piece::new(Color::Black, PieceIdentity::GreatGeneral)));
        board.set(sq(10, 18), Some(Piece::new(Color::White, PieceIdentity::Pawn)));
        board.set(sq(10, 17), Some(Piece::new(Color::White, PieceIdentity::Pawn)));
        board.set(sq(3, 11), Some(Piece::new(Color::White, PieceIdentity::GoldGeneral)));
        board.set(sq(0, 0), Some(Piece::new(Color::White, PieceIdentity::King)));
        board.set(sq(35, 35), Some(Piece::new(Color::Black, PieceIdentity::King)));
        GameState::with_board(board, Color::Black, GameOptions::ALTERNATE_TREACHEROUS_FOX)
    }

    fn roundtrip(game: &GameState) -> GameState {
        deserialize(&serialize(game)).unwrap()
    }

    fn document(game: &GameState) -> Value {
        serde_json::from_slice(&serialize(game)).unwrap()
    }

    fn field_of(value: Value) -> Option<String> {
        let bytes = serde_json::to_vec(&value).unwrap();
        match deserialize(&bytes) {
            Err(CodecError::InvalidField { field, .. }) => Some(field),
            _ => None,
        }
    }

    #[test]
    fn new_game_roundtrip() {
        let game = GameState::new_game(GameOptions::empty());
        let restored = roundtrip(&game);
        assert!(restored.board_equals(&game));
        assert!(restored.history().is_empty());
    }

    #[test]
    fn history_roundtrip() {
        let mut game = small_game();
        game.make_move(sq(10, 20), sq(10, 16), None, false).unwrap();
        game.make_move(sq(3, 11), sq(3, 12), None, false).unwrap();

        let mut restored = roundtrip(&game);
        assert!(restored.board_equals(&game));
        assert_eq!(game.history(), restored.history());
        assert_eq!(2, restored.history().len());

        // Undo keeps working across the persistence boundary.
        restored.undo_last_move().unwrap();
        restored.undo_last_move().unwrap();
        assert!(restored.board_equals(&small_game()));
    }

    #[test]
    fn ended_roundtrip() {
        let mut game = small_game();
        game.resign(Color::Black).unwrap();

        let restored = roundtrip(&game);
        assert!(restored.board_equals(&game));
        assert_eq!(game.game_end(), restored.game_end());
        assert_eq!(None, restored.current_player());
        assert!(restored.check_invariants());

        let doc = document(&game);
        assert_eq!(json!("Resignation"), doc["ending"]);
        assert_eq!(json!("White"), doc["winner"]);
        assert_eq!(Value::Null, doc["player"]);
        assert_eq!(json!(["ALTERNATE_TREACHEROUS_FOX"]), doc["options"]);
    }

    #[test]
    fn promoted_flag_roundtrip() {
        let mut board = Board::empty();
        let tokin = Piece::new(Color::Black, PieceIdentity::Pawn).promote().unwrap();
        board.set(sq(4, 4), Some(tokin));
        let game = GameState::with_board(board, Color::White, GameOptions::empty());

        let restored = roundtrip(&game);
        assert_eq!(Some(tokin), restored.piece_at(sq(4, 4)));
        assert_eq!(Some(Color::White), restored.current_player());
    }

    #[test]
    fn malformed() {
        assert!(matches!(deserialize(b"{"), Err(CodecError::Malformed(_))));
        assert!(matches!(deserialize(b"[]"), Err(CodecError::Malformed(_))));

        let mut doc = document(&small_game());
        doc.as_object_mut().unwrap().remove("moves");
        let bytes = serde_json::to_vec(&doc).unwrap();
        assert!(matches!(deserialize(&bytes), Err(CodecError::Malformed(_))));

        let mut doc = document(&small_game());
        doc["extra"] = json!(1);
        let bytes = serde_json::to_vec(&doc).unwrap();
        assert!(matches!(deserialize(&bytes), Err(CodecError::Malformed(_))));
    }

    #[test]
    fn invalid_fields() {
        let base = document(&small_game());

        let mut doc = base.clone();
        doc["board"][1]["identity"] = json!("Emperor");
        assert_eq!(Some("board[1].identity".to_string()), field_of(doc));

        let mut doc = base.clone();
        doc["board"][0]["square"] = json!([36, 0]);
        assert_eq!(Some("board[0].square".to_string()), field_of(doc));

        let mut doc = base.clone();
        doc["board"][2]["square"] = doc["board"][1]["square"].clone();
        assert_eq!(Some("board[2].square".to_string()), field_of(doc));

        let mut doc = base.clone();
        doc["board"][0]["owner"] = json!("Red");
        assert_eq!(Some("board[0].owner".to_string()), field_of(doc));

        let mut doc = base.clone();
        doc["player"] = json!("Green");
        assert_eq!(Some("player".to_string()), field_of(doc));

        let mut doc = base.clone();
        doc["options"] = json!(["ALTERNATE_LION"]);
        assert_eq!(Some("options[0]".to_string()), field_of(doc));

        let mut doc = base.clone();
        doc["winner"] = json!("White");
        assert_eq!(Some("ending".to_string()), field_of(doc));

        let mut doc = base;
        doc["ending"] = json!("Stalemate");
        assert_eq!(Some("ending".to_string()), field_of(doc));
    }

    #[test]
    fn invalid_move_fields() {
        let mut game = small_game();
        game.make_move(sq(10, 20), sq(10, 16), None, false).unwrap();
        let base = document(&game);

        let mut doc = base.clone();
        doc["moves"][0]["captures"][1]["square"] = json!([-1, 3]);
        assert_eq!(Some("moves[0].captures[1].square".to_string()), field_of(doc));

        let mut doc = base.clone();
        doc["moves"][0]["placed"]["identity"] = json!("Nobody");
        assert_eq!(Some("moves[0].placed.identity".to_string()), field_of(doc));

        let mut doc = base;
        doc["moves"][0]["promoted_from"] = json!("Nobody");
        assert_eq!(Some("moves[0].promoted_from".to_string()), field_of(doc));
    }
}
