//! Error types returned by the game engine.
//!
//! Illegal moves are not represented here: they forfeit the game and are reported
//! through the move outcome instead.

use thiserror::Error;

/// Errors raised by state-changing operations on a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended and the operation is not allowed on a finished game.
    #[error("the game is over")]
    GameOver,

    /// Undo was requested with no move in the history.
    #[error("there is no move to undo")]
    EmptyHistory,

    /// The move history no longer agrees with the board.
    #[error("inconsistent game state: {0}")]
    Inconsistent(&'static str),
}

/// Errors raised while decoding a persisted game.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The input is not a well-formed document.
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A field is present but its value is not acceptable.
    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: String, reason: String },
}

impl CodecError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> CodecError {
        CodecError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the path of the offending field, if the error names one.
    pub fn field(&self) -> Option<&str> {
        match self {
            CodecError::InvalidField { field, .. } => Some(field),
            CodecError::Malformed(_) => None,
        }
    }
}

/// Result type alias for decoding operations.
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!("there is no move to undo", MoveError::EmptyHistory.to_string());

        let err = CodecError::invalid("board[3].identity", "unknown piece `Foo`");
        assert_eq!(Some("board[3].identity"), err.field());
        assert_eq!(
            "invalid field `board[3].identity`: unknown piece `Foo`",
            err.to_string()
        );
    }

    #[test]
    fn malformed_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CodecError = json_err.into();
        assert!(matches!(err, CodecError::Malformed(_)));
        assert_eq!(None, err.field());
    }
}
