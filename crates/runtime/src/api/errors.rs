//! Unified error type surfaced by the session API.
//!
//! Wraps engine rejections, lobby failures, dice and repository errors so
//! callers can match on one enum.
use thiserror::Error;

use ludo_core::{ErrorSeverity, ExecuteError, GameError, LobbyError, PlayerId};

use crate::oracle::DiceError;
pub use crate::repository::RepositoryError;
use crate::repository::GameId;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("game {0} not found")]
    GameNotFound(GameId),

    #[error("game has already started")]
    GameAlreadyStarted,

    #[error("room is full ({max} players)")]
    RoomFull { max: usize },

    #[error("player {0} has already joined")]
    AlreadyJoined(PlayerId),

    #[error("need at least {min} players to start, have {current}")]
    NotEnoughPlayers { min: usize, current: usize },

    #[error("only the host can do this, {0} is not the host")]
    NotHost(PlayerId),

    #[error("game {id} stayed contended after {attempts} attempts, retry later")]
    ConflictRetriesExhausted { id: GameId, attempts: u32 },

    #[error(transparent)]
    Rejected(#[from] ExecuteError),

    #[error("dice oracle failed: {0}")]
    Dice(#[from] DiceError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<LobbyError> for SessionError {
    fn from(err: LobbyError) -> Self {
        match err {
            LobbyError::AlreadyStarted => Self::GameAlreadyStarted,
            LobbyError::RoomFull { max } => Self::RoomFull { max },
            LobbyError::AlreadyJoined(player) => Self::AlreadyJoined(player),
            LobbyError::NotEnoughPlayers { min, current } => {
                Self::NotEnoughPlayers { min, current }
            }
        }
    }
}

impl SessionError {
    /// The engine rejection, when this error is one.
    pub fn rejection(&self) -> Option<&ExecuteError> {
        match self {
            Self::Rejected(err) => Some(err),
            _ => None,
        }
    }

    /// Stable machine-readable code for clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::GameNotFound(_) => "GAME_NOT_FOUND",
            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::RoomFull { .. } => "ROOM_FULL",
            Self::AlreadyJoined(_) => "ALREADY_JOINED",
            Self::NotEnoughPlayers { .. } => "NOT_ENOUGH_PLAYERS",
            Self::NotHost(_) => "NOT_HOST",
            Self::ConflictRetriesExhausted { .. } => "RETRY",
            Self::Rejected(err) => err.error_code(),
            Self::Dice(_) => "DICE_UNAVAILABLE",
            Self::Repository(_) => "REPOSITORY_ERROR",
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Rejected(err) => err.severity(),
            Self::GameNotFound(_)
            | Self::AlreadyJoined(_)
            | Self::NotEnoughPlayers { .. }
            | Self::NotHost(_) => ErrorSeverity::Validation,
            Self::GameAlreadyStarted
            | Self::RoomFull { .. }
            | Self::ConflictRetriesExhausted { .. } => ErrorSeverity::Recoverable,
            Self::Dice(_) | Self::Repository(_) => ErrorSeverity::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lobby_errors_map_onto_session_taxonomy() {
        let err = SessionError::from(LobbyError::RoomFull { max: 4 });
        assert!(matches!(err, SessionError::RoomFull { max: 4 }));
        assert_eq!(err.code(), "ROOM_FULL");

        let err = SessionError::from(LobbyError::AlreadyStarted);
        assert!(matches!(err, SessionError::GameAlreadyStarted));
    }

    #[test]
    fn exhausted_retries_surface_as_retry() {
        let err = SessionError::ConflictRetriesExhausted {
            id: GameId::from("g"),
            attempts: 5,
        };
        assert_eq!(err.code(), "RETRY");
        assert!(err.severity().is_recoverable());
    }
}
