//! State management errors.
//!
//! Lobby errors cover seating and starting a game. Invariant violations are
//! what [`Game::check_invariants`](super::Game::check_invariants) reports when
//! a stored game is internally inconsistent.

use crate::board::Position;
use crate::error::{ErrorSeverity, GameError};
use crate::state::PlayerId;

/// Errors raised while seating players or starting the game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LobbyError {
    #[error("game has already started")]
    AlreadyStarted,

    #[error("room is full ({max} players)")]
    RoomFull { max: usize },

    #[error("player {0} has already joined")]
    AlreadyJoined(PlayerId),

    #[error("need at least {min} players to start, have {current}")]
    NotEnoughPlayers { min: usize, current: usize },
}

impl GameError for LobbyError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyStarted | Self::RoomFull { .. } => ErrorSeverity::Recoverable,
            Self::AlreadyJoined(_) | Self::NotEnoughPlayers { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyStarted => "LOBBY_ALREADY_STARTED",
            Self::RoomFull { .. } => "LOBBY_ROOM_FULL",
            Self::AlreadyJoined(_) => "LOBBY_ALREADY_JOINED",
            Self::NotEnoughPlayers { .. } => "LOBBY_NOT_ENOUGH_PLAYERS",
        }
    }
}

/// A broken game invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantViolation {
    #[error("started game has {0} players")]
    PlayerCount(usize),

    #[error("token set does not match seated players")]
    TokenOwners,

    #[error("dice {dice} does not agree with available moves (present: {has_moves})")]
    DiceMovesMismatch { dice: u8, has_moves: bool },

    #[error("dice value {0} out of range")]
    DiceOutOfRange(u8),

    #[error("available moves belong to {0}, who does not hold the turn")]
    MovesOwner(PlayerId),

    #[error("available move {index} for {player} is not a movable token")]
    MoveTarget { player: PlayerId, index: usize },

    #[error("token {index} of {player} at {pos} has in_home = {in_home}")]
    HomeFlag {
        player: PlayerId,
        index: usize,
        pos: Position,
        in_home: bool,
    },

    #[error("token {index} of {player} sits in another color's stretch at {pos}")]
    ForeignStretch {
        player: PlayerId,
        index: usize,
        pos: Position,
    },

    #[error("winner {0} is listed twice or is not seated")]
    Winners(PlayerId),

    #[error("turn index {0} is out of range")]
    TurnIndex(usize),

    #[error("turn rests on finished player {0}")]
    TurnOnWinner(PlayerId),
}

impl GameError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "STATE_INVARIANT_VIOLATED"
    }
}
