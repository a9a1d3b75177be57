use arrayvec::ArrayVec;

use crate::action::{ActionTransition, DieValue, compute_available_moves};
use crate::config::GameSettings;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{AvailableMoves, Game, InvariantViolation, PlayerId, TokenIndex};
use crate::turn;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RollError {
    #[error("game has not started")]
    GameNotStarted,

    #[error("game is over")]
    GameOver,

    #[error("player {0} is not seated in this game")]
    UnknownPlayer(PlayerId),

    #[error("it is {current}'s turn, not {actor}'s")]
    NotYourTurn { actor: PlayerId, current: PlayerId },

    #[error("dice already rolled ({dice}) and not yet spent")]
    AlreadyRolled { dice: u8 },

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl GameError for RollError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::GameNotStarted | Self::GameOver => ErrorSeverity::Recoverable,
            Self::NotYourTurn { .. } | Self::AlreadyRolled { .. } => ErrorSeverity::Recoverable,
            Self::UnknownPlayer(_) => ErrorSeverity::Validation,
            Self::Invariant(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GameNotStarted => "ROLL_GAME_NOT_STARTED",
            Self::GameOver => "ROLL_GAME_OVER",
            Self::UnknownPlayer(_) => "ROLL_UNKNOWN_PLAYER",
            Self::NotYourTurn { .. } => "ROLL_NOT_YOUR_TURN",
            Self::AlreadyRolled { .. } => "ROLL_ALREADY_ROLLED",
            Self::Invariant(_) => "ROLL_INVARIANT_VIOLATED",
        }
    }
}

/// Records a die value for the player holding the turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollAction {
    pub actor: PlayerId,
    pub value: DieValue,
}

impl RollAction {
    pub fn new(actor: impl Into<PlayerId>, value: DieValue) -> Self {
        Self {
            actor: actor.into(),
            value,
        }
    }
}

/// Outcome of a roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RollResult {
    /// The value rolled, even when it was consumed by an auto-pass.
    pub dice: u8,
    pub available: ArrayVec<TokenIndex, { GameSettings::TOKENS_PER_PLAYER }>,
    /// Nothing could move; the turn already moved on.
    pub auto_passed: bool,
}

impl ActionTransition for RollAction {
    type Error = RollError;
    type Result = RollResult;

    fn actor(&self) -> &PlayerId {
        &self.actor
    }

    fn pre_validate(&self, state: &Game) -> Result<(), Self::Error> {
        if !state.started {
            return Err(RollError::GameNotStarted);
        }
        if turn::is_game_over(state) {
            return Err(RollError::GameOver);
        }
        if state.player(&self.actor).is_none() {
            return Err(RollError::UnknownPlayer(self.actor.clone()));
        }

        let current = state
            .current_player()
            .ok_or(InvariantViolation::TurnIndex(state.turn_index))?;
        if current.id != self.actor {
            return Err(RollError::NotYourTurn {
                actor: self.actor.clone(),
                current: current.id.clone(),
            });
        }

        if state.dice != 0 {
            return Err(RollError::AlreadyRolled { dice: state.dice });
        }

        Ok(())
    }

    fn apply(&self, state: &mut Game) -> Result<Self::Result, Self::Error> {
        let available = compute_available_moves(state, &self.actor, self.value);

        if available.is_empty() {
            // Nothing to move: the roll is spent in the same transition.
            state.dice = 0;
            state.available_moves = None;
            state.turn_index = turn::advance_turn(state);
            return Ok(RollResult {
                dice: self.value.get(),
                available,
                auto_passed: true,
            });
        }

        let mut moves = AvailableMoves::new();
        moves.insert(self.actor.clone(), available.clone());
        state.dice = self.value.get();
        state.available_moves = Some(moves);

        Ok(RollResult {
            dice: self.value.get(),
            available,
            auto_passed: false,
        })
    }

    fn post_validate(&self, state: &Game) -> Result<(), Self::Error> {
        state.check_invariants()?;
        Ok(())
    }
}
