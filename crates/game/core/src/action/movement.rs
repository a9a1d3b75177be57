use crate::action::ActionTransition;
use crate::board::{self, Position};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Game, InvariantViolation, PlayerId, Token, TokenIndex};
use crate::turn;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("game has not started")]
    GameNotStarted,

    #[error("game is over")]
    GameOver,

    #[error("player {0} is not seated in this game")]
    UnknownPlayer(PlayerId),

    #[error("it is {current}'s turn, not {actor}'s")]
    NotYourTurn { actor: PlayerId, current: PlayerId },

    #[error("dice has not been rolled")]
    DiceNotRolled,

    #[error("dice mismatch: rolled {expected}, request says {provided}")]
    DiceMismatch { expected: u8, provided: u8 },

    #[error("token index {0} is out of range or already home")]
    InvalidTokenIndex(TokenIndex),

    #[error("token {0} cannot move with the current roll")]
    MoveNotAvailable(TokenIndex),

    #[error("token {token} would move past its final cell")]
    Overshoot { token: TokenIndex },

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        use MoveError::*;
        match self {
            GameNotStarted | GameOver | NotYourTurn { .. } => ErrorSeverity::Recoverable,
            DiceNotRolled | DiceMismatch { .. } => ErrorSeverity::Recoverable,
            UnknownPlayer(_) | InvalidTokenIndex(_) | MoveNotAvailable(_) => {
                ErrorSeverity::Validation
            }
            Overshoot { .. } | Invariant(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use MoveError::*;
        match self {
            GameNotStarted => "MOVE_GAME_NOT_STARTED",
            GameOver => "MOVE_GAME_OVER",
            UnknownPlayer(_) => "MOVE_UNKNOWN_PLAYER",
            NotYourTurn { .. } => "MOVE_NOT_YOUR_TURN",
            DiceNotRolled => "MOVE_DICE_NOT_ROLLED",
            DiceMismatch { .. } => "MOVE_DICE_MISMATCH",
            InvalidTokenIndex(_) => "MOVE_INVALID_TOKEN_INDEX",
            MoveNotAvailable(_) => "MOVE_NOT_AVAILABLE",
            Overshoot { .. } => "MOVE_OVERSHOOT",
            Invariant(_) => "MOVE_INVARIANT_VIOLATED",
        }
    }
}

/// Moves one token by the pending roll.
///
/// `dice` is the value the client believes it rolled. It must equal the
/// stored roll, which rejects replayed or stale requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub actor: PlayerId,
    pub token: TokenIndex,
    pub dice: u8,
}

impl MoveAction {
    pub fn new(actor: impl Into<PlayerId>, token: TokenIndex, dice: u8) -> Self {
        Self {
            actor: actor.into(),
            token,
            dice,
        }
    }
}

/// An opponent token sent back to the yard.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Capture {
    pub player: PlayerId,
    pub token: TokenIndex,
    /// Track cell where the capture happened.
    pub cell: u8,
}

/// Outcome of a move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MoveResult {
    pub token: TokenIndex,
    pub from: Position,
    /// Final resting cell, after any star shortcut.
    pub to: Position,
    /// Star cell the token landed on before teleporting.
    pub shortcut_from: Option<u8>,
    pub captured: Option<Capture>,
    /// The mover rolls again.
    pub extra_turn: bool,
    /// This move brought the mover's last token home.
    pub finished: bool,
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    type Result = MoveResult;

    fn actor(&self) -> &PlayerId {
        &self.actor
    }

    fn pre_validate(&self, state: &Game) -> Result<(), Self::Error> {
        if !state.started {
            return Err(MoveError::GameNotStarted);
        }
        if turn::is_game_over(state) {
            return Err(MoveError::GameOver);
        }
        if state.player(&self.actor).is_none() {
            return Err(MoveError::UnknownPlayer(self.actor.clone()));
        }

        let current = state
            .current_player()
            .ok_or(InvariantViolation::TurnIndex(state.turn_index))?;
        if current.id != self.actor {
            return Err(MoveError::NotYourTurn {
                actor: self.actor.clone(),
                current: current.id.clone(),
            });
        }

        if state.dice == 0 {
            return Err(MoveError::DiceNotRolled);
        }
        if self.dice != state.dice {
            return Err(MoveError::DiceMismatch {
                expected: state.dice,
                provided: self.dice,
            });
        }

        let token = state
            .tokens_of(&self.actor)
            .ok_or(InvariantViolation::TokenOwners)?
            .get(self.token)
            .ok_or(MoveError::InvalidTokenIndex(self.token))?;
        if token.in_home {
            return Err(MoveError::InvalidTokenIndex(self.token));
        }

        let available = state.available_for(&self.actor).unwrap_or_default();
        if !available.contains(&self.token) {
            return Err(MoveError::MoveNotAvailable(self.token));
        }

        Ok(())
    }

    fn apply(&self, state: &mut Game) -> Result<Self::Result, Self::Error> {
        let color = state
            .player(&self.actor)
            .ok_or_else(|| MoveError::UnknownPlayer(self.actor.clone()))?
            .color;
        let from = state
            .tokens_of(&self.actor)
            .and_then(|tokens| tokens.get(self.token))
            .ok_or(MoveError::InvalidTokenIndex(self.token))?
            .pos;

        // Yard exit only happens on a six, so both triggers agree there.
        let mut extra_turn = from.is_yard() || self.dice == 6;

        let mut to = match board::steps_from_start(from, color) {
            None => Position::Track(board::entry_index(color)),
            Some(steps) => board::from_steps(steps + self.dice, color)
                .ok_or(MoveError::Overshoot { token: self.token })?,
        };

        let mut shortcut_from = None;
        if state.settings.star_shortcuts
            && let Some(cell) = to.track_cell()
            && let Some(target) = board::star_shortcut(cell, color)
        {
            shortcut_from = Some(cell);
            to = Position::Track(target);
        }

        if let Some(tokens) = state.tokens_of_mut(&self.actor) {
            tokens[self.token] = Token::at(to, color);
        }

        let captured = match to.track_cell() {
            Some(cell) if !board::is_safe_square(cell) => capture_first_at(state, &self.actor, cell),
            _ => None,
        };
        extra_turn |= captured.is_some();

        let all_home = state
            .tokens_of(&self.actor)
            .is_some_and(|tokens| tokens.iter().all(|token| token.in_home));
        let finished = all_home && !state.is_winner(&self.actor);
        if finished {
            state.winners.push(self.actor.clone());
            // A finished player never keeps the turn.
            extra_turn = false;
        }

        state.dice = 0;
        state.available_moves = None;
        if !extra_turn {
            state.turn_index = turn::advance_turn(state);
        }

        Ok(MoveResult {
            token: self.token,
            from,
            to,
            shortcut_from,
            captured,
            extra_turn,
            finished,
        })
    }

    fn post_validate(&self, state: &Game) -> Result<(), Self::Error> {
        state.check_invariants()?;
        Ok(())
    }
}

/// Sends the first opponent token found on `cell` back to the yard.
///
/// Players are scanned in seat order and tokens in index order; a cell shared
/// by several opponent tokens loses only the first one.
fn capture_first_at(state: &mut Game, mover: &PlayerId, cell: u8) -> Option<Capture> {
    let target = Position::Track(cell);
    let (player, token) = state
        .players
        .iter()
        .filter(|player| &player.id != mover)
        .find_map(|player| {
            let tokens = state.tokens_of(&player.id)?;
            tokens
                .iter()
                .position(|token| token.pos == target && !token.in_home)
                .map(|index| (player.id.clone(), index))
        })?;

    state.tokens_of_mut(&player)?[token].capture();
    Some(Capture { player, token, cell })
}
